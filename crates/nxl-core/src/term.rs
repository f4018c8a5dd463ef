use std::fmt;

use crate::object::Object;

/// Which role a term plays inside a fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    Literal,
    Symbol,
    Action,
    Reference,
    Variable,
}

/// Primitive payload of a literal term.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Absent,
}

/// One slot (subject, predicate or object) of a triplet fact.
///
/// Each variant carries the payload its kind requires, so a literal can
/// never hold a name and a symbol can never hold a primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Literal(LiteralValue),
    Symbol(String),
    /// Opaque descriptor of an invocable action.
    Action(String),
    /// Opaque descriptor of another fact or entity.
    Reference(String),
    /// Logical variable, bound by whatever engine consumes the fact.
    Variable(String),
}

impl Term {
    /// Literal term from any object.
    ///
    /// Strings, numbers and booleans keep their primitive value and Null maps
    /// to `Absent`. Any other kind is stored as its rendered text, so the
    /// conversion never fails and nothing readable is lost.
    pub fn literal(obj: &Object) -> Self {
        let value = match obj {
            Object::String(s) => LiteralValue::Str(s.clone()),
            Object::Number(n) => LiteralValue::Int(*n),
            Object::Boolean(b) => LiteralValue::Bool(*b),
            Object::Null => LiteralValue::Absent,
            Object::Error(_) | Object::Symbol(_) | Object::Builtin(_) | Object::Triplet(_) => {
                LiteralValue::Str(obj.render())
            }
        };
        Term::Literal(value)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Term::Symbol(name.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn action(descriptor: impl Into<String>) -> Self {
        Term::Action(descriptor.into())
    }

    pub fn reference(descriptor: impl Into<String>) -> Self {
        Term::Reference(descriptor.into())
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::Literal(_) => TermKind::Literal,
            Term::Symbol(_) => TermKind::Symbol,
            Term::Action(_) => TermKind::Action,
            Term::Reference(_) => TermKind::Reference,
            Term::Variable(_) => TermKind::Variable,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Str(s) => write!(f, "'{s}'"),
            LiteralValue::Int(n) => write!(f, "{n}"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Absent => f.write_str("null"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(value) => write!(f, "{value}"),
            Term::Symbol(name) => f.write_str(name),
            Term::Variable(name) => write!(f, "?{name}"),
            Term::Action(desc) => write!(f, "<action:{desc}>"),
            Term::Reference(desc) => write!(f, "<ref:{desc}>"),
        }
    }
}
