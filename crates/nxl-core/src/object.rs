use std::fmt;
use std::sync::Arc;

use crate::symbol::SymbolObject;
use crate::triplet::TripletFact;

/// Discriminant for every runtime value kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Null,
    Error,
    Number,
    String,
    Boolean,
    Symbol,
    Builtin,
    Triplet,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Null => "NULL",
            ObjectKind::Error => "ERROR",
            ObjectKind::Number => "NUMBER",
            ObjectKind::String => "STRING",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::Symbol => "SYMBOL",
            ObjectKind::Builtin => "BUILTIN",
            ObjectKind::Triplet => "TRIPLETA",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime value.
///
/// The set of kinds is closed: every consumer matches exhaustively, so adding
/// a variant is a compile error everywhere it has to be handled.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Null,
    Error(String),
    Number(i64),
    String(String),
    Boolean(bool),
    Symbol(SymbolObject),
    Builtin(Builtin),
    Triplet(TripletFact),
}

/// The single Null value. Never mutated.
pub static NULL: Object = Object::Null;

/// Build an `Object::Error` from a format template.
///
/// This is the only way recoverable failures are reported inside the
/// language layer; callers check `is_error()` before trusting a result.
#[macro_export]
macro_rules! new_error {
    ($($arg:tt)*) => {
        $crate::object::Object::Error(format!($($arg)*))
    };
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Null => ObjectKind::Null,
            Object::Error(_) => ObjectKind::Error,
            Object::Number(_) => ObjectKind::Number,
            Object::String(_) => ObjectKind::String,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Symbol(_) => ObjectKind::Symbol,
            Object::Builtin(_) => ObjectKind::Builtin,
            Object::Triplet(_) => ObjectKind::Triplet,
        }
    }

    /// Canonical textual form.
    pub fn render(&self) -> String {
        match self {
            Object::Null => "null".to_string(),
            Object::Error(msg) => format!("ERROR: {msg}"),
            Object::Number(n) => n.to_string(),
            Object::String(s) => format!("{s:?}"),
            Object::Boolean(b) => b.to_string(),
            Object::Symbol(sym) => sym.render(),
            Object::Builtin(_) => "builtin function".to_string(),
            Object::Triplet(fact) => fact.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Object::Error(message.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Object::String(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Object::Number(n)
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::String(s.to_string())
    }
}

impl From<SymbolObject> for Object {
    fn from(sym: SymbolObject) -> Self {
        Object::Symbol(sym)
    }
}

impl From<TripletFact> for Object {
    fn from(fact: TripletFact) -> Self {
        Object::Triplet(fact)
    }
}

pub type BuiltinFn = dyn Fn(&[Object]) -> Object + Send + Sync;

/// A native function. Failures come back as an `Object::Error`, never a panic.
#[derive(Clone)]
pub struct Builtin {
    name: &'static str,
    func: Arc<BuiltinFn>,
}

impl Builtin {
    pub fn new(name: &'static str, func: impl Fn(&[Object]) -> Object + Send + Sync + 'static) -> Self {
        Self {
            name,
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: &[Object]) -> Object {
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

/// Two builtins are equal only if they share the same function allocation.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}
