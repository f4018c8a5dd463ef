//! Composite triplet statements and their expansion into atomic ones.
//!
//! A composite statement carries a list where a single value belongs:
//!
//! ```text
//! def david could:{run, eat, drive} how:fast;
//! ```
//!
//! [`expand_verb_list`] fans out over the verbs (one statement per verb, each
//! with its own main verb) while [`expand_attribute_list`] fans out over
//! attributes (one statement per attribute, placed in the condition slot,
//! main verb and statement shared). Both are pure: the input is borrowed and
//! every output is freshly allocated.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, EntityRegistry};
use crate::object::Object;
use crate::term::Term;
use crate::triplet::TripletFact;

/// Object payload: one value, or a list standing for several statements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatementValue {
    Scalar(String),
    List(Vec<String>),
}

impl StatementValue {
    pub fn is_list(&self) -> bool {
        matches!(self, StatementValue::List(_))
    }
}

impl fmt::Display for StatementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementValue::Scalar(s) => f.write_str(s),
            StatementValue::List(items) => write!(f, "{{{}}}", items.join(", ")),
        }
    }
}

/// Why invoking a main verb produced no value.
#[derive(Debug, Clone, PartialEq)]
pub enum VerbError {
    /// The statement has no main verb bound.
    Unbound,
    /// A custom action reported a failure.
    Failed(String),
}

impl fmt::Display for VerbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbError::Unbound => write!(f, "no main verb bound"),
            VerbError::Failed(msg) => write!(f, "action failed: {msg}"),
        }
    }
}

impl std::error::Error for VerbError {}

pub type ActionFn = dyn Fn(&Entity) -> Result<Object, VerbError> + Send + Sync;

/// Caller-supplied action, shared by reference. Equal only to its own clones.
#[derive(Clone)]
pub struct Action {
    name: String,
    func: Arc<ActionFn>,
}

impl Action {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(&Entity) -> Result<Object, VerbError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

/// The action a statement performs on its subject.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum MainVerb {
    #[default]
    Unbound,
    /// Produced by verb expansion: renders `"<name> is <verb>"`.
    /// Each branch owns its verb; nothing is captured from the expansion loop.
    Branch { verb: String },
    Custom(Action),
}

impl MainVerb {
    pub fn branch(verb: impl Into<String>) -> Self {
        MainVerb::Branch { verb: verb.into() }
    }

    pub fn invoke(&self, entity: &Entity) -> Result<Object, VerbError> {
        match self {
            MainVerb::Unbound => Err(VerbError::Unbound),
            MainVerb::Branch { verb } => Ok(Object::String(describe_branch(entity, verb))),
            MainVerb::Custom(action) => (action.func)(entity),
        }
    }
}

fn describe_branch(entity: &Entity, verb: &str) -> String {
    format!("{} is {}", entity.public_name, verb)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct VerbStatement {
    pub modal_verb: String,
    pub main_verb: MainVerb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectStatement {
    pub condition: String,
    pub statement: StatementValue,
}

/// `scope subject modal:statement condition;`
#[derive(Clone, Debug, PartialEq)]
pub struct FlatTripletStatement {
    pub scope: String,
    pub subject: EntityId,
    pub verb: VerbStatement,
    pub object: ObjectStatement,
}

impl FlatTripletStatement {
    pub fn new(
        scope: impl Into<String>,
        subject: EntityId,
        modal_verb: impl Into<String>,
        condition: impl Into<String>,
        statement: StatementValue,
    ) -> Self {
        Self {
            scope: scope.into(),
            subject,
            verb: VerbStatement {
                modal_verb: modal_verb.into(),
                main_verb: MainVerb::Unbound,
            },
            object: ObjectStatement {
                condition: condition.into(),
                statement,
            },
        }
    }

    pub fn with_main_verb(mut self, main_verb: MainVerb) -> Self {
        self.verb.main_verb = main_verb;
        self
    }

    pub fn is_composite(&self) -> bool {
        self.object.statement.is_list()
    }
}

impl fmt::Display for FlatTripletStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{}",
            self.scope, self.subject, self.verb.modal_verb, self.object.statement
        )?;
        if !self.object.condition.is_empty() {
            write!(f, " {}", self.object.condition)?;
        }
        f.write_str(";")
    }
}

/// One statement per verb in the object list.
///
/// Scope, subject, modal verb and condition are copied; the statement becomes
/// the branch's verb and the main verb is rebound to describe that verb.
/// A scalar statement is already atomic and comes back unchanged.
pub fn expand_verb_list(composite: &FlatTripletStatement) -> Vec<FlatTripletStatement> {
    let StatementValue::List(verbs) = &composite.object.statement else {
        return vec![composite.clone()];
    };

    verbs
        .iter()
        .map(|verb| FlatTripletStatement {
            scope: composite.scope.clone(),
            subject: composite.subject,
            verb: VerbStatement {
                modal_verb: composite.verb.modal_verb.clone(),
                main_verb: MainVerb::branch(verb.as_str()),
            },
            object: ObjectStatement {
                condition: composite.object.condition.clone(),
                statement: StatementValue::Scalar(verb.clone()),
            },
        })
        .collect()
}

/// One statement per attribute in the object list.
///
/// Each attribute becomes the condition of its branch. Everything else,
/// including the main verb and the original unsplit statement, is shared.
/// A scalar statement comes back unchanged.
pub fn expand_attribute_list(composite: &FlatTripletStatement) -> Vec<FlatTripletStatement> {
    let StatementValue::List(attributes) = &composite.object.statement else {
        return vec![composite.clone()];
    };

    attributes
        .iter()
        .map(|attribute| FlatTripletStatement {
            scope: composite.scope.clone(),
            subject: composite.subject,
            verb: composite.verb.clone(),
            object: ObjectStatement {
                condition: attribute.clone(),
                statement: composite.object.statement.clone(),
            },
        })
        .collect()
}

/// Turn a statement into a fact: `(subject <action:modal:statement> condition)`.
///
/// The subject is the entity's display name (or its `#id` when the registry
/// does not know it); an empty condition becomes an absent literal.
pub fn lower(statement: &FlatTripletStatement, entities: &EntityRegistry) -> TripletFact {
    let subject = entities
        .get(statement.subject)
        .map(Entity::display_name)
        .unwrap_or_else(|| statement.subject.to_string());
    let predicate = format!(
        "{}:{}",
        statement.verb.modal_verb, statement.object.statement
    );
    let object = if statement.object.condition.is_empty() {
        Term::literal(&Object::Null)
    } else {
        Term::symbol(statement.object.condition.as_str())
    };
    TripletFact::new(Term::symbol(subject), Term::action(predicate), object)
}

/// Main verb as written on the wire: `{"branch":"run"}` or `{"custom":"shout"}`.
///
/// A custom action's code cannot be serialized, only its name. Reading it
/// back needs the action itself (see [`WireStatement::into_statement`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireMainVerb {
    Branch(String),
    Custom(String),
}

/// Why a wire statement could not be turned back into a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum WireError {
    /// A custom main verb names an action the reader does not have.
    UnknownAction(String),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::UnknownAction(name) => write!(f, "no action named '{name}'"),
        }
    }
}

impl std::error::Error for WireError {}

/// JSON form of a statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireStatement {
    pub scope: String,
    pub subject: EntityId,
    #[serde(rename = "modalVerb", default)]
    pub modal_verb: String,
    #[serde(rename = "mainVerb", default, skip_serializing_if = "Option::is_none")]
    pub main_verb: Option<WireMainVerb>,
    #[serde(default)]
    pub condition: String,
    pub statement: StatementValue,
}

impl WireStatement {
    /// Rebuild the statement, resolving a custom main verb by name against
    /// `actions`. Branch verbs need no lookup.
    pub fn into_statement(self, actions: &[Action]) -> Result<FlatTripletStatement, WireError> {
        let main_verb = match self.main_verb {
            None => MainVerb::Unbound,
            Some(WireMainVerb::Branch(verb)) => MainVerb::Branch { verb },
            Some(WireMainVerb::Custom(name)) => {
                let action = actions
                    .iter()
                    .find(|a| a.name() == name)
                    .ok_or(WireError::UnknownAction(name))?;
                MainVerb::Custom(action.clone())
            }
        };
        Ok(FlatTripletStatement::new(
            self.scope,
            self.subject,
            self.modal_verb,
            self.condition,
            self.statement,
        )
        .with_main_verb(main_verb))
    }
}

/// Only statements without a custom main verb convert on their own.
impl TryFrom<WireStatement> for FlatTripletStatement {
    type Error = WireError;

    fn try_from(wire: WireStatement) -> Result<Self, Self::Error> {
        wire.into_statement(&[])
    }
}

impl From<&FlatTripletStatement> for WireStatement {
    fn from(stmt: &FlatTripletStatement) -> Self {
        let main_verb = match &stmt.verb.main_verb {
            MainVerb::Unbound => None,
            MainVerb::Branch { verb } => Some(WireMainVerb::Branch(verb.clone())),
            MainVerb::Custom(action) => Some(WireMainVerb::Custom(action.name().to_string())),
        };
        Self {
            scope: stmt.scope.clone(),
            subject: stmt.subject,
            modal_verb: stmt.verb.modal_verb.clone(),
            main_verb,
            condition: stmt.object.condition.clone(),
            statement: stmt.object.statement.clone(),
        }
    }
}
