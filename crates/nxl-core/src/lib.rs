//! NexusL knowledge model.
//!
//! Facts are subject–predicate–object triplets built from a closed set of
//! term kinds. Verbs carry modality, symbols carry dynamically attached
//! members, and composite statements (a list where one value belongs) are
//! flattened into atomic ones by the expansion engine.
//!
//! Zero I/O apart from the `print` builtin. Parsing, evaluation and storage
//! live elsewhere.

pub mod builtins;
pub mod category;
pub mod entity;
pub mod expand;
pub mod facts;
pub mod object;
pub mod symbol;
pub mod term;
pub mod triplet;
pub mod verbs;

pub use category::Category;
pub use entity::{Entity, EntityId, EntityRegistry, EntityState};
pub use expand::{
    Action, FlatTripletStatement, MainVerb, ObjectStatement, StatementValue, VerbError,
    VerbStatement, WireError, WireMainVerb, WireStatement, expand_attribute_list,
    expand_verb_list, lower,
};
pub use facts::FactBase;
pub use object::{Builtin, NULL, Object, ObjectKind};
pub use symbol::SymbolObject;
pub use term::{LiteralValue, Term, TermKind};
pub use triplet::TripletFact;
pub use verbs::{
    AttributeCondition, CoreVerb, ModalVerb, Modality, Tense, TripletScope, core_verb, modal_verb,
};
