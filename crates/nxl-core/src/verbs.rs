//! Closed verb and tag vocabularies.
//!
//! Each taxonomy parses any raw string: declared constants map to their own
//! variant, everything else is kept verbatim in an `Unrecognized` variant
//! whose label is a diagnostic rather than an error. Parsing is exact and
//! case-sensitive (`"must"` is not `MUST`).

use std::borrow::Cow;
use std::fmt;

/// Foundational action tags.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoreVerb {
    /// Possession or attribute binding: `x HAS value`.
    Has,
    /// Imperative or procedural action: `DO { ... }`.
    Do,
    /// Identity or classification: `x IS type`.
    Is,
    Unrecognized(String),
}

impl CoreVerb {
    pub const DECLARED: [CoreVerb; 3] = [CoreVerb::Has, CoreVerb::Do, CoreVerb::Is];

    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "HAS" => CoreVerb::Has,
            "DO" => CoreVerb::Do,
            "IS" => CoreVerb::Is,
            other => CoreVerb::Unrecognized(other.to_string()),
        }
    }

    pub fn is_declared(&self) -> bool {
        !matches!(self, CoreVerb::Unrecognized(_))
    }

    pub fn label(&self) -> Cow<'static, str> {
        match self {
            CoreVerb::Has => Cow::Borrowed("HAS"),
            CoreVerb::Do => Cow::Borrowed("DO"),
            CoreVerb::Is => Cow::Borrowed("IS"),
            CoreVerb::Unrecognized(raw) => Cow::Owned(format!("Unknown Core Verb: ({raw})")),
        }
    }
}

/// What kind of modality a modal verb expresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    Ability,
    Permission,
    Possibility,
    Necessity,
    Suggestion,
    Requirement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tense {
    Past,
    Present,
    Future,
    /// One form covers both present and future (`MAY`, `SHOULD`, `NEED`).
    PresentFuture,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModalVerb {
    Could,
    Can,
    BeAbleTo,
    CouldHave,
    Permission,
    AllowedTo,
    Might,
    May,
    HadTo,
    Must,
    WillHaveTo,
    ShouldHave,
    Should,
    NeedTo,
    Need,
    WillNeed,
    Unrecognized(String),
}

impl ModalVerb {
    pub const DECLARED: [ModalVerb; 16] = [
        ModalVerb::Could,
        ModalVerb::Can,
        ModalVerb::BeAbleTo,
        ModalVerb::CouldHave,
        ModalVerb::Permission,
        ModalVerb::AllowedTo,
        ModalVerb::Might,
        ModalVerb::May,
        ModalVerb::HadTo,
        ModalVerb::Must,
        ModalVerb::WillHaveTo,
        ModalVerb::ShouldHave,
        ModalVerb::Should,
        ModalVerb::NeedTo,
        ModalVerb::Need,
        ModalVerb::WillNeed,
    ];

    pub fn from_raw(raw: &str) -> Self {
        Self::DECLARED
            .into_iter()
            .find(|v| v.canonical() == Ok(raw))
            .unwrap_or_else(|| ModalVerb::Unrecognized(raw.to_string()))
    }

    /// Canonical name of a declared verb, or the raw text of an unrecognized one.
    fn canonical(&self) -> Result<&'static str, &str> {
        let name = match self {
            ModalVerb::Could => "COULD",
            ModalVerb::Can => "CAN",
            ModalVerb::BeAbleTo => "BE_ABLE_TO",
            ModalVerb::CouldHave => "COULD_HAVE",
            ModalVerb::Permission => "PERMISSION",
            ModalVerb::AllowedTo => "ALLOWED_TO",
            ModalVerb::Might => "MIGHT",
            ModalVerb::May => "MAY",
            ModalVerb::HadTo => "HAD_TO",
            ModalVerb::Must => "MUST",
            ModalVerb::WillHaveTo => "WILL_HAVE_TO",
            ModalVerb::ShouldHave => "SHOULD_HAVE",
            ModalVerb::Should => "SHOULD",
            ModalVerb::NeedTo => "NEED_TO",
            ModalVerb::Need => "NEED",
            ModalVerb::WillNeed => "WILL_NEED",
            ModalVerb::Unrecognized(raw) => return Err(raw),
        };
        Ok(name)
    }

    pub fn is_declared(&self) -> bool {
        !matches!(self, ModalVerb::Unrecognized(_))
    }

    pub fn label(&self) -> Cow<'static, str> {
        match self.canonical() {
            Ok(name) => Cow::Borrowed(name),
            Err(raw) => Cow::Owned(format!("Unknown Modal Verb: ({raw})")),
        }
    }

    pub fn modality(&self) -> Option<Modality> {
        use ModalVerb::*;
        let m = match self {
            Could | Can | BeAbleTo => Modality::Ability,
            CouldHave | Permission | AllowedTo => Modality::Permission,
            Might | May => Modality::Possibility,
            HadTo | Must | WillHaveTo => Modality::Necessity,
            ShouldHave | Should => Modality::Suggestion,
            NeedTo | Need | WillNeed => Modality::Requirement,
            Unrecognized(_) => return None,
        };
        Some(m)
    }

    pub fn tense(&self) -> Option<Tense> {
        use ModalVerb::*;
        let t = match self {
            Could | CouldHave | Might | HadTo | ShouldHave | NeedTo => Tense::Past,
            Can | Permission | Must => Tense::Present,
            BeAbleTo | AllowedTo | WillHaveTo | WillNeed => Tense::Future,
            May | Should | Need => Tense::PresentFuture,
            Unrecognized(_) => return None,
        };
        Some(t)
    }
}

/// Condition tag qualifying the object of a statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeCondition {
    /// Manner or method.
    How,
    /// Temporal condition.
    When,
    /// Spatial condition.
    Where,
    Unrecognized(String),
}

impl AttributeCondition {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "HOW" => AttributeCondition::How,
            "WHEN" => AttributeCondition::When,
            "WHERE" => AttributeCondition::Where,
            other => AttributeCondition::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> Cow<'static, str> {
        match self {
            AttributeCondition::How => Cow::Borrowed("HOW"),
            AttributeCondition::When => Cow::Borrowed("WHEN"),
            AttributeCondition::Where => Cow::Borrowed("WHERE"),
            AttributeCondition::Unrecognized(raw) => {
                Cow::Owned(format!("Unknown Attribute Condition: ({raw})"))
            }
        }
    }
}

/// Syntactic context a statement is declared in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TripletScope {
    /// Shared definitions; not evaluated.
    Definition,
    /// Objectively verifiable facts; logically evaluated.
    Fact,
    /// Debatable viewpoints, judged by a human or a model.
    Assertion,
    /// Evaluated as a method.
    Function,
    /// Evaluated as symbols.
    Expression,
    Unrecognized(String),
}

impl TripletScope {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "def" => TripletScope::Definition,
            "fact" => TripletScope::Fact,
            "assert" => TripletScope::Assertion,
            "func" => TripletScope::Function,
            "expr" => TripletScope::Expression,
            other => TripletScope::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> Cow<'static, str> {
        match self {
            TripletScope::Definition => Cow::Borrowed("def"),
            TripletScope::Fact => Cow::Borrowed("fact"),
            TripletScope::Assertion => Cow::Borrowed("assert"),
            TripletScope::Function => Cow::Borrowed("func"),
            TripletScope::Expression => Cow::Borrowed("expr"),
            TripletScope::Unrecognized(raw) => Cow::Owned(format!("Unknown Scope: ({raw})")),
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.label())
            }
        })*
    };
}

display_via_label!(CoreVerb, ModalVerb, AttributeCondition, TripletScope);

/// Label for a raw core verb value.
pub fn core_verb(raw: &str) -> String {
    CoreVerb::from_raw(raw).label().into_owned()
}

/// Label for a raw modal verb value.
pub fn modal_verb(raw: &str) -> String {
    ModalVerb::from_raw(raw).label().into_owned()
}
