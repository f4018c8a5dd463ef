use std::fmt;

use crate::term::Term;

/// An immutable subject–predicate–object fact.
///
/// Fields are private; once built, a fact only hands out shared references.
#[derive(Clone, Debug, PartialEq)]
pub struct TripletFact {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl TripletFact {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Whether this fact fits `pattern`.
    /// Variables in the pattern match any term; every other position must be equal.
    pub fn matches(&self, pattern: &TripletFact) -> bool {
        fn slot(pattern: &Term, term: &Term) -> bool {
            pattern.is_variable() || pattern == term
        }
        slot(&pattern.subject, &self.subject)
            && slot(&pattern.predicate, &self.predicate)
            && slot(&pattern.object, &self.object)
    }
}

impl fmt::Display for TripletFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.subject, self.predicate, self.object)
    }
}
