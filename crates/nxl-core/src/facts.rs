use crate::term::Term;
use crate::triplet::TripletFact;

/// Ordered, in-memory collection of facts.
///
/// Mutation needs `&mut self`; share between threads behind a lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FactBase {
    facts: Vec<TripletFact>,
}

impl FactBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, fact: TripletFact) {
        self.facts.push(fact);
    }

    /// Facts matching `pattern`, in insertion order.
    pub fn find(&self, pattern: &TripletFact) -> Vec<&TripletFact> {
        self.facts.iter().filter(|f| f.matches(pattern)).collect()
    }

    pub fn all(&self) -> &[TripletFact] {
        &self.facts
    }

    /// Remove every fact with this subject and predicate; returns how many went.
    /// Used to give `def`-style statements replace-on-redefine semantics.
    pub fn retract(&mut self, subject: &Term, predicate: &Term) -> usize {
        let before = self.facts.len();
        self.facts
            .retain(|f| !(f.subject() == subject && f.predicate() == predicate));
        before - self.facts.len()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Extend<TripletFact> for FactBase {
    fn extend<I: IntoIterator<Item = TripletFact>>(&mut self, iter: I) {
        self.facts.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    fn fact(s: &str, p: &str, o: Object) -> TripletFact {
        TripletFact::new(Term::symbol(s), Term::symbol(p), Term::literal(&o))
    }

    fn sample() -> FactBase {
        let mut kb = FactBase::new();
        kb.add(fact("david", "age", Object::Number(40)));
        kb.add(fact("david", "color", Object::string("red")));
        kb.add(fact("maria", "age", Object::Number(35)));
        kb
    }

    #[test]
    fn test_find_by_predicate() {
        let kb = sample();
        let pattern = TripletFact::new(Term::variable("who"), Term::symbol("age"), Term::variable("n"));
        let hits = kb.find(&pattern);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].subject(), &Term::symbol("david"));
        assert_eq!(hits[1].subject(), &Term::symbol("maria"));
    }

    #[test]
    fn test_find_all_with_full_wildcard() {
        let kb = sample();
        let pattern = TripletFact::new(Term::variable("s"), Term::variable("p"), Term::variable("o"));
        assert_eq!(kb.find(&pattern).len(), kb.len());
    }

    #[test]
    fn test_find_no_match() {
        let kb = sample();
        let pattern = TripletFact::new(Term::symbol("pedro"), Term::variable("p"), Term::variable("o"));
        assert!(kb.find(&pattern).is_empty());
    }

    #[test]
    fn test_retract() {
        let mut kb = sample();
        let removed = kb.retract(&Term::symbol("david"), &Term::symbol("age"));
        assert_eq!(removed, 1);
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.retract(&Term::symbol("david"), &Term::symbol("age")), 0);
    }

    #[test]
    fn test_extend_and_all() {
        let mut kb = FactBase::new();
        assert!(kb.is_empty());
        kb.extend([fact("a", "b", Object::Null), fact("c", "d", Object::Boolean(true))]);
        assert_eq!(kb.all().len(), 2);
        assert_eq!(kb.all()[1].to_string(), "(c d true)");
    }
}
