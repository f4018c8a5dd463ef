use std::fmt;

/// Semantic category of a well-known symbol, as recorded in the definition store.
///
/// The vocabulary is open: anything unrecognised is kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Concrete values: numbers, strings, booleans.
    Literal,
    /// Names of entities and variables.
    Identifier,
    /// `is`, `has:`, `do:` and friends.
    Predicate,
    /// High-level scopes such as `fact`, `program`, `func`.
    TripletScope,
    /// Language macros expanded before evaluation.
    Macro,
    Other(String),
}

impl Category {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Literal" => Category::Literal,
            "Identifier" => Category::Identifier,
            "Predicate" => Category::Predicate,
            "TripletScope" => Category::TripletScope,
            "Macro" => Category::Macro,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Literal => "Literal",
            Category::Identifier => "Identifier",
            Category::Predicate => "Predicate",
            Category::TripletScope => "TripletScope",
            Category::Macro => "Macro",
            Category::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_round_trip() {
        for raw in ["Literal", "Identifier", "Predicate", "TripletScope", "Macro"] {
            let cat = Category::parse(raw);
            assert!(!matches!(cat, Category::Other(_)), "{raw} should be known");
            assert_eq!(cat.as_str(), raw);
        }
    }

    #[test]
    fn test_other_kept_verbatim() {
        let cat = Category::parse("Vehicle");
        assert_eq!(cat, Category::Other("Vehicle".to_string()));
        assert_eq!(cat.to_string(), "Vehicle");
    }
}
