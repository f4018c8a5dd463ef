use std::collections::HashMap;

use crate::object::{NULL, Object};

/// A named symbol carrying dynamically attached members,
/// e.g. `cli` with a `print` builtin or `david` with `rightLeg = "healthy"`.
///
/// Writes take `&mut self`. A symbol shared between threads must be wrapped
/// by the caller (a `Mutex` or `RwLock`); the symbol itself does no locking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolObject {
    pub value: String,
    members: HashMap<String, Object>,
}

impl SymbolObject {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            members: HashMap::new(),
        }
    }

    /// Member value, or the shared Null when the member was never set.
    pub fn get_member(&self, name: &str) -> &Object {
        self.members.get(name).unwrap_or(&NULL)
    }

    /// Member value if present. Distinguishes "unset" from "set to null".
    pub fn member(&self, name: &str) -> Option<&Object> {
        self.members.get(name)
    }

    /// Insert or overwrite. Last write wins.
    pub fn set_member(&mut self, name: impl Into<String>, value: Object) {
        self.members.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names in sorted order.
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.members.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `name` alone, or `name {k: v, ...}` with members sorted by key.
    pub fn render(&self) -> String {
        if self.members.is_empty() {
            return self.value.clone();
        }
        let members: Vec<String> = self
            .member_names()
            .into_iter()
            .map(|k| format!("{k}: {}", self.members[k].render()))
            .collect();
        format!("{} {{{}}}", self.value, members.join(", "))
    }
}
