use std::collections::{btree_map::Iter, BTreeMap};

/// User aliases, kept in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aliases {
    table: BTreeMap<String, String>,
}

impl Aliases {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: &str, body: &str) -> Option<String> {
        self.table.insert(name.to_string(), body.to_string())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.table.remove(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.table.iter()
    }

    /// One `name=body` line per alias.
    pub fn listing(&self) -> String {
        let mut s = String::new();
        for (name, body) in self.table.iter() {
            s.push_str(&format!("{}={}\n", name, body));
        }
        s
    }
}
