//! Custom attribute list carried by every entity kind
//!
//! The platform represents attributes as an ordered array of
//! `{"name": ..., "value": ...}` pairs.

use serde::{Deserialize, Serialize};

/// One custom name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name, unique within the list.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

/// Ordered attribute collection with by-name accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the named attribute, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|attr| attr.name == name).map(|attr| attr.value.as_str())
    }

    /// Set an attribute, replacing any existing value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.0.push(Attribute { name, value }),
        }
    }

    /// Remove the named attribute, returning its previous value.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|attr| attr.name == name)?;
        Some(self.0.remove(index).value)
    }

    /// Whether the collection holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}
