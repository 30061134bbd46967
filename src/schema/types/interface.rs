use crate::schema::types::FieldDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A polymorphic structural contract that concrete types must satisfy.
///
/// Interfaces are the unit of polymorphic querying: heterogeneous concrete
/// types (one per content model) are queried through a shared interface such
/// as `Document`. Interface fields may carry accessor arguments, which is how
/// the parameterized publication-date fields are declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceTypeDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub fields: BTreeMap<String, FieldDefinition>,
}

impl InterfaceTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Names of the fields a concrete type must always resolve to a value.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, field)| field.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
