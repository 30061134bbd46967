//! The type registry: named descriptors plus declared host-provided types
//!
//! This module contains:
//! - The `TypeDefinition` wrapper over object, enum, and interface descriptors
//! - The `TypeRegistry` map handed to a host schema-registration mechanism
//! - JSON (de)serialization and file loading of a registry description
//!
//! The registry is immutable configuration once contributed: the host merges
//! it with other contributed types at startup and never mutates it afterward.

use crate::schema::types::{
    EnumTypeDefinition, FieldDefinition, InterfaceTypeDefinition, ObjectTypeDefinition,
    SchemaError,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// The kind of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Object,
    Enum,
    Interface,
}

/// One registered type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDefinition {
    Object(ObjectTypeDefinition),
    Enum(EnumTypeDefinition),
    Interface(InterfaceTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Interface(_) => TypeKind::Interface,
        }
    }

    /// The field map, for kinds that have one.
    pub fn fields(&self) -> Option<&BTreeMap<String, FieldDefinition>> {
        match self {
            TypeDefinition::Object(def) => Some(&def.fields),
            TypeDefinition::Interface(def) => Some(&def.fields),
            TypeDefinition::Enum(_) => None,
        }
    }
}

/// A set of type descriptors keyed by name, plus the names of external types
/// the host is expected to provide.
///
/// External types cover references that point outside the contribution, such
/// as the locally materialized file type behind `localFile` or the union of
/// all concrete document types behind `document`. They carry no structure
/// here; declaring them lets validation confirm that every reference resolves
/// somewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDefinition>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    external_types: BTreeSet<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type descriptor. Names are unique across all kinds.
    pub fn register(&mut self, definition: TypeDefinition) -> Result<(), SchemaError> {
        let name = definition.name().to_string();
        if name.is_empty() {
            return Err(SchemaError::InvalidType(
                "Type name cannot be empty".to_string(),
            ));
        }
        if self.types.contains_key(&name) || self.external_types.contains(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        self.types.insert(name, definition);
        Ok(())
    }

    /// Declares a type name the host provides; references to it are treated
    /// as resolved.
    pub fn register_external(&mut self, name: impl Into<String>) {
        self.external_types.insert(name.into());
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn get_object(&self, name: &str) -> Option<&ObjectTypeDefinition> {
        match self.types.get(name) {
            Some(TypeDefinition::Object(def)) => Some(def),
            _ => None,
        }
    }

    pub fn get_enum(&self, name: &str) -> Option<&EnumTypeDefinition> {
        match self.types.get(name) {
            Some(TypeDefinition::Enum(def)) => Some(def),
            _ => None,
        }
    }

    pub fn get_interface(&self, name: &str) -> Option<&InterfaceTypeDefinition> {
        match self.types.get(name) {
            Some(TypeDefinition::Interface(def)) => Some(def),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn is_external(&self, name: &str) -> bool {
        self.external_types.contains(name)
    }

    /// True when a referenced name resolves either to a registered type or to
    /// a declared host-provided type.
    pub fn resolves(&self, name: &str) -> bool {
        self.contains(name) || self.is_external(name)
    }

    /// Registered type names in lexicographic order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn external_type_names(&self) -> Vec<&str> {
        self.external_types.iter().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDefinition)> {
        self.types.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Serializes the registry to a JSON schema description.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SchemaError::InvalidData(format!("Failed to serialize registry: {e}")))
    }

    /// Parses a registry from a JSON schema description.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let registry: TypeRegistry = serde_json::from_str(json)
            .map_err(|e| SchemaError::InvalidData(format!("Invalid registry description: {e}")))?;
        info!(
            "Parsed registry description with {} types: {:?}",
            registry.len(),
            registry.type_names()
        );
        Ok(registry)
    }

    /// Loads a registry description from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SchemaError::InvalidData(format!("Failed to read registry file: {e}"))
        })?;
        info!(
            "Loading registry from file: {}, content length: {}",
            path.display(),
            json.len()
        );
        Self::from_json(&json)
    }

    /// Writes the registry description to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SchemaError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| {
            SchemaError::InvalidData(format!("Failed to write registry file: {e}"))
        })?;
        info!("Saved registry to file: {}", path.display());
        Ok(())
    }
}
