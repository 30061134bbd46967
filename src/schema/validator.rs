//! Structural conformance checks over a type registry
//!
//! Validation runs once, before the registry is handed to the host. It checks
//! declarations, not data: name rules, closed enum sets, and that every type
//! reference resolves to a registered or host-provided type. Runtime concerns
//! (missing required values, broken links) belong to the host's resolution
//! layer.

use crate::schema::registry::{TypeDefinition, TypeRegistry};
use crate::schema::types::{
    EnumTypeDefinition, FieldDefinition, SchemaError, ValueType,
};
use std::collections::BTreeSet;

/// Validator over an assembled registry.
pub struct SchemaValidator<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Validates every registered type, stopping at the first error.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (type_name, definition) in self.registry.iter() {
            validate_name(type_name, "Type")?;
            match definition {
                TypeDefinition::Enum(def) => self.validate_enum(def)?,
                TypeDefinition::Object(_) | TypeDefinition::Interface(_) => {
                    let fields = definition
                        .fields()
                        .ok_or_else(|| SchemaError::InvalidType(type_name.to_string()))?;
                    if fields.is_empty() {
                        return Err(SchemaError::InvalidType(format!(
                            "Type '{}' must have at least one field",
                            type_name
                        )));
                    }
                    for (field_name, field) in fields {
                        self.validate_field(type_name, field_name, field)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_enum(&self, def: &EnumTypeDefinition) -> Result<(), SchemaError> {
        if def.values.is_empty() {
            return Err(SchemaError::InvalidType(format!(
                "Enum '{}' must have at least one value",
                def.name
            )));
        }
        let mut seen = BTreeSet::new();
        for value in &def.values {
            validate_name(value, "Enum value")?;
            if !seen.insert(value.as_str()) {
                return Err(SchemaError::InvalidType(format!(
                    "Enum '{}' has duplicate value '{}'",
                    def.name, value
                )));
            }
        }
        Ok(())
    }

    fn validate_field(
        &self,
        type_name: &str,
        field_name: &str,
        field: &FieldDefinition,
    ) -> Result<(), SchemaError> {
        validate_name(field_name, "Field")?;

        self.validate_reference(type_name, field_name, &field.value_type)?;
        for argument in &field.arguments {
            validate_name(&argument.name, "Argument")?;
            self.validate_reference(type_name, field_name, &argument.value_type)?;
        }

        if field.is_deferred() {
            // A lazily resolved back-reference can never be guaranteed
            // present, and its target must be a record the host can resolve.
            if field.required {
                return Err(SchemaError::InvalidField(format!(
                    "Deferred field '{}.{}' cannot be required",
                    type_name, field_name
                )));
            }
            if !matches!(field.value_type, ValueType::Object(_)) {
                return Err(SchemaError::InvalidField(format!(
                    "Deferred field '{}.{}' must reference an object type",
                    type_name, field_name
                )));
            }
        }

        Ok(())
    }

    fn validate_reference(
        &self,
        type_name: &str,
        field_name: &str,
        value_type: &ValueType,
    ) -> Result<(), SchemaError> {
        if let Some(referenced) = value_type.referenced_type() {
            if !self.registry.resolves(referenced) {
                return Err(SchemaError::UnresolvedReference(format!(
                    "'{}' referenced by '{}.{}'",
                    referenced, type_name, field_name
                )));
            }
        }
        Ok(())
    }
}

fn validate_name(name: &str, what: &str) -> Result<(), SchemaError> {
    if name.is_empty() {
        return Err(SchemaError::InvalidField(format!(
            "{} name cannot be empty",
            what
        )));
    }
    if name.contains('.') {
        return Err(SchemaError::InvalidField(format!(
            "{} name '{}' cannot contain dots",
            what, name
        )));
    }
    if name.starts_with('_') {
        return Err(SchemaError::InvalidField(format!(
            "{} name '{}' cannot start with underscore",
            what, name
        )));
    }
    Ok(())
}
