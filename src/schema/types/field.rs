//! Field declarations: value types, resolution modes, and field definitions
//!
//! A field is a pure description. It carries a value type, an optional
//! description, a required flag, and a resolution mode telling the host
//! whether the value can be read inline from the materialized record or must
//! be obtained through a secondary lookup.

use crate::schema::types::ScalarKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value type of a field or argument.
///
/// `Object` and `Enum` reference other types by name. The name may resolve to
/// a type in the same registry or to a host-provided external type (see
/// `TypeRegistry::register_external`). List elements are always non-null; no
/// declared list in the content schema admits null elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Scalar(ScalarKind),
    Object(String),
    Enum(String),
    List(Box<ValueType>),
}

impl ValueType {
    pub fn object(name: impl Into<String>) -> Self {
        ValueType::Object(name.into())
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        ValueType::Enum(name.into())
    }

    pub fn list(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    /// The type name this value refers to, if any, looking through lists.
    pub fn referenced_type(&self) -> Option<&str> {
        match self {
            ValueType::Scalar(_) => None,
            ValueType::Object(name) | ValueType::Enum(name) => Some(name),
            ValueType::List(element) => element.referenced_type(),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Scalar(kind) => write!(f, "{}", kind),
            ValueType::Object(name) | ValueType::Enum(name) => write!(f, "{}", name),
            ValueType::List(element) => write!(f, "[{}!]", element),
        }
    }
}

/// How the host obtains a field's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldResolution {
    /// Read inline from the value already materialized on the record.
    #[default]
    Inline,
    /// Requires an external resolver call keyed on the inline value (for
    /// example a document id or a local file handle). The host wires in its
    /// own resolution step for fields declared this way; this crate only
    /// advertises the marker.
    Deferred,
}

/// Declaration of an argument accepted by an accessor field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub value_type: ValueType,
}

impl FieldArgument {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            description: None,
            value_type,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub value_type: ValueType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub resolution: FieldResolution,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub arguments: Vec<FieldArgument>,
    /// Deprecation reason, when the field is kept for compatibility only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deprecated: Option<String>,
}

impl FieldDefinition {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            description: None,
            required: false,
            resolution: FieldResolution::Inline,
            arguments: Vec::new(),
            deprecated: None,
        }
    }

    pub fn scalar(kind: ScalarKind) -> Self {
        Self::new(ValueType::Scalar(kind))
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(ValueType::object(name))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field as required: the host must always resolve it to a
    /// value (an empty collection counts as a value).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as a cross-reference: its value is obtained through a
    /// secondary lookup by the host, not read inline.
    pub fn deferred(mut self) -> Self {
        self.resolution = FieldResolution::Deferred;
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<FieldArgument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecated = Some(reason.into());
        self
    }

    pub fn is_deferred(&self) -> bool {
        self.resolution == FieldResolution::Deferred
    }
}
