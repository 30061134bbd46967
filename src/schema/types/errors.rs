use thiserror::Error;

/// Errors raised while building, loading, or validating a type registry.
///
/// The registry itself is static configuration, so every variant here points
/// at a malformed declaration or serialized description rather than a runtime
/// data failure. Broken document links are data (`isBroken`), not errors, and
/// are owned by the host's resolution layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A type name was registered twice.
    #[error("Duplicate type: {0}")]
    DuplicateType(String),

    /// A type was requested that the registry does not contain.
    #[error("Type not found: {0}")]
    NotFound(String),

    /// A type declaration is structurally invalid.
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// A field declaration is structurally invalid.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A field references a type name that is neither registered nor declared
    /// as host-provided.
    #[error("Unresolved type reference: {0}")]
    UnresolvedReference(String),

    /// A serialized registry description could not be read.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A date-difference unit string is not one of the accepted units.
    #[error("Invalid difference unit: {0}")]
    InvalidDifferenceUnit(String),
}
