pub mod builtin;
pub mod registry;
pub mod sdl;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use registry::{TypeDefinition, TypeKind, TypeRegistry};
pub use validator::SchemaValidator;

// Re-export all descriptor types at the schema module level
pub use types::{
    date_arguments, DateOptions, DifferenceUnit, EnumTypeDefinition, FieldArgument,
    FieldDefinition, FieldResolution, InterfaceTypeDefinition, ObjectTypeDefinition, ScalarKind,
    SchemaError, ValueType,
};
