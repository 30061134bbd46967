pub mod date;
pub mod enums;
pub mod errors;
pub mod field;
pub mod interface;
pub mod object;
pub mod scalar;

pub use date::{date_arguments, DateOptions, DifferenceUnit};
pub use enums::EnumTypeDefinition;
pub use errors::SchemaError;
pub use field::{FieldArgument, FieldDefinition, FieldResolution, ValueType};
pub use interface::InterfaceTypeDefinition;
pub use object::ObjectTypeDefinition;
pub use scalar::ScalarKind;
