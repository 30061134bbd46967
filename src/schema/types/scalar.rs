use crate::schema::types::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of scalar value kinds a field may carry.
///
/// `Json` holds untransformed payloads exactly as they come from the CMS API;
/// `Date` is a timestamp whose presentation (formatting, relative time,
/// difference) is computed by the host, never by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Json,
    Float,
    Int,
    Id,
    Boolean,
    Date,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::String => "String",
            ScalarKind::Json => "JSON",
            ScalarKind::Float => "Float",
            ScalarKind::Int => "Int",
            ScalarKind::Id => "ID",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Date => "Date",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ScalarKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ScalarKind::String),
            "JSON" => Ok(ScalarKind::Json),
            "Float" => Ok(ScalarKind::Float),
            "Int" => Ok(ScalarKind::Int),
            "ID" => Ok(ScalarKind::Id),
            "Boolean" => Ok(ScalarKind::Boolean),
            "Date" => Ok(ScalarKind::Date),
            other => Err(SchemaError::InvalidType(format!(
                "Unknown scalar kind: {}",
                other
            ))),
        }
    }
}
