//! Date accessor contract: the argument bundle and difference units
//!
//! Publication-date fields accept four independent presentation options. The
//! options are composable at the schema level; this crate never computes a
//! formatted date, a relative-time string, or a difference itself.

use crate::schema::types::{FieldArgument, ScalarKind, SchemaError, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit for the `difference` option of a date accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifferenceUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    #[default]
    Milliseconds,
}

impl fmt::Display for DifferenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            DifferenceUnit::Years => "years",
            DifferenceUnit::Months => "months",
            DifferenceUnit::Weeks => "weeks",
            DifferenceUnit::Days => "days",
            DifferenceUnit::Hours => "hours",
            DifferenceUnit::Minutes => "minutes",
            DifferenceUnit::Seconds => "seconds",
            DifferenceUnit::Milliseconds => "milliseconds",
        };
        write!(f, "{}", unit)
    }
}

impl FromStr for DifferenceUnit {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "years" => Ok(DifferenceUnit::Years),
            "months" => Ok(DifferenceUnit::Months),
            "weeks" => Ok(DifferenceUnit::Weeks),
            "days" => Ok(DifferenceUnit::Days),
            "hours" => Ok(DifferenceUnit::Hours),
            "minutes" => Ok(DifferenceUnit::Minutes),
            "seconds" => Ok(DifferenceUnit::Seconds),
            "milliseconds" => Ok(DifferenceUnit::Milliseconds),
            other => Err(SchemaError::InvalidDifferenceUnit(other.to_string())),
        }
    }
}

/// The argument bundle accepted by `first_publication_date` and
/// `last_publication_date`.
///
/// All four options are independent and no combination is rejected here.
/// Precedence between simultaneously supplied options is host-defined: a host
/// that already has a rule for which output mode wins keeps it, and this
/// crate stays compatible with either choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOptions {
    /// Token-based format string for the date, e.g. `"YYYY MMMM DD"`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format_string: Option<String>,
    /// Produce a relative-time string such as "3 days ago".
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from_now: Option<bool>,
    /// Signed delta between the date and "now", in the given unit.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub difference: Option<DifferenceUnit>,
    /// Locale used for any of the above formatting.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub locale: Option<String>,
}

impl DateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = Some(format_string.into());
        self
    }

    pub fn with_from_now(mut self, from_now: bool) -> Self {
        self.from_now = Some(from_now);
        self
    }

    pub fn with_difference(mut self, unit: DifferenceUnit) -> Self {
        self.difference = Some(unit);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// True when no option was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.format_string.is_none()
            && self.from_now.is_none()
            && self.difference.is_none()
            && self.locale.is_none()
    }
}

/// The canonical four-argument declaration carried by every date accessor
/// field. Field declarations must use this set verbatim for downstream query
/// compatibility.
pub fn date_arguments() -> Vec<FieldArgument> {
    vec![
        FieldArgument::new("formatString", ValueType::Scalar(ScalarKind::String))
            .with_description("Format the date using token-based date-format strings, e.g. `date(formatString: \"YYYY MMMM DD\")`."),
        FieldArgument::new("fromNow", ValueType::Scalar(ScalarKind::Boolean))
            .with_description("Returns a relative-time string, e.g. \"3 days ago\"."),
        FieldArgument::new("difference", ValueType::Scalar(ScalarKind::String))
            .with_description("Returns the difference between this date and the current time. Defaults to \"milliseconds\"; also accepts \"years\", \"months\", \"weeks\", \"days\", \"hours\", \"minutes\", and \"seconds\"."),
        FieldArgument::new("locale", ValueType::Scalar(ScalarKind::String))
            .with_description("Configures the locale used to format the date."),
    ]
}
