//! Query parameter mapping.
//!
//! Parameters are an ordered list of scalar values. Absent and null entries
//! are dropped when the URL is built; every other value is rendered once as
//! its string form. Arrays and objects are not representable, so callers
//! flatten them first (see [`FieldSelection`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{FieldSelection, ListOptions, SortDirection};

/// A scalar query parameter value.
///
/// Serializes as the bare JSON scalar (`"abc"`, `-3`, `1.5`, `true`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// String value.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean, rendered as `true`/`false`.
    Bool(bool),
    /// Explicit null. Never rendered.
    Null,
}

impl ParamValue {
    /// String form for the query string, or `None` for [`ParamValue::Null`].
    #[must_use]
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Null => Ok(()),
        }
    }
}

macro_rules! param_from {
    ($variant:ident: $($ty:ty),+) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value.into())
            }
        })+
    };
}

param_from!(Str: String, &str, &String);
param_from!(Int: i8, i16, i32, i64);
param_from!(UInt: u8, u16, u32, u64);
param_from!(Float: f32, f64);
param_from!(Bool: bool);

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::UInt(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<SortDirection> for ParamValue {
    fn from(value: SortDirection) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<FieldSelection> for ParamValue {
    fn from(value: FieldSelection) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<&FieldSelection> for ParamValue {
    fn from(value: &FieldSelection) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

/// Ordered query parameters for one request.
///
/// ```
/// use newsroom_content::content::{ParamValue, QueryParams};
///
/// let params = QueryParams::new()
///     .with("tag_slug", "politics")
///     .with_opt("limit", Some(10u32))
///     .with_opt("offset", None::<u32>);
///
/// let rendered: Vec<_> = params.present().collect();
/// assert_eq!(rendered, vec![("tag_slug", "politics".to_string()), ("limit", "10".to_string())]);
/// assert_eq!(params.limit(), Some(&ParamValue::UInt(10)));
/// assert_eq!(params.offset(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter that may be absent.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.entries.push((key.into(), value.map(Into::into)));
        self
    }

    /// Append a parameter in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((key.into(), Some(value.into())));
    }

    /// Append the pagination, field selection and sort options, in that order.
    ///
    /// An empty field selection is treated as absent.
    #[must_use]
    pub fn with_list_options(self, options: ListOptions) -> Self {
        self.with_opt("limit", options.pagination.limit)
            .with_opt("offset", options.pagination.offset)
            .with_opt("fields", options.fields.filter(|f| !f.is_empty()))
            .with_opt("sort_field", options.sort.sort_field)
            .with_opt("sort_direction", options.sort.sort_direction)
    }

    /// Every entry that will be rendered, as `(key, string value)` in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.entries.iter().filter_map(|(key, value)| {
            value
                .as_ref()
                .and_then(ParamValue::to_query_value)
                .map(|v| (key.as_str(), v))
        })
    }

    /// Last value recorded under `key`, absent or not.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// The caller's `limit` as given, echoed into response metadata.
    #[must_use]
    pub fn limit(&self) -> Option<&ParamValue> {
        self.get("limit")
    }

    /// The caller's `offset` as given, echoed into response metadata.
    #[must_use]
    pub fn offset(&self) -> Option<&ParamValue> {
        self.get("offset")
    }

    /// Number of entries, including absent ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
