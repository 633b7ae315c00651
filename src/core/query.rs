//! Search parameters and their normalization
//!
//! [`SearchProps`] is the raw, loosely typed input a caller hands over
//! (straight from a query string or JSON body). [`SearchParams`] is the
//! canonical query built from it. Construction never fails: malformed values
//! are coerced to safe defaults.

use crate::config::SearchConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Filter criteria, shaped by each searchable repository
pub type Filter = Map<String, Value>;

/// Sort direction of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse `"asc"`/`"desc"` in any case
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw search input
///
/// Every field accepts any JSON value; normalization decides what to keep.
///
/// # Example
/// ```rust,ignore
/// // From a request body or query string:
/// // {"page": "2", "perPage": 10, "sort": "name", "sortDir": "ASC", "filter": {"name": "jo"}}
/// let props: SearchProps = serde_json::from_value(body)?;
///
/// // Or built in code:
/// let props = SearchProps::new().page(2).per_page(10).sort("name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchProps {
    /// Page number (1-based)
    pub page: Option<Value>,

    /// Number of items per page
    #[serde(alias = "per_page")]
    pub per_page: Option<Value>,

    /// Field to sort by
    pub sort: Option<Value>,

    /// `asc` or `desc`
    #[serde(alias = "sortDir", alias = "sort_dir", alias = "sort_direction")]
    pub sort_direction: Option<Value>,

    /// Filter object
    pub filter: Option<Value>,
}

impl SearchProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn sort_direction(mut self, sort_direction: impl Into<Value>) -> Self {
        self.sort_direction = Some(sort_direction.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Canonical, immutable search query
///
/// Invariants, established at construction:
/// - `page` and `per_page` are integers >= 1
/// - `sort` is `None` or a trimmed, non-empty string
/// - `sort_direction` is `None` exactly when `sort` is `None`
/// - `filter` is `None` or a non-empty object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_direction: Option<SortDirection>,
    filter: Option<Filter>,
}

impl SearchParams {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_PER_PAGE: usize = 15;

    /// Normalize raw input with the built-in defaults (page 1, 15 per page)
    pub fn new(props: SearchProps) -> Self {
        Self::normalize(props, Self::DEFAULT_PAGE, Self::DEFAULT_PER_PAGE)
    }

    /// Normalize raw input with configured defaults
    pub fn with_config(props: SearchProps, config: &SearchConfig) -> Self {
        Self::normalize(props, config.default_page, config.default_per_page)
    }

    fn normalize(props: SearchProps, default_page: usize, default_per_page: usize) -> Self {
        let page = coerce_positive_integer(props.page.as_ref()).unwrap_or(default_page);
        let per_page =
            coerce_positive_integer(props.per_page.as_ref()).unwrap_or(default_per_page);
        let sort = normalize_sort(props.sort.as_ref());
        let sort_direction = sort
            .as_ref()
            .map(|_| normalize_sort_direction(props.sort_direction.as_ref()));
        let filter = normalize_filter(props.filter);

        Self {
            page,
            per_page,
            sort,
            sort_direction,
            filter,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(SearchProps::default())
    }
}

impl From<SearchProps> for SearchParams {
    fn from(props: SearchProps) -> Self {
        Self::new(props)
    }
}

/// Numeric coercion: numbers as is, strings parsed after trimming.
/// Booleans, empty strings, objects and arrays are rejected, as are
/// non-integral, non-positive and out-of-range values.
fn coerce_positive_integer(value: Option<&Value>) -> Option<usize> {
    let number = match value? {
        Value::Number(n) => match n.as_u64() {
            Some(u) => return usize::try_from(u).ok().filter(|&u| u >= 1),
            None => n.as_f64()?,
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
    };

    if number.fract() != 0.0 || number < 1.0 || number > usize::MAX as f64 {
        return None;
    }
    Some(number as usize)
}

fn normalize_sort(value: Option<&Value>) -> Option<String> {
    let sort = match value? {
        Value::Null => return None,
        other => display_value(other),
    };
    let trimmed = sort.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Anything but a case-insensitive `asc`/`desc` falls back to `Desc`
fn normalize_sort_direction(value: Option<&Value>) -> SortDirection {
    value
        .map(display_value)
        .and_then(|dir| SortDirection::parse(&dir))
        .unwrap_or(SortDirection::Desc)
}

fn normalize_filter(value: Option<Value>) -> Option<Filter> {
    match value? {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

/// Render a value the way a loosely typed caller would print it: strings
/// raw, scalars via their display form, arrays comma-joined, objects as
/// `[object Object]`.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip form without a trailing `.0`: `1.0` renders as `1`,
/// exponents only below `1e-6` and from `1e21` on (`1e+21`, `1e-7`)
fn display_number(n: &Number) -> String {
    let Some(float) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };
    if float == 0.0 {
        return "0".to_string();
    }

    let magnitude = float.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let rendered = format!("{float:e}");
        if rendered.contains("e-") {
            rendered
        } else {
            rendered.replacen('e', "e+", 1)
        }
    } else {
        format!("{float}")
    }
}
