//! Common types shared across the API.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope returned by list endpoints.
///
/// Pagination fields are kept exactly as received. Use
/// [`PageNumber::as_u64`] to read one as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Current page number.
    #[serde(default)]
    pub current_page: Option<PageNumber>,
    /// Page size.
    #[serde(default)]
    pub per_page: Option<PageNumber>,
    /// Items on this page.
    #[serde(default)]
    pub total_items_on_page: Option<PageNumber>,
    /// Items across all pages.
    #[serde(default)]
    pub total_items_count: Option<PageNumber>,
    /// First page number.
    #[serde(default)]
    pub first_page: Option<PageNumber>,
    /// Last page number.
    #[serde(default)]
    pub last_page: Option<PageNumber>,
    /// Next page number, absent on the last page.
    #[serde(default)]
    pub next_page: Option<PageNumber>,
    /// Previous page number, absent on the first page.
    #[serde(default)]
    pub prev_page: Option<PageNumber>,
    /// Page items.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// A pagination value in the form the server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageNumber {
    /// Sent as a JSON number.
    Number(u64),
    /// Sent as a string, normally a numeric one.
    Text(String),
}

impl PageNumber {
    /// Numeric value, or `None` when the text is not a page number.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            PageNumber::Number(n) => Some(*n),
            PageNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Reads a list field that may be sent as `null`, treating it as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
