use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Record fields the sources endpoint accepts for `order_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderField {
    Id,
    Title,
    Url,
    Content,
    #[default]
    PublishedOn,
    UpdatedOn,
    FetchedOn,
}

impl OrderField {
    pub const ALL: [OrderField; 7] = [
        OrderField::Id,
        OrderField::Title,
        OrderField::Url,
        OrderField::Content,
        OrderField::PublishedOn,
        OrderField::UpdatedOn,
        OrderField::FetchedOn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Id => "id",
            OrderField::Title => "title",
            OrderField::Url => "url",
            OrderField::Content => "content",
            OrderField::PublishedOn => "published_on",
            OrderField::UpdatedOn => "updated_on",
            OrderField::FetchedOn => "fetched_on",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order field {0:?}")]
pub struct UnknownOrderField(pub String);

impl FromStr for OrderField {
    type Err = UnknownOrderField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownOrderField(s.to_string()))
    }
}

/// Fixed ordering applied to every request. Defaults to newest publication first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOrder {
    pub field: OrderField,
    pub ascending: bool,
}

/// Canonical request parameters shared by the records and count endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryParams {
    pub limit: u32,
    pub offset: u64,
    pub order: SortOrder,
    /// Present only for a non-empty search term.
    pub content_like: Option<String>,
}

impl QueryParams {
    /// Parameters in wire order: `limit`, `offset`, `order_by`, `asc`, then
    /// `content_like` when filtering.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("order_by", self.order.field.as_str().to_string()),
            ("asc", self.order.ascending.to_string()),
        ];
        if let Some(term) = &self.content_like {
            pairs.push(("content_like", term.clone()));
        }
        pairs
    }
}

/// Maps view state to request parameters. Pages are 1-based; page 0 is read as 1.
pub fn build_params(
    page: u32,
    page_size: u32,
    committed_search: &str,
    order: SortOrder,
) -> QueryParams {
    let page_index = u64::from(page.max(1) - 1);
    QueryParams {
        limit: page_size,
        offset: page_index * u64::from(page_size),
        order,
        content_like: (!committed_search.is_empty()).then(|| committed_search.to_string()),
    }
}
