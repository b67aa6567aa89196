/**
 * Query Modifiers
 *
 * Sort directives and pagination accepted by the collection endpoints.
 *
 * # Sorting
 *
 * A raw `sort_by` value is trimmed and lowercased; a leading `-` selects
 * descending order. The remaining name must appear in the resource's
 * allow-list, otherwise the directive is dropped and the store falls back to
 * its default ordering. Only the allow-listed column names ever reach a query.
 */

use serde::{Deserialize, Serialize};

/// A sortable field of some resource
pub trait SortField: Copy + std::fmt::Debug + Send + Sync + 'static {
    /// Resolve a lowercased field name from the allow-list
    fn from_name(name: &str) -> Option<Self>;

    /// Database column backing the field
    fn column(&self) -> &'static str;
}

/// Sortable fields of a todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSortField {
    Title,
    CreatedAt,
}

impl SortField for ListSortField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "createdat" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sortable fields of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortField {
    Title,
    CreatedAt,
    Deadline,
}

impl SortField for ItemSortField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "createdat" => Some(Self::CreatedAt),
            "deadline" => Some(Self::Deadline),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::CreatedAt => "created_at",
            Self::Deadline => "deadline",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// SQL keyword for the direction
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A sanitized sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<F: SortField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortDirective<F> {
    /// Sanitize a raw sort value
    ///
    /// Returns `None` for empty input and for any field outside the allow-list.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().to_lowercase();

        let (name, direction) = match value.strip_prefix('-') {
            Some(rest) => (rest, SortDirection::Descending),
            None => (value.as_str(), SortDirection::Ascending),
        };

        F::from_name(name).map(|field| Self { field, direction })
    }

    /// `ORDER BY` fragment built from allow-listed names only
    pub fn order_by_clause(&self) -> String {
        format!("{} {}", self.field.column(), self.direction.keyword())
    }
}

/// Default page size for item listings
pub const DEFAULT_PAGE_LIMIT: u32 = 5;

/// Raw pagination query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Resolved pagination, echoed back in listing responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

impl From<PaginationQuery> for Pagination {
    /// Zero or missing values fall back to page 1 and the default limit
    fn from(query: PaginationQuery) -> Self {
        let defaults = Pagination::default();
        Self {
            page: query.page.filter(|p| *p > 0).unwrap_or(defaults.page),
            limit: query.limit.filter(|l| *l > 0).unwrap_or(defaults.limit),
        }
    }
}
