/**
 * Response Envelopes
 *
 * Wire shapes returned by the create and listing endpoints.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::models::query::Pagination;

/// Body of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: Uuid,
}

/// A full collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// One page of a collection, echoing the pagination used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PageResponse<T> {
    pub fn new(results: Vec<T>, pagination: Pagination) -> Self {
        Self {
            count: results.len(),
            results,
            pagination,
        }
    }
}
