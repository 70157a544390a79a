//! Search requests and results.

use headless_dam_common::{ContentHubType, ObjectId};

/// Sort criterion of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub ascending: bool,
}

/// A free-text search as issued by the studio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub below_folder: Option<ObjectId>,
    pub hub_type: Option<ContentHubType>,
    pub filter_queries: Vec<String>,
    pub sort_by: Vec<Sort>,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Items matching a search.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentHubSearchResult<I> {
    pub hits: Vec<I>,
}

impl<I> ContentHubSearchResult<I> {
    pub fn empty() -> Self {
        Self { hits: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
