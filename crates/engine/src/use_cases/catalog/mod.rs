//! Item catalog queries.

pub mod queries;

pub use queries::{CatalogError, CatalogQueries};

use std::sync::Arc;

use crate::infrastructure::ports::ItemRepo;

pub struct CatalogUseCases {
    pub queries: CatalogQueries,
}

impl CatalogUseCases {
    pub fn new(items: Arc<dyn ItemRepo>) -> Self {
        Self {
            queries: CatalogQueries::new(items),
        }
    }
}
