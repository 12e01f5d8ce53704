use crate::db::{DbConnection, DbPool};
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::search::SearchFilter;
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query value describing one listing request.
///
/// The filter is built exactly once, when [`AdvocateListQuery::search`] is
/// called, and the repository applies that same value to both the windowed
/// data fetch and the total-count fetch. Count and data can therefore never
/// be computed under different filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdvocateListQuery {
    pub filter: SearchFilter,
    pub pagination: Option<Pagination>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str) -> Self {
        self.filter = SearchFilter::new(term);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait AdvocateReader {
    /// Returns the total number of matching records together with the
    /// requested page, both computed under the query's single filter and a
    /// stable ordering.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository over the shared connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
