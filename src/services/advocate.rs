use crate::dto::advocate::{AdvocatesQuery, AdvocatesResponse};
use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationMetadata};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::ServiceResult;

/// Returns one page of the directory filtered by the search term.
///
/// The page is clamped to >= 1 before the offset is computed, and one
/// [`AdvocateListQuery`] carries the filter for both the data and the count
/// fetch. The response is assembled as a single payload; on repository
/// failure the error propagates and no partial payload is produced.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let page = params.page.unwrap_or(1).max(1);

    let mut query = AdvocateListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
    if let Some(term) = &params.search_term {
        query = query.search(term);
    }

    let (total, advocates) = repo.list_advocates(query)?;

    Ok(AdvocatesResponse {
        data: advocates.into_iter().map(Into::into).collect(),
        pagination: PaginationMetadata::new(page, DEFAULT_PAGE_SIZE, total),
    })
}
