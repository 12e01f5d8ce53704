use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;

use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::search::SearchFilter;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter, DieselRepository};
use crate::schema::advocates;

diesel::define_sql_function! {
    /// SQLite `lower()`; folds ASCII case.
    fn lower(x: Text) -> Text;
}

/// Escapes LIKE metacharacters so the term is matched literally, then wraps
/// it for substring matching.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Renders the filter into a boxed query over the advocates table.
///
/// Must stay semantically identical to [`SearchFilter::matches`]: the same
/// columns, lower-cased, substring semantics, phone number excluded.
/// `specialties_text` holds the separator-free concatenation the matcher
/// compares against, and years of experience is matched on its decimal form.
fn filtered<'a>(filter: &SearchFilter) -> advocates::BoxedQuery<'a, Sqlite> {
    let query = advocates::table.into_boxed();

    let Some(term) = filter.term() else {
        return query;
    };
    let pattern = like_pattern(term);

    query.filter(
        lower(advocates::first_name)
            .like(pattern.clone())
            .escape('\\')
            .or(lower(advocates::last_name)
                .like(pattern.clone())
                .escape('\\'))
            .or(lower(advocates::city).like(pattern.clone()).escape('\\'))
            .or(lower(advocates::degree).like(pattern.clone()).escape('\\'))
            .or(lower(advocates::specialties_text)
                .like(pattern.clone())
                .escape('\\'))
            .or(diesel::dsl::sql::<Text>("CAST(years_of_experience AS TEXT)")
                .like(pattern)
                .escape('\\')),
    )
}

impl AdvocateReader for DieselRepository {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        use crate::models::advocate::Advocate as DbAdvocate;

        let mut conn = self.conn()?;

        // Count and data both render from query.filter; ordering is fixed so
        // repeated identical requests page consistently.
        let total: i64 = filtered(&query.filter).count().get_result(&mut conn)?;

        let mut data_query = filtered(&query.filter).order(advocates::id.asc());
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            data_query = data_query.limit(per_page).offset((page - 1) * per_page);
        }

        let items = data_query
            .load::<DbAdvocate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Advocate>>();

        Ok((total as usize, items))
    }
}

impl AdvocateWriter for DieselRepository {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
