//! Client-side browse controller for the advocate directory.
//!
//! [`AdvocateBrowser`] owns the `(page, search_term)` pair the presentation
//! layer navigates with. It performs no I/O itself: every transition returns
//! the [`RequestKey`] the caller should fetch `GET /advocates` with, and the
//! completion is fed back through [`AdvocateBrowser::apply_response`] keyed
//! by the same value. A completion whose key no longer matches the current
//! state is recorded in the cache but never shown, so a slow fetch can never
//! overwrite the result of a newer one.

use std::collections::HashMap;

use crate::dto::advocate::{AdvocateDto, AdvocatesResponse};
use crate::pagination::PaginationMetadata;

/// Identifies one fetch: the `(page, search_term)` state that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub page: usize,
    pub search_term: String,
}

#[derive(Debug)]
pub struct AdvocateBrowser {
    page: usize,
    search_term: String,
    /// Response currently shown, if any.
    latest: Option<AdvocatesResponse>,
    /// Completed fetches keyed by the state that requested them. Revisiting
    /// a cached key republishes the cached response immediately while the
    /// refresh is in flight.
    cache: HashMap<RequestKey, AdvocatesResponse>,
}

impl Default for AdvocateBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvocateBrowser {
    /// Fresh browser on the unfiltered first page. Call
    /// [`AdvocateBrowser::refresh`] to obtain the initial fetch.
    pub fn new() -> Self {
        Self {
            page: 1,
            search_term: String::new(),
            latest: None,
            cache: HashMap::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Records of the last applied response; empty until one arrives.
    pub fn records(&self) -> &[AdvocateDto] {
        self.latest.as_ref().map_or(&[], |r| r.data.as_slice())
    }

    pub fn pagination(&self) -> Option<&PaginationMetadata> {
        self.latest.as_ref().map(|r| &r.pagination)
    }

    /// Key for the state currently on screen.
    pub fn current_key(&self) -> RequestKey {
        RequestKey {
            page: self.page,
            search_term: self.search_term.clone(),
        }
    }

    /// Replaces the search term and unconditionally resets to page 1:
    /// changing the filter invalidates the previous page's meaning.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> RequestKey {
        self.search_term = term.into();
        self.page = 1;
        self.request()
    }

    /// Clears the search term, returning to the unfiltered first page.
    pub fn reset_search(&mut self) -> RequestKey {
        self.set_search_term("")
    }

    /// Steps forward one page; no-op unless the last applied metadata says a
    /// next page exists.
    pub fn next_page(&mut self) -> Option<RequestKey> {
        match self.pagination() {
            Some(p) if p.has_next_page => {
                self.page += 1;
                Some(self.request())
            }
            _ => None,
        }
    }

    /// Steps back one page; no-op unless the last applied metadata says a
    /// previous page exists.
    pub fn previous_page(&mut self) -> Option<RequestKey> {
        match self.pagination() {
            Some(p) if p.has_previous_page => {
                self.page -= 1;
                Some(self.request())
            }
            _ => None,
        }
    }

    /// Jumps straight to `page`. No client-side bounds check: the server
    /// clamps below 1 and answers beyond-range pages with an empty data set
    /// and correct metadata.
    pub fn go_to_page(&mut self, page: usize) -> RequestKey {
        self.page = page;
        self.request()
    }

    /// Re-requests the current state without changing it.
    pub fn refresh(&mut self) -> RequestKey {
        self.request()
    }

    /// Applies a completed fetch. The response is cached under its key, but
    /// it is only shown when the key still matches the current state; a
    /// superseded completion is silently kept out of view. Returns whether
    /// the response became visible.
    pub fn apply_response(&mut self, key: RequestKey, response: AdvocatesResponse) -> bool {
        let current = key == self.current_key();
        if current {
            self.latest = Some(response.clone());
        }
        self.cache.insert(key, response);
        current
    }

    fn request(&mut self) -> RequestKey {
        let key = self.current_key();
        if let Some(cached) = self.cache.get(&key) {
            // Show the previously fetched page immediately; the caller still
            // performs the fetch and the fresh response replaces this.
            self.latest = Some(cached.clone());
        }
        key
    }
}
