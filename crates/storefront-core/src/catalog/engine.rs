//! Paginated fetch engine.
//!
//! The remote catalog has no paging parameters, so pages are slices of the
//! full category-scoped collection. The engine never performs I/O itself:
//! it hands out [`PageRequest`]s and accepts their completions, which keeps
//! it usable from any executor and trivially testable.
//!
//! Every request carries the generation it was issued under. Changing the
//! category bumps the generation, so a completion from the old category is
//! recognized as stale and dropped without touching current state.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::filter::{SearchQuery, dedup_into, filter_products};
use crate::error::CatalogError;
use crate::product::{Product, ProductId};

// ============================================================================
// Types
// ============================================================================

/// Cache key for a page sequence. Search text is deliberately excluded
/// because search runs client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterKey {
    category: Option<String>,
}

impl FilterKey {
    /// Build a key from a category label; empty means "all categories".
    pub fn new(category: &str) -> Self {
        let category = category.trim();
        Self {
            category: (!category.is_empty()).then(|| category.to_string()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    /// Fetching the first page for the current key.
    Loading,
    /// Fetching a subsequent page.
    LoadingMore,
    Error,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading | Self::LoadingMore)
    }
}

/// One slice of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub products: Vec<Product>,
    /// Cursor of the following page, present iff another page may exist.
    pub next_cursor: Option<usize>,
    pub has_more: bool,
}

/// Ticket for a network fetch issued by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub key: FilterKey,
    pub cursor: usize,
}

/// What a call to [`CatalogEngine::fetch_next_page`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Already loading, nothing more to load, or nothing changed.
    Skipped,
    /// Sliced from the cached collection without a network round trip.
    Served { page: usize },
    /// Caller must fetch the collection for `key` and report back via
    /// [`CatalogEngine::complete`].
    Fetch(PageRequest),
}

/// Outcome of reporting a finished fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied { page: usize, len: usize },
    /// The request no longer matches the current generation.
    Stale,
    Failed,
}

// ============================================================================
// CatalogEngine
// ============================================================================

#[derive(Debug, Clone)]
pub struct CatalogEngine {
    page_size: usize,
    key: FilterKey,
    search: SearchQuery,
    generation: u64,
    pages: Vec<Page>,
    seen: HashSet<ProductId>,
    cursor: usize,
    has_more: bool,
    status: FetchStatus,
    /// Full collection for `key`, kept after the first successful fetch.
    collection: Option<Vec<Product>>,
    in_flight: Option<PageRequest>,
    failed: Option<PageRequest>,
    last_error: Option<CatalogError>,
}

impl CatalogEngine {
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be greater than 0");
        Self {
            page_size,
            key: FilterKey::default(),
            search: SearchQuery::default(),
            generation: 0,
            pages: Vec::new(),
            seen: HashSet::new(),
            cursor: 1,
            has_more: true,
            status: FetchStatus::Idle,
            collection: None,
            in_flight: None,
            failed: None,
            last_error: None,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn key(&self) -> &FilterKey {
        &self.key
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Next page number to load.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    /// Whether the next page can be sliced locally.
    pub fn has_cached_collection(&self) -> bool {
        self.collection.is_some()
    }

    /// All fetched products in page order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flat_map(|p| p.products.iter())
    }

    pub fn product_count(&self) -> usize {
        self.seen.len()
    }

    /// Fetched products narrowed by the current search text.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(self.products(), &self.search)
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Apply new filter inputs.
    ///
    /// A category change discards every fetched page and starts over at page
    /// one. A search-only change just re-filters what is already loaded.
    pub fn set_filter(&mut self, category: &str, search: &str) -> NextPage {
        self.search = SearchQuery::new(search);

        let key = FilterKey::new(category);
        if key == self.key && self.generation > 0 {
            return NextPage::Skipped;
        }

        debug!(
            from = ?self.key.category(),
            to = ?key.category(),
            "catalog filter changed, invalidating pages"
        );
        self.invalidate(key);
        self.fetch_next_page()
    }

    /// Advance to the next page.
    pub fn fetch_next_page(&mut self) -> NextPage {
        if self.status.is_loading() || !self.has_more {
            return NextPage::Skipped;
        }
        if self.collection.is_some() {
            let page = self.cursor;
            self.apply_slice();
            return NextPage::Served { page };
        }
        NextPage::Fetch(self.begin_request())
    }

    /// Re-issue the request that last failed.
    pub fn retry(&mut self) -> NextPage {
        if self.status != FetchStatus::Error {
            return NextPage::Skipped;
        }
        match self.failed.take() {
            Some(failed) if failed.generation == self.generation => {
                debug!(cursor = failed.cursor, "retrying failed catalog fetch");
                NextPage::Fetch(self.begin_request())
            }
            _ => {
                self.status = FetchStatus::Idle;
                self.fetch_next_page()
            }
        }
    }

    /// Report the result of a [`PageRequest`].
    ///
    /// `result` is the full collection for the request's key.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Product>, CatalogError>,
    ) -> Completion {
        if request.generation != self.generation || self.in_flight.as_ref() != Some(request) {
            warn!(
                request_generation = request.generation,
                current_generation = self.generation,
                category = ?request.key.category(),
                "discarding stale catalog response"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(collection) => {
                debug!(
                    category = ?self.key.category(),
                    total = collection.len(),
                    "catalog collection fetched"
                );
                self.collection = Some(collection);
                self.last_error = None;
                self.apply_slice()
            }
            Err(err) => {
                warn!(cursor = request.cursor, error = %err, "catalog fetch failed");
                self.status = FetchStatus::Error;
                self.failed = Some(request.clone());
                self.last_error = Some(err);
                Completion::Failed
            }
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn invalidate(&mut self, key: FilterKey) {
        self.generation += 1;
        self.key = key;
        self.pages.clear();
        self.seen.clear();
        self.cursor = 1;
        self.has_more = true;
        self.status = FetchStatus::Idle;
        self.collection = None;
        self.in_flight = None;
        self.failed = None;
        self.last_error = None;
    }

    fn begin_request(&mut self) -> PageRequest {
        self.status = if self.pages.is_empty() {
            FetchStatus::Loading
        } else {
            FetchStatus::LoadingMore
        };
        let request = PageRequest {
            generation: self.generation,
            key: self.key.clone(),
            cursor: self.cursor,
        };
        self.in_flight = Some(request.clone());
        request
    }

    /// Slice `[(cursor-1)*size, cursor*size)` out of the cached collection.
    fn apply_slice(&mut self) -> Completion {
        let Some(collection) = self.collection.as_deref() else {
            return Completion::Failed;
        };
        let start = (self.cursor - 1).saturating_mul(self.page_size);
        let slice = collection
            .get(start..)
            .map(|rest| &rest[..rest.len().min(self.page_size)])
            .unwrap_or(&[]);

        let has_more = slice.len() == self.page_size;
        let products = dedup_into(slice, &mut self.seen);
        let page = self.cursor;
        let len = products.len();

        self.pages.push(Page {
            number: page,
            products,
            next_cursor: has_more.then_some(page + 1),
            has_more,
        });
        self.cursor += 1;
        self.has_more = has_more;
        self.status = FetchStatus::Idle;

        debug!(page, len, has_more, "catalog page applied");
        Completion::Applied { page, len }
    }
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new(crate::config::StorefrontConfig::default().page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::products;

    fn start(engine: &mut CatalogEngine, category: &str) -> PageRequest {
        match engine.set_filter(category, "") {
            NextPage::Fetch(req) => req,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_first_filter_issues_page_one() {
        let mut engine = CatalogEngine::new(8);
        let req = start(&mut engine, "");
        assert_eq!(req.cursor, 1);
        assert_eq!(req.key.category(), None);
        assert_eq!(engine.status(), FetchStatus::Loading);
    }

    #[test]
    fn test_refuses_second_fetch_while_in_flight() {
        let mut engine = CatalogEngine::new(8);
        start(&mut engine, "");
        assert_eq!(engine.fetch_next_page(), NextPage::Skipped);
        assert_eq!(engine.retry(), NextPage::Skipped);
    }

    #[test]
    fn test_pages_slice_cached_collection() {
        let mut engine = CatalogEngine::new(8);
        let req = start(&mut engine, "");
        assert_eq!(
            engine.complete(&req, Ok(products(1..=20))),
            Completion::Applied { page: 1, len: 8 }
        );
        assert_eq!(engine.cursor(), 2);
        assert!(engine.has_more());
        assert_eq!(engine.pages()[0].next_cursor, Some(2));

        assert_eq!(engine.fetch_next_page(), NextPage::Served { page: 2 });
        assert_eq!(engine.fetch_next_page(), NextPage::Served { page: 3 });
        assert_eq!(engine.pages()[2].products.len(), 4);
        assert!(!engine.has_more());
        assert_eq!(engine.pages()[2].next_cursor, None);
        assert_eq!(engine.fetch_next_page(), NextPage::Skipped);
        assert_eq!(engine.product_count(), 20);
    }

    #[test]
    fn test_exact_multiple_yields_trailing_empty_page() {
        let mut engine = CatalogEngine::new(8);
        let req = start(&mut engine, "");
        engine.complete(&req, Ok(products(1..=8)));
        assert!(engine.has_more());

        assert_eq!(engine.fetch_next_page(), NextPage::Served { page: 2 });
        assert!(engine.pages()[1].products.is_empty());
        assert!(!engine.has_more());
        assert_eq!(engine.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_category_change_resets_before_fetch_completes() {
        let mut engine = CatalogEngine::new(8);
        let req = start(&mut engine, "");
        engine.complete(&req, Ok(products(1..=16)));
        engine.fetch_next_page();
        assert_eq!(engine.pages().len(), 2);

        let req = start(&mut engine, "jewelery");
        assert!(engine.pages().is_empty());
        assert_eq!(engine.cursor(), 1);
        assert!(engine.has_more());
        assert!(!engine.has_cached_collection());
        assert_eq!(req.key.category(), Some("jewelery"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut engine = CatalogEngine::new(8);
        let old = start(&mut engine, "electronics");
        let current = start(&mut engine, "jewelery");

        assert_eq!(engine.complete(&old, Ok(products(1..=8))), Completion::Stale);
        assert!(engine.pages().is_empty());
        assert_eq!(engine.status(), FetchStatus::Loading);

        assert_eq!(
            engine.complete(&current, Ok(products(100..=103))),
            Completion::Applied { page: 1, len: 4 }
        );
    }

    #[test]
    fn test_search_only_change_does_not_refetch() {
        let mut engine = CatalogEngine::new(8);
        let req = start(&mut engine, "");
        engine.complete(&req, Ok(products(1..=8)));
        let generation = engine.generation();

        assert_eq!(engine.set_filter("", "product 3"), NextPage::Skipped);
        assert_eq!(engine.generation(), generation);
        assert_eq!(engine.visible_products().len(), 1);
        assert_eq!(engine.search().as_str(), "product 3");
    }

    #[test]
    fn test_failed_first_page_can_be_refetched() {
        let mut engine = CatalogEngine::new(2);
        let req = start(&mut engine, "");
        engine.complete(&req, Ok(products(1..=4)));

        let req = start(&mut engine, "a");
        assert_eq!(
            engine.complete(&req, Err(CatalogError::Timeout)),
            Completion::Failed
        );
        assert_eq!(engine.status(), FetchStatus::Error);
        assert_eq!(engine.last_error(), Some(&CatalogError::Timeout));
        let expected = PageRequest {
            generation: engine.generation(),
            key: FilterKey::new("a"),
            cursor: 1,
        };
        assert_eq!(engine.fetch_next_page(), NextPage::Fetch(expected));
    }

    #[test]
    fn test_retry_after_failed_next_page() {
        let mut engine = CatalogEngine::new(2);
        let req = start(&mut engine, "");
        engine.complete(&req, Err(CatalogError::Network("offline".into())));
        assert!(engine.pages().is_empty());

        let NextPage::Fetch(retry) = engine.retry() else {
            panic!("retry should issue a fetch");
        };
        assert_eq!(retry.cursor, 1);
        assert_eq!(engine.status(), FetchStatus::Loading);
        engine.complete(&retry, Ok(products(1..=3)));
        assert_eq!(engine.status(), FetchStatus::Idle);
        assert!(engine.last_error().is_none());
        assert_eq!(engine.pages().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_in_collection_are_dropped() {
        let mut engine = CatalogEngine::new(2);
        let req = start(&mut engine, "");
        let mut items = products(1..=3);
        items.push(items[0].clone());
        engine.complete(&req, Ok(items));
        engine.fetch_next_page();
        assert!(engine.has_more());
        engine.fetch_next_page();

        let ids: Vec<u32> = engine.products().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!engine.has_more());
    }
}
