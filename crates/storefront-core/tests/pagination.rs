//! End-to-end pagination against an in-memory catalog.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use rust_decimal_macros::dec;
use storefront_core::catalog::{Completion, FetchStatus, NextPage};
use storefront_core::{
    CatalogEngine, CatalogError, CatalogSource, FilterKey, ObserverCommand, Product, ProductId,
    Sentinel,
};

struct FakeCatalog {
    items: Vec<Product>,
    calls: Cell<usize>,
    fail_next: Cell<bool>,
    requested: RefCell<Vec<Option<String>>>,
}

impl FakeCatalog {
    fn new(items: Vec<Product>) -> Self {
        Self {
            items,
            calls: Cell::new(0),
            fail_next: Cell::new(false),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl CatalogSource for FakeCatalog {
    async fn products(&self, key: &FilterKey) -> Result<Vec<Product>, CatalogError> {
        self.calls.set(self.calls.get() + 1);
        self.requested
            .borrow_mut()
            .push(key.category().map(str::to_string));
        if self.fail_next.replace(false) {
            return Err(CatalogError::Network("connection reset".into()));
        }
        Ok(self
            .items
            .iter()
            .filter(|p| key.category().is_none_or(|c| p.category == c))
            .cloned()
            .collect())
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut seen = Vec::new();
        for p in &self.items {
            if !seen.contains(&p.category) {
                seen.push(p.category.clone());
            }
        }
        Ok(seen)
    }

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.items
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

fn item(id: u32, title: &str, category: &str) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        price: dec!(10.00),
        description: format!("Description of {title}"),
        category: category.to_string(),
        image: format!("https://example.com/{id}.png"),
        rating: None,
    }
}

fn catalog(n: u32) -> Vec<Product> {
    (1..=n).map(|i| item(i, &format!("Item {i}"), "general")).collect()
}

/// Run one engine decision to completion against `source`.
async fn drive<S: CatalogSource>(
    engine: &mut CatalogEngine,
    source: &S,
    next: NextPage,
) -> Option<Completion> {
    match next {
        NextPage::Skipped => None,
        NextPage::Served { page } => {
            let len = engine
                .pages()
                .last()
                .filter(|p| p.number == page)
                .map_or(0, |p| p.products.len());
            Some(Completion::Applied { page, len })
        }
        NextPage::Fetch(request) => {
            let result = source.products(&request.key).await;
            Some(engine.complete(&request, result))
        }
    }
}

fn last_visible(engine: &CatalogEngine) -> Option<ProductId> {
    engine.visible_products().last().map(|p| p.id)
}

#[tokio::test]
async fn test_cursor_advances_and_ids_stay_unique() {
    let source = FakeCatalog::new(catalog(30));
    let mut engine = CatalogEngine::new(8);

    let first = engine.set_filter("", "");
    drive(&mut engine, &source, first).await;

    let mut cursor = engine.cursor();
    while engine.has_more() {
        let next = engine.fetch_next_page();
        let done = drive(&mut engine, &source, next).await;
        assert!(matches!(done, Some(Completion::Applied { .. })));
        assert_eq!(engine.cursor(), cursor + 1);
        cursor = engine.cursor();
    }

    let ids: Vec<ProductId> = engine.products().map(|p| p.id).collect();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(ids.len(), 30);
    assert_eq!(unique.len(), 30);
    assert_eq!(engine.pages().len(), 4);
    // The full collection is fetched once per filter key.
    assert_eq!(source.calls.get(), 1);
}

#[tokio::test]
async fn test_exactly_one_page_then_trailing_empty_page() {
    let source = FakeCatalog::new(catalog(8));
    let mut engine = CatalogEngine::new(8);

    let first = engine.set_filter("", "");
    drive(&mut engine, &source, first).await;
    assert!(engine.has_more());

    let next = engine.fetch_next_page();
    let done = drive(&mut engine, &source, next).await;
    assert_eq!(done, Some(Completion::Applied { page: 2, len: 0 }));
    assert!(!engine.has_more());
    assert_ne!(engine.status(), FetchStatus::Error);
    assert_eq!(engine.fetch_next_page(), NextPage::Skipped);
}

#[tokio::test]
async fn test_search_filters_loaded_pages_only() {
    let mut items = catalog(16);
    items[2].title = "Silver Ring".into();
    items[9].title = "Gold ring".into();
    items[15].title = "RING set".into();
    let source = FakeCatalog::new(items);
    let mut engine = CatalogEngine::new(8);

    let first = engine.set_filter("", "");
    drive(&mut engine, &source, first).await;
    let next = engine.fetch_next_page();
    drive(&mut engine, &source, next).await;
    assert_eq!(engine.product_count(), 16);
    let has_more = engine.has_more();

    assert_eq!(engine.set_filter("", "ring"), NextPage::Skipped);
    let titles: Vec<&str> = engine
        .visible_products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Silver Ring", "Gold ring", "RING set"]);
    assert_eq!(engine.has_more(), has_more);
}

#[tokio::test]
async fn test_category_change_scopes_request_and_resets() {
    let mut items = catalog(10);
    items.push(item(11, "Necklace", "jewelery"));
    items.push(item(12, "Bracelet", "jewelery"));
    let source = FakeCatalog::new(items);
    let mut engine = CatalogEngine::new(8);

    let first = engine.set_filter("", "");
    drive(&mut engine, &source, first).await;
    assert_eq!(engine.product_count(), 8);

    let scoped = engine.set_filter("jewelery", "");
    assert_eq!(engine.cursor(), 1);
    assert!(engine.pages().is_empty());
    drive(&mut engine, &source, scoped).await;

    assert_eq!(engine.product_count(), 2);
    assert!(!engine.has_more());
    assert_eq!(
        *source.requested.borrow(),
        vec![None, Some("jewelery".to_string())]
    );
}

#[tokio::test]
async fn test_stale_completion_after_category_switch() {
    let source = FakeCatalog::new(catalog(12));
    let mut engine = CatalogEngine::new(8);

    let NextPage::Fetch(old) = engine.set_filter("", "") else {
        panic!("expected a network fetch");
    };
    let current = engine.set_filter("general", "");

    // The old request resolves after the switch.
    let late = source.products(&old.key).await;
    assert_eq!(engine.complete(&old, late), Completion::Stale);
    assert!(engine.pages().is_empty());

    drive(&mut engine, &source, current).await;
    assert_eq!(engine.product_count(), 8);
}

#[tokio::test]
async fn test_failure_then_user_retry() {
    let source = FakeCatalog::new(catalog(5));
    let mut engine = CatalogEngine::new(8);
    source.fail_next.set(true);

    let first = engine.set_filter("", "");
    assert_eq!(
        drive(&mut engine, &source, first).await,
        Some(Completion::Failed)
    );
    assert_eq!(engine.status(), FetchStatus::Error);
    assert!(engine.last_error().is_some_and(CatalogError::is_retryable));

    let retry = engine.retry();
    drive(&mut engine, &source, retry).await;
    assert_eq!(engine.status(), FetchStatus::Idle);
    assert_eq!(engine.product_count(), 5);
    assert!(!engine.has_more());
}

#[tokio::test]
async fn test_single_product_lookup() {
    let source = FakeCatalog::new(catalog(3));
    assert_eq!(source.product(ProductId(2)).await.unwrap().title, "Item 2");
    assert_eq!(
        source.product(ProductId(42)).await,
        Err(CatalogError::NotFound(ProductId(42)))
    );
    assert_eq!(source.categories().await.unwrap(), vec!["general"]);
}

#[tokio::test]
async fn test_search_keeps_scrolling_past_pages_without_matches() {
    let mut items = catalog(24);
    items[2].title = "Silver Ring".into();
    items[20].title = "Gold ring".into();
    let source = FakeCatalog::new(items);
    let mut engine = CatalogEngine::new(8);
    let mut sentinel = Sentinel::new();

    let first = engine.set_filter("", "ring");
    drive(&mut engine, &source, first).await;
    sentinel.sync(last_visible(&engine), engine.cursor(), engine.is_loading(), engine.has_more());
    assert_eq!(sentinel.target(), Some(&ProductId(3)));

    // The last match stays in view while pages are served from the cached collection.
    let mut served = 0;
    while sentinel.on_visibility(&ProductId(3), true) {
        let next = engine.fetch_next_page();
        assert!(matches!(next, NextPage::Served { .. }));
        drive(&mut engine, &source, next).await;
        served += 1;
        let commands = sentinel.sync(
            last_visible(&engine),
            engine.cursor(),
            engine.is_loading(),
            engine.has_more(),
        );
        if last_visible(&engine) == Some(ProductId(3)) {
            assert_eq!(
                commands,
                vec![
                    ObserverCommand::Unobserve(ProductId(3)),
                    ObserverCommand::Observe(ProductId(3)),
                ]
            );
        }
    }

    assert_eq!(served, 2);
    assert_eq!(last_visible(&engine), Some(ProductId(21)));
    assert_eq!(sentinel.target(), Some(&ProductId(21)));
    assert_eq!(engine.visible_products().len(), 2);
    assert_eq!(source.calls.get(), 1);
}
