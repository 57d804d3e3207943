//! Client-side search over already-paginated products.

use std::collections::HashSet;

use crate::product::{Product, ProductId};

/// Normalized search needle. Empty means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.matches_lowercase(&self.0)
    }
}

/// Apply a search query to a sequence of products, preserving order.
pub fn filter_products<'a, I>(products: I, query: &SearchQuery) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| query.matches(p)).collect()
}

/// Drop products whose id is already in `seen`, recording the new ones.
pub(crate) fn dedup_into(products: &[Product], seen: &mut HashSet<ProductId>) -> Vec<Product> {
    products
        .iter()
        .filter(|p| seen.insert(p.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    #[test]
    fn test_query_is_lowercased_verbatim() {
        assert_eq!(SearchQuery::new("ShIrT").as_str(), "shirt");
        assert_eq!(SearchQuery::new(" Shirt").as_str(), " shirt");
        assert!(!SearchQuery::new("   ").is_empty());
    }

    #[test]
    fn test_whitespace_is_part_of_the_needle() {
        let items = vec![product(1, "Blue Shirt"), product(2, "Blueshirt")];
        let hits = filter_products(&items, &SearchQuery::new(" shirt"));
        assert_eq!(hits.iter().map(|p| p.id.0).collect::<Vec<_>>(), vec![1]);
        assert!(filter_products(&items, &SearchQuery::new("   ")).is_empty());
    }

    #[test]
    fn test_filter_matches_title_or_description() {
        let mut with_desc = product(2, "Plain");
        with_desc.description = "Cotton SHIRT for summer".into();
        let items = vec![product(1, "Blue Shirt"), with_desc, product(3, "Ring")];

        let hits = filter_products(&items, &SearchQuery::new("shirt"));
        let ids: Vec<u32> = hits.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = vec![product(1, "a"), product(2, "b")];
        assert_eq!(filter_products(&items, &SearchQuery::default()).len(), 2);
    }

    #[test]
    fn test_dedup_into() {
        let mut seen = HashSet::new();
        let first = dedup_into(&[product(1, "a"), product(2, "b")], &mut seen);
        let second = dedup_into(&[product(2, "b"), product(3, "c")], &mut seen);
        assert_eq!(first.len(), 2);
        assert_eq!(second.iter().map(|p| p.id.0).collect::<Vec<_>>(), vec![3]);
    }
}
