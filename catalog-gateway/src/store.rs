//! In-memory product store.
//!
//! Holds the catalog as an ordered sequence behind a single `RwLock`. Every
//! operation takes the lock exactly once, so read-modify-write sequences
//! (filter-then-slice, find-then-replace, find-then-remove) stay atomic
//! relative to other requests on the multi-threaded runtime.

use std::sync::RwLock;

use indexmap::IndexMap;

use catalog_core::{seed_products, Product, ProductDraft, ProductId};

/// Thread-safe, ordered collection of product records.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the seed records.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: RwLock::new(seed_products()),
        }
    }

    /// Filters and paginates the catalog in one pass.
    ///
    /// `category` matches the product category exactly, ignoring case;
    /// `search` matches a case-insensitive substring of the product name.
    /// Both filters combine with logical AND. The page window starts at
    /// `(page - 1) * limit`; negative offsets and limits clamp to zero, and
    /// an out-of-range page simply yields an empty slice.
    ///
    /// Returns the filtered (pre-pagination) count and the page slice.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn query(
        &self,
        category: Option<&str>,
        search: Option<&str>,
        page: i64,
        limit: i64,
    ) -> (usize, Vec<Product>) {
        let category = category.map(str::to_lowercase);
        let search = search.map(str::to_lowercase);

        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let products = self.products.read().expect("product store read lock poisoned");

        let filtered: Vec<&Product> = products
            .iter()
            .filter(|p| {
                category
                    .as_deref()
                    .is_none_or(|c| p.category.to_lowercase() == c)
            })
            .filter(|p| {
                search
                    .as_deref()
                    .is_none_or(|s| p.name.to_lowercase().contains(s))
            })
            .collect();

        let total = filtered.len();
        let offset = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        let data = filtered
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        (total, data)
    }

    /// Returns the product with the given id, if any.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Product> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.products
            .read()
            .expect("product store read lock poisoned")
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
    }

    /// Appends a new record built from the draft and returns it.
    ///
    /// The id is generated here; nothing a client sends can influence it.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn insert(&self, draft: ProductDraft) -> Product {
        let product = Product::new(ProductId::generate(), draft);
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.products
            .write()
            .expect("product store write lock poisoned")
            .push(product.clone());
        product
    }

    /// Replaces the business fields of the record with the given id.
    ///
    /// Returns the updated record, or `None` if the id is unknown. The id
    /// itself is preserved regardless of the draft's contents.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn update(&self, id: &str, draft: ProductDraft) -> Option<Product> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut products = self.products.write().expect("product store write lock poisoned");
        let product = products.iter_mut().find(|p| p.id.as_str() == id)?;
        product.apply(draft);
        Some(product.clone())
    }

    /// Removes the record(s) with the given id. Returns `true` if any existed.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn remove(&self, id: &str) -> bool {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut products = self.products.write().expect("product store write lock poisoned");
        let before = products.len();
        products.retain(|p| p.id.as_str() != id);
        products.len() != before
    }

    /// Counts products per category over the full catalog.
    ///
    /// Category names are used verbatim as keys, in first-seen order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn category_counts(&self) -> IndexMap<String, usize> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let products = self.products.read().expect("product store read lock poisoned");
        let mut counts = IndexMap::new();
        for product in products.iter() {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of records currently in the store.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.products
            .read()
            .expect("product store read lock poisoned")
            .len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            description: format!("{name} description"),
            price: 10.0,
            category: category.to_owned(),
            in_stock: true,
        }
    }

    #[test]
    fn insert_get_update_remove_lifecycle() {
        let store = ProductStore::new();
        let created = store.insert(draft("Toaster", "kitchen"));
        assert!(!created.id.as_str().is_empty(), "insert must assign an id");
        assert_eq!(store.len(), 1);

        let fetched = store.get(created.id.as_str());
        assert!(fetched.is_some(), "record should exist after insert");

        let updated = store.update(created.id.as_str(), draft("Toaster Pro", "kitchen"));
        match updated {
            Some(p) => {
                assert_eq!(p.id, created.id, "update must preserve the id");
                assert_eq!(p.name, "Toaster Pro");
            }
            None => panic!("update of an existing id must succeed"),
        }

        assert!(store.remove(created.id.as_str()));
        assert!(store.is_empty(), "store should be empty after remove");
    }

    #[test]
    fn unknown_id_operations_report_absence() {
        let store = ProductStore::seeded();
        assert!(store.get("nope").is_none());
        assert!(store.update("nope", draft("X", "misc")).is_none());
        assert!(!store.remove("nope"));
        assert_eq!(store.len(), 3, "misses must not mutate the store");
    }

    #[test]
    fn query_filters_combine_with_and() {
        let store = ProductStore::seeded();

        let (total, data) = store.query(Some("electronics"), None, 1, 5);
        assert_eq!(total, 2);
        assert_eq!(data.len(), 2);

        let (total, data) = store.query(Some("ELECTRONICS"), Some("lap"), 1, 5);
        assert_eq!(total, 1, "category match must ignore case");
        assert_eq!(data[0].name, "Laptop");

        let (total, data) = store.query(Some("kitchen"), Some("lap"), 1, 5);
        assert_eq!(total, 0, "filters are ANDed");
        assert!(data.is_empty());
    }

    #[test]
    fn query_pagination_windows() {
        let store = ProductStore::seeded();

        let (total, data) = store.query(None, None, 1, 2);
        assert_eq!(total, 3);
        assert_eq!(data.len(), 2);

        let (_, data) = store.query(None, None, 2, 2);
        assert_eq!(data.len(), 1);

        let (total, data) = store.query(None, None, 99, 2);
        assert_eq!(total, 3, "total is the filtered count, not the page size");
        assert!(data.is_empty(), "out-of-range page yields an empty slice");
    }

    #[test]
    fn query_clamps_negative_page_and_limit() {
        let store = ProductStore::seeded();
        let (total, data) = store.query(None, None, -3, 5);
        assert_eq!(total, 3);
        assert!(data.len() <= 5);

        let (_, data) = store.query(None, None, 1, -1);
        assert!(data.is_empty(), "negative limit takes nothing");
    }

    #[test]
    fn category_counts_keep_first_seen_order_and_verbatim_names() {
        let store = ProductStore::seeded();
        store.insert(draft("Mixer", "Kitchen"));

        let counts = store.category_counts();
        let keys: Vec<&String> = counts.keys().collect();
        assert_eq!(keys, ["electronics", "kitchen", "Kitchen"]);
        assert_eq!(counts["electronics"], 2);
        assert_eq!(counts["kitchen"], 1);
        assert_eq!(counts["Kitchen"], 1, "grouping keys are not normalized");
    }

    proptest::proptest! {
        #[test]
        fn proptest_page_slice_respects_window(
            page in -10_i64..20,
            limit in -5_i64..10,
        ) {
            let store = ProductStore::seeded();
            let (total, data) = store.query(None, None, page, limit);
            proptest::prop_assert_eq!(total, 3, "total ignores pagination");
            let window = usize::try_from(limit).unwrap_or(0);
            proptest::prop_assert!(
                data.len() <= window,
                "a page slice can never exceed the limit"
            );
        }
    }
}
