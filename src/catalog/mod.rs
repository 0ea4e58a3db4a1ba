// src/catalog/mod.rs
//
// Indexed, read-only view over the element records.

pub mod cache;
pub mod index;
pub mod loader;

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::model::{Category, ElementRecord};

pub use cache::{CacheStats, EvictionPolicy, QueryCache};
pub use index::{MultiIndex, PrefixIndex};
pub use loader::{CatalogHandle, CatalogStatus, SearchOutcome};

/// Which resolution rule produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    All,
    AtomicNumber,
    Symbol,
    Name,
    SymbolPrefix,
    NamePrefix,
    Category,
    Substring,
    NoMatch,
}

/// Tuning knobs for the query cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogOptions {
    pub cache_entries: usize,
    pub max_cached_query_len: usize,
    pub eviction: EvictionPolicy,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            cache_entries: 256,
            max_cached_query_len: 10,
            eviction: EvictionPolicy::Lru,
        }
    }
}

/// Lowercased fields used by the substring fallback.
#[derive(Debug)]
struct SearchKeys {
    symbol: String,
    name: String,
    category: String,
}

#[derive(Debug)]
pub struct ElementCatalog {
    records: Vec<ElementRecord>,
    keys: Vec<SearchKeys>,
    by_atomic_number: HashMap<u32, usize>,
    by_symbol: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    symbol_prefixes: PrefixIndex,
    name_prefixes: PrefixIndex,
    by_category: MultiIndex,
    cache: QueryCache,
}

/// Trim + lowercase, the form every index is keyed by.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

impl ElementCatalog {
    pub fn build(records: Vec<ElementRecord>) -> Result<Self, CatalogError> {
        Self::build_with(records, CatalogOptions::default())
    }

    /// Sorts the records into canonical order and builds every index in one
    /// pass. Duplicate atomic numbers, symbols or names reject the dataset.
    pub fn build_with(
        mut records: Vec<ElementRecord>,
        options: CatalogOptions,
    ) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        records.sort_by_key(|r| r.atomic_number);

        let n = records.len();
        let mut keys = Vec::with_capacity(n);
        let mut by_atomic_number = HashMap::with_capacity(n);
        let mut by_symbol = HashMap::with_capacity(n);
        let mut by_name = HashMap::with_capacity(n);
        let mut symbol_prefixes = PrefixIndex::new();
        let mut name_prefixes = PrefixIndex::new();
        let mut by_category = MultiIndex::default();

        for (idx, r) in records.iter().enumerate() {
            let symbol = normalize(&r.symbol);
            let name = normalize(&r.name);
            let category = r.category.label().to_lowercase();

            if by_atomic_number.insert(r.atomic_number, idx).is_some() {
                return Err(CatalogError::DuplicateAtomicNumber(r.atomic_number));
            }
            if by_symbol.insert(symbol.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSymbol(r.symbol.clone()));
            }
            if by_name.insert(name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateName(r.name.clone()));
            }

            symbol_prefixes.insert(&symbol, idx);
            name_prefixes.insert(&name, idx);
            by_category.insert(&category, idx);

            keys.push(SearchKeys {
                symbol,
                name,
                category,
            });
        }

        log::debug!(
            "Indexed {} elements: {} symbol prefixes, {} name prefixes, {} categories",
            n,
            symbol_prefixes.len(),
            name_prefixes.len(),
            by_category.len()
        );

        let cache = QueryCache::new(options.cache_entries, options.max_cached_query_len)
            .with_policy(options.eviction);

        Ok(Self {
            records,
            keys,
            by_atomic_number,
            by_symbol,
            by_name,
            symbol_prefixes,
            name_prefixes,
            by_category,
            cache,
        })
    }

    // --- Queries ---

    /// Free-text search. Never fails; no match is an empty list.
    ///
    /// Rules, first hit wins: atomic number, exact symbol, exact name,
    /// symbol prefix, name prefix, category, then substring. Single
    /// characters skip the exact rules so that "h" lists every H element.
    pub fn search(&self, query: &str) -> Vec<&ElementRecord> {
        let q = normalize(query);
        if q.is_empty() {
            return self.records.iter().collect();
        }

        let hits = self.cache.get_or_insert_with(&q, || self.resolve(&q).1);
        hits.iter().map(|&i| &self.records[i]).collect()
    }

    /// Names the rule that answers `query`.
    pub fn explain(&self, query: &str) -> MatchKind {
        let q = normalize(query);
        if q.is_empty() {
            return MatchKind::All;
        }
        self.resolve(&q).0
    }

    fn resolve(&self, q: &str) -> (MatchKind, Vec<usize>) {
        if let Ok(z) = q.parse::<u32>() {
            if let Some(&idx) = self.by_atomic_number.get(&z) {
                return (MatchKind::AtomicNumber, vec![idx]);
            }
        }

        if q.chars().count() > 1 {
            if let Some(&idx) = self.by_symbol.get(q) {
                return (MatchKind::Symbol, vec![idx]);
            }
            if let Some(&idx) = self.by_name.get(q) {
                return (MatchKind::Name, vec![idx]);
            }
        }

        if let Some(list) = self.symbol_prefixes.get(q) {
            return (MatchKind::SymbolPrefix, list.to_vec());
        }
        if let Some(list) = self.name_prefixes.get(q) {
            return (MatchKind::NamePrefix, list.to_vec());
        }
        if let Some(list) = self.by_category.get(q) {
            return (MatchKind::Category, list.to_vec());
        }

        let found: Vec<usize> = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, k)| k.name.contains(q) || k.symbol.contains(q) || k.category.contains(q))
            .map(|(i, _)| i)
            .collect();

        if found.is_empty() {
            (MatchKind::NoMatch, found)
        } else {
            (MatchKind::Substring, found)
        }
    }

    // --- Direct lookups ---

    pub fn get(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.by_atomic_number
            .get(&atomic_number)
            .map(|&i| &self.records[i])
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&ElementRecord> {
        self.by_symbol.get(&normalize(symbol)).map(|&i| &self.records[i])
    }

    pub fn by_name(&self, name: &str) -> Option<&ElementRecord> {
        self.by_name.get(&normalize(name)).map(|&i| &self.records[i])
    }

    /// Atomic number, symbol or name, in that order.
    pub fn lookup(&self, key: &str) -> Option<&ElementRecord> {
        let key = key.trim();
        if let Ok(z) = key.parse::<u32>() {
            return self.get(z);
        }
        self.by_symbol(key).or_else(|| self.by_name(key))
    }

    pub fn in_category(&self, category: Category) -> Vec<&ElementRecord> {
        self.by_category
            .get(&category.label().to_lowercase())
            .unwrap_or(&[])
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// Categories present, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.category) {
                seen.push(r.category);
            }
        }
        seen
    }

    /// All records in ascending atomic-number order.
    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_bundled;

    fn catalog() -> ElementCatalog {
        ElementCatalog::build(load_bundled().unwrap()).unwrap()
    }

    fn symbols(found: &[&ElementRecord]) -> Vec<String> {
        found.iter().map(|r| r.symbol.clone()).collect()
    }

    fn tiny(records: &[(u32, &str, &str)]) -> Vec<ElementRecord> {
        records
            .iter()
            .map(|&(z, s, n)| ElementRecord::new(z, s, n, z as f64 * 2.0, Category::Nonmetal))
            .collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let c = catalog();
        let all = c.search("");
        assert_eq!(all.len(), 118);
        assert!(all.windows(2).all(|w| w[0].atomic_number < w[1].atomic_number));
        assert_eq!(c.search("   ").len(), 118);
        assert_eq!(c.explain(""), MatchKind::All);
    }

    #[test]
    fn test_exact_name_beats_prefix() {
        let c = catalog();
        let found = c.search("Hydrogen");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].atomic_number, 1);
        assert_eq!(found[0].symbol, "H");
        assert_eq!(c.explain("  HYDROGEN "), MatchKind::Name);
    }

    #[test]
    fn test_single_letter_is_a_prefix_query() {
        let c = catalog();
        let found = symbols(&c.search("h"));
        for s in ["H", "He", "Hf", "Ho", "Hs"] {
            assert!(found.contains(&s.to_string()), "missing {}", s);
        }
        assert!(!found.contains(&"Rh".to_string()));
        assert_eq!(c.explain("H"), MatchKind::SymbolPrefix);
        assert_eq!(c.search("H"), c.search("h"));
    }

    #[test]
    fn test_atomic_number_lookup() {
        let c = catalog();
        let found = c.search("6");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Carbon");
        assert_eq!(c.explain("6"), MatchKind::AtomicNumber);
        assert_eq!(c.search("118")[0].symbol, "Og");
    }

    #[test]
    fn test_exact_symbol() {
        let c = catalog();
        assert_eq!(symbols(&c.search("fe")), vec!["Fe"]);
        assert_eq!(symbols(&c.search("AR")), vec!["Ar"]);
        assert_eq!(c.explain("Na"), MatchKind::Symbol);
    }

    #[test]
    fn test_name_prefix() {
        let c = catalog();
        assert_eq!(symbols(&c.search("carb")), vec!["C"]);
        let found = symbols(&c.search("hel"));
        assert_eq!(found, vec!["He"]);
        assert_eq!(c.explain("nitro"), MatchKind::NamePrefix);
    }

    #[test]
    fn test_category_grouping() {
        let c = catalog();
        let found = symbols(&c.search("noble gas"));
        assert_eq!(found, vec!["He", "Ne", "Ar", "Kr", "Xe", "Rn", "Og"]);
        assert_eq!(c.search("Lanthanide").len(), 15);
        assert_eq!(c.explain("Noble Gas"), MatchKind::Category);
    }

    #[test]
    fn test_substring_fallback() {
        let c = catalog();
        let found = c.search("gen");
        // hydrogen, nitrogen, oxygen, halogens by category
        assert!(found.iter().any(|r| r.symbol == "H"));
        assert!(found.iter().any(|r| r.symbol == "N"));
        assert!(found.iter().any(|r| r.symbol == "Cl"));
        assert!(found.windows(2).all(|w| w[0].atomic_number < w[1].atomic_number));
        assert_eq!(c.explain("gen"), MatchKind::Substring);
    }

    #[test]
    fn test_no_match_is_empty() {
        let c = catalog();
        assert!(c.search("xyzzy").is_empty());
        assert_eq!(c.explain("xyzzy"), MatchKind::NoMatch);
        // numbers outside the table fall through to substring and find nothing
        assert!(c.search("999").is_empty());
    }

    #[test]
    fn test_repeated_queries_are_identical_and_cached() {
        let c = catalog();
        for q in ["h", "noble gas", "ium", "6", "carb", "xyzzy"] {
            assert_eq!(c.search(q), c.search(q));
        }
        let stats = c.cache_stats();
        assert!(stats.hits >= 6, "{:?}", stats);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let a = catalog();
        let b = catalog();
        for q in ["", "h", "s", "metal", "noble gas", "7", "tin", "x"] {
            assert_eq!(a.search(q), b.search(q), "query {:?}", q);
        }
    }

    #[test]
    fn test_duplicate_atomic_number_rejected() {
        let mut records = load_bundled().unwrap();
        let mut dup = records[5].clone();
        dup.symbol = "Cx".into();
        dup.name = "Carbonium".into();
        records.push(dup);
        assert_eq!(
            ElementCatalog::build(records).unwrap_err(),
            CatalogError::DuplicateAtomicNumber(6)
        );
    }

    #[test]
    fn test_duplicate_symbol_and_name_rejected() {
        let err = ElementCatalog::build(tiny(&[(1, "H", "Hydrogen"), (2, "h", "Other")])).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSymbol("h".into()));

        let err = ElementCatalog::build(tiny(&[(1, "H", "Hydrogen"), (2, "Hx", "HYDROGEN")])).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("HYDROGEN".into()));

        assert_eq!(ElementCatalog::build(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let c = ElementCatalog::build(tiny(&[(3, "Li", "Lithium"), (1, "H", "Hydrogen"), (2, "He", "Helium")])).unwrap();
        let order: Vec<u32> = c.records().iter().map(|r| r.atomic_number).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_direct_lookups() {
        let c = catalog();
        assert_eq!(c.get(26).map(|r| r.symbol.as_str()), Some("Fe"));
        assert_eq!(c.by_symbol("au").map(|r| r.name.as_str()), Some("Gold"));
        assert_eq!(c.by_name("MERCURY").map(|r| r.symbol.as_str()), Some("Hg"));
        assert_eq!(c.lookup("79").map(|r| r.symbol.as_str()), Some("Au"));
        assert_eq!(c.lookup("oxygen").map(|r| r.atomic_number), Some(8));
        assert!(c.lookup("nope").is_none());
    }

    #[test]
    fn test_categories_and_membership() {
        let c = catalog();
        assert_eq!(c.categories().len(), 10);
        assert_eq!(c.categories()[0], Category::Nonmetal);
        assert_eq!(c.in_category(Category::Halogen).len(), 6);
        assert_eq!(c.in_category(Category::Actinide).len(), 15);
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ElementCatalog>();

        let c = std::sync::Arc::new(catalog());
        let handles: Vec<_> = ["h", "noble gas", "6"]
            .into_iter()
            .map(|q| {
                let c = std::sync::Arc::clone(&c);
                std::thread::spawn(move || c.search(q).len())
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts[1], 7);
        assert_eq!(counts[2], 1);
    }
}
