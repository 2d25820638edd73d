use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One bookable space shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl CatalogItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Category selector. The literal `"all"` selects every category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Only(name) => name,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => CategoryFilter::ALL.to_string(),
            CategoryFilter::Only(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current search text and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    search_term: String,
    pub category: CategoryFilter,
}

impl FilterQuery {
    /// The search term is lowercased here, once, rather than per item.
    pub fn new(search_term: impl AsRef<str>, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.as_ref().to_lowercase(),
            category,
        }
    }

    /// Matches every item.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn matches_search(&self, item: &CatalogItem) -> bool {
        self.search_term.is_empty()
            || item.title.to_lowercase().contains(&self.search_term)
            || item.description.to_lowercase().contains(&self.search_term)
    }

    pub fn matches_category(&self, item: &CatalogItem) -> bool {
        self.category.accepts(&item.category)
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.matches_search(item) && self.matches_category(item)
    }
}

/// One visibility flag per item, in input order.
pub fn filter_catalog(items: &[CatalogItem], query: &FilterQuery) -> Vec<bool> {
    let flags: Vec<bool> = items.iter().map(|item| query.matches(item)).collect();
    debug!(
        "Filtered {} items with term {:?} in category {}: {} visible",
        items.len(),
        query.search_term(),
        query.category,
        flags.iter().filter(|v| **v).count()
    );
    flags
}

/// Positions of the visible items, ascending.
pub fn filter_indices(items: &[CatalogItem], query: &FilterQuery) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| query.matches(item))
        .map(|(i, _)| i)
        .collect()
}

/// A listing of spaces, as loaded from a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Optional human-readable name for this catalog.
    #[serde(default)]
    pub name: Option<String>,
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { name: None, items }
    }

    /// Load a catalog from a JSON or YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        crate::source::load_document(path, "catalog")
    }

    pub fn filter(&self, query: &FilterQuery) -> Vec<bool> {
        filter_catalog(&self.items, query)
    }

    pub fn visible<'a>(&'a self, query: &FilterQuery) -> Vec<&'a CatalogItem> {
        self.items.iter().filter(|item| query.matches(item)).collect()
    }

    /// Distinct categories in first-seen order; empty categories are skipped.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            let category = item.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Quiet Room", "Individual desks, no talking", "silent"),
            CatalogItem::new("Loud Hall", "Discussion tables for groups", "social"),
        ]
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(filter_catalog(&[], &FilterQuery::new("room", CategoryFilter::All)).is_empty());
        assert!(filter_indices(&[], &FilterQuery::all()).is_empty());
    }

    #[test]
    fn blank_query_shows_everything() {
        assert_eq!(filter_catalog(&rooms(), &FilterQuery::all()), vec![true, true]);
    }

    #[test]
    fn search_is_case_insensitive_on_title_and_description() {
        let items = rooms();
        assert_eq!(
            filter_catalog(&items, &FilterQuery::new("room", CategoryFilter::All)),
            vec![true, false]
        );
        assert_eq!(
            filter_catalog(&items, &FilterQuery::new("ROOM", CategoryFilter::All)),
            vec![true, false]
        );
        assert_eq!(
            filter_catalog(&items, &FilterQuery::new("groups", CategoryFilter::All)),
            vec![false, true]
        );
    }

    #[test]
    fn category_must_match_exactly() {
        let items = rooms();
        let social: CategoryFilter = "social".parse().unwrap();
        assert_eq!(filter_catalog(&items, &FilterQuery::new("", social)), vec![false, true]);

        let shouting = CategoryFilter::Only("Social".to_string());
        assert_eq!(filter_catalog(&items, &FilterQuery::new("", shouting)), vec![false, false]);
    }

    #[test]
    fn search_and_category_combine() {
        let items = rooms();
        let query = FilterQuery::new("room", CategoryFilter::Only("social".to_string()));
        assert_eq!(filter_catalog(&items, &query), vec![false, false]);
        assert!(filter_indices(&items, &query).is_empty());

        let query = FilterQuery::new("hall", CategoryFilter::Only("social".to_string()));
        assert_eq!(filter_indices(&items, &query), vec![1]);
    }

    #[test]
    fn all_literal_parses_to_all() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "silent".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("silent".to_string())
        );
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn repeated_filtering_is_stable() {
        let items = rooms();
        let query = FilterQuery::new("o", CategoryFilter::All);
        assert_eq!(filter_catalog(&items, &query), filter_catalog(&items, &query));
    }

    #[test]
    fn catalog_lists_categories_in_order() {
        let mut items = rooms();
        items.push(CatalogItem::new("Reading Nook", "", "silent"));
        items.push(CatalogItem::new("Pop-up Desk", "", ""));
        let catalog = Catalog::new(items);
        assert_eq!(catalog.categories(), vec!["silent", "social"]);

        let visible = catalog.visible(&FilterQuery::new("", "silent".parse().unwrap()));
        let titles: Vec<_> = visible.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["Quiet Room", "Reading Nook"]);
    }

    #[test]
    fn catalog_deserializes_from_yaml() {
        let yaml = r#"
name: Koramangala branch
items:
  - title: Quiet Room
    description: Individual desks
    category: silent
  - title: Loud Hall
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.name.as_deref(), Some("Koramangala branch"));
        assert_eq!(catalog.items[1].category, "");
        assert_eq!(catalog.filter(&FilterQuery::all()), vec![true, true]);
    }
}
