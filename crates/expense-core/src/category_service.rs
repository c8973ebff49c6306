use expense_domain::{normalize_category, CategoryLimits};
use strsim::levenshtein;

use crate::CoreError;

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// The set of categories expenses and budget limits may use.
///
/// An empty catalog accepts every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    known: Vec<String>,
}

impl CategoryCatalog {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known: Vec<String> = categories
            .into_iter()
            .map(|name| normalize_category(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        known.sort();
        known.dedup();
        Self { known }
    }

    /// Catalog that accepts any category.
    pub fn open() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.known.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.known
    }

    /// Returns the normalized category, or an error naming the closest known one.
    pub fn resolve(&self, category: &str) -> Result<String, CoreError> {
        let normalized = normalize_category(category);
        if normalized.is_empty() {
            return Err(CoreError::Validation("Category is required".into()));
        }
        if self.is_open() || self.known.contains(&normalized) {
            return Ok(normalized);
        }
        Err(CoreError::UnknownCategory {
            suggestion: self.closest(&normalized),
            category: normalized,
        })
    }

    /// Checks every key of a budget's limit map against the catalog.
    pub fn check_limits(&self, limits: &CategoryLimits) -> Result<(), CoreError> {
        for category in limits.keys() {
            self.resolve(category)?;
        }
        Ok(())
    }

    fn closest(&self, category: &str) -> Option<String> {
        self.known
            .iter()
            .map(|known| (levenshtein(known, category), known))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, known)| known.clone())
    }
}
