//! Per-session category state.
//!
//! A [`CategorySession`] owns the category list offered for entry and the label currently
//! selected in the entry form. Every change to the list is written through to its store.

use expense_analytics::{CategoryStore, StoreError};
use expense_domain::CategorySet;

pub struct CategorySession<S: CategoryStore> {
    store: S,
    categories: CategorySet,
    selected: Option<String>,
}

impl<S: CategoryStore> CategorySession<S> {
    /// Loads the category list once from `store`.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let categories = store.load()?;
        tracing::debug!(custom = categories.custom().len(), "category session opened");
        Ok(Self {
            store,
            categories,
            selected: None,
        })
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Selects `label` for entry. Unknown labels are rejected and leave the selection as-is.
    pub fn select(&mut self, label: &str) -> bool {
        if !self.categories.contains(label) {
            return false;
        }
        self.selected = Some(label.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Adds a custom label and persists the list when it changed.
    ///
    /// If the save fails the in-memory list is restored and the error returned.
    pub fn add(&mut self, label: &str) -> Result<bool, StoreError> {
        let previous = self.categories.clone();
        if !self.categories.add(label) {
            return Ok(false);
        }
        if let Err(err) = self.store.save(&self.categories) {
            self.categories = previous;
            return Err(err);
        }
        tracing::info!(label = label.trim(), "category added");
        Ok(true)
    }

    /// Removes a custom label, clearing the selection if it pointed at that label.
    pub fn remove(&mut self, label: &str) -> Result<bool, StoreError> {
        let previous = self.categories.clone();
        if !self.categories.remove(label) {
            return Ok(false);
        }
        if let Err(err) = self.store.save(&self.categories) {
            self.categories = previous;
            return Err(err);
        }
        if self.selected.as_deref() == Some(label.trim()) {
            self.selected = None;
        }
        tracing::info!(label, "category removed");
        Ok(true)
    }
}
