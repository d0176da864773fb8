// File: crates/crop-engine/src/selection.rs
// Summary: The set of active category names; the only mutable state of a view.

use std::collections::BTreeSet;

use tracing::debug;

use crate::category::Category;

/// Active category names. Starts with every known name; `toggle` flips one.
///
/// Names are not checked against the category list: toggling an unknown name
/// changes membership but never shows up in derived series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    active: BTreeSet<String>,
}

impl SelectionStore {
    /// All names of `categories` active.
    pub fn new(categories: &[Category]) -> Self {
        Self::from_names(categories.iter().map(|c| c.name.as_str()))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { active: names.into_iter().map(Into::into).collect() }
    }

    /// Flip membership of `name`; returns whether it is active afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        let now_active = if self.active.remove(name) {
            false
        } else {
            self.active.insert(name.to_owned());
            true
        };
        debug!(name, now_active, active = self.active.len(), "selection toggled");
        now_active
    }

    pub fn active_names(&self) -> &BTreeSet<String> { &self.active }

    pub fn is_active(&self, name: &str) -> bool { self.active.contains(name) }

    pub fn len(&self) -> usize { self.active.len() }

    pub fn is_empty(&self) -> bool { self.active.is_empty() }
}
