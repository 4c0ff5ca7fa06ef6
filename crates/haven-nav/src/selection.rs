//! Bulk selection for admin list views.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSelection<K: Ord + Clone> {
    selected: BTreeSet<K>,
}

impl<K: Ord + Clone> Default for BulkSelection<K> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> BulkSelection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one key; returns whether it is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// True when `visible` is non-empty and every key in it is selected.
    pub fn all_selected(&self, visible: &[K]) -> bool {
        !visible.is_empty() && visible.iter().all(|k| self.selected.contains(k))
    }

    /// Header checkbox: deselect the visible page if it is fully selected,
    /// otherwise select all of it. Keys on other pages are left alone.
    pub fn toggle_all(&mut self, visible: &[K]) {
        if self.all_selected(visible) {
            for key in visible {
                self.selected.remove(key);
            }
        } else {
            self.selected.extend(visible.iter().cloned());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected keys in sorted order.
    pub fn selected(&self) -> Vec<K> {
        self.selected.iter().cloned().collect()
    }
}
