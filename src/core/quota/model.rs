//! Observable list of quota records.

use serde::{Deserialize, Serialize};

use super::record::QuotaRecord;

/// Row-level change reported by [`QuotaListModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowChange {
    Inserted { row: usize },
    Removed { row: usize },
    Moved { from: usize, to: usize },
    Changed { row: usize },
    Reset,
}

/// Ordered list of records keyed by mount label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaListModel {
    items: Vec<QuotaRecord>,
}

impl QuotaListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&QuotaRecord> {
        self.items.get(row)
    }

    pub fn items(&self) -> &[QuotaRecord] {
        &self.items
    }

    /// Drop every row.
    pub fn clear(&mut self) -> Vec<RowChange> {
        if self.items.is_empty() {
            return Vec::new();
        }
        self.items.clear();
        vec![RowChange::Reset]
    }

    /// Merge `new_items` into the list: rows whose label disappeared are
    /// removed, existing rows are moved and updated in place, unknown labels
    /// are inserted. Afterwards the list equals `new_items`.
    pub fn update_items(&mut self, new_items: Vec<QuotaRecord>) -> Vec<RowChange> {
        let mut changes = Vec::new();

        // remove rows that are gone, back to front so indices stay valid
        let mut row = self.items.len();
        while row > 0 {
            row -= 1;
            let label = &self.items[row].mount_label;
            if !new_items.iter().any(|n| &n.mount_label == label) {
                self.items.remove(row);
                changes.push(RowChange::Removed { row });
            }
        }

        let new_len = new_items.len();
        for (target, item) in new_items.into_iter().enumerate() {
            let existing = self.items[target..]
                .iter()
                .position(|r| r.mount_label == item.mount_label)
                .map(|offset| target + offset);

            match existing {
                Some(from) => {
                    if from != target {
                        let moved = self.items.remove(from);
                        self.items.insert(target, moved);
                        changes.push(RowChange::Moved { from, to: target });
                    }
                    if self.items[target] != item {
                        self.items[target] = item;
                        changes.push(RowChange::Changed { row: target });
                    }
                }
                None => {
                    self.items.insert(target, item);
                    changes.push(RowChange::Inserted { row: target });
                }
            }
        }

        // rows with a duplicated label are left over past the new length
        while self.items.len() > new_len {
            let row = self.items.len() - 1;
            self.items.pop();
            changes.push(RowChange::Removed { row });
        }

        changes
    }
}
