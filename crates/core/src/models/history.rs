use std::collections::VecDeque;

use uuid::Uuid;

use super::record::ConversionRecord;

/// Maximum number of conversions kept in the rolling history.
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded, newest-first list of past conversions.
///
/// Lives only for the session; nothing here is persisted. Every operation is
/// total — deleting an unknown id or clearing an empty list is a no-op.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: VecDeque<ConversionRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the head. Returns the evicted oldest record, if the list
    /// was already full.
    pub fn add(&mut self, record: ConversionRecord) -> Option<ConversionRecord> {
        self.records.push_front(record);
        if self.records.len() > HISTORY_CAPACITY {
            self.records.pop_back()
        } else {
            None
        }
    }

    /// Remove the record with `id`. Returns it if it was present.
    pub fn delete(&mut self, id: Uuid) -> Option<ConversionRecord> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        self.records.remove(idx)
    }

    /// Drop every record. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    /// Records, newest first.
    pub fn list(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&ConversionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Most recent record.
    pub fn head(&self) -> Option<&ConversionRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
