use crate::core::models::MoveRecord;

// Capacity hint only; the stack itself is unbounded.
const PREALLOCATED_RECORDS: usize = 256;

/// Move history for the currently loaded level. Records are appended on
/// successful steps and only ever removed from the top by undo.
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> MoveHistory {
        MoveHistory {
            records: Vec::with_capacity(PREALLOCATED_RECORDS),
        }
    }

    pub fn record_step(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn pop_last(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        MoveHistory::new()
    }
}
