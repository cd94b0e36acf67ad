use crate::termite::TermiteId;
use std::collections::BTreeSet;

/*------------------------------------------------------------------------------
FrameRecord struct
------------------------------------------------------------------------------*/

/// Snapshot of one termite at one processed frame. Immutable once appended;
/// the only sanctioned mutations are session-wide truncation (rewind) and the
/// overwrite of the most recent record (tracker restart).
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub frame_index: usize,
    pub x: f32,
    pub y: f32,
    pub interacting_with: BTreeSet<TermiteId>,
    pub distances: Vec<(TermiteId, f32)>,
}

/*------------------------------------------------------------------------------
Trail struct
------------------------------------------------------------------------------*/

/// Append-only per-termite history. Records are never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    records: Vec<FrameRecord>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: FrameRecord) {
        self.records.push(record);
    }

    pub fn last(&self) -> Option<&FrameRecord> {
        self.records.last()
    }

    pub fn get(&self, index: usize) -> Option<&FrameRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// Drop every record past `len`. Shrink-only; asking for a longer trail
    /// is a no-op.
    pub fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }

    /// Replace the most recent record in place, keeping length unchanged.
    /// Returns false when the trail is empty.
    pub fn overwrite_last(&mut self, record: FrameRecord) -> bool {
        match self.records.last_mut() {
            Some(last) => {
                *last = record;
                true
            }
            None => false,
        }
    }
}
