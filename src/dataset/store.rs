// src/dataset/store.rs

use bevy::prelude::*;

use super::error::{DatasetError, DatasetResult};
use super::record::{FieldValue, Record, IDENTIFIER_KEY};
use super::reveal::RevealController;
use super::row_controller::RowController;
use super::sampler::PrefixSampler;

/// The loaded dataset and everything the editor derives from it.
///
/// `working` takes edits. `pristine` is the snapshot taken at load and only
/// ever copied back over `working`.
#[derive(Resource, Debug, Default)]
pub struct DatasetStore {
    working: Vec<Record>,
    pristine: Vec<Record>,
    rows: RowController,
    reveal: RevealController,
}

impl DatasetStore {
    pub fn new(reveal: RevealController) -> Self {
        Self {
            working: Vec::new(),
            pristine: Vec::new(),
            rows: RowController::default(),
            reveal,
        }
    }

    /// Replaces the dataset with a sampled prefix of `source`.
    pub fn load(&mut self, mut source: Vec<Record>, sampler: &mut dyn PrefixSampler) {
        let source_len = source.len();
        let len = sampler.sample_len(source_len).min(source_len);
        source.truncate(len);
        info!("Loaded {} of {} source records", len, source_len);

        self.pristine = source.clone();
        self.working = source;
        self.rows.clear();
        self.reveal.reset(len);
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.working
    }

    pub fn pristine(&self) -> &[Record] {
        &self.pristine
    }

    /// The first `revealed` records of the working copy, as they are right now.
    pub fn visible_prefix(&self) -> &[Record] {
        let n = self.reveal.visible_len(self.working.len());
        &self.working[..n]
    }

    /// Whether `row` differs from its loaded snapshot.
    pub fn is_row_modified(&self, row: usize) -> bool {
        self.records().get(row) != self.pristine().get(row)
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn editing(&self) -> Option<usize> {
        self.rows.editing()
    }

    pub fn is_editing(&self, row: usize) -> bool {
        self.rows.is_editing(row)
    }

    /// Writes one field of the working copy. Returns whether the stored value changed.
    ///
    /// The identifier is never written; such requests come back as
    /// `IdentifierImmutable` and leave the data untouched.
    pub fn apply_field_edit(&mut self, row: usize, key: &str, value: FieldValue) -> DatasetResult<bool> {
        if key == IDENTIFIER_KEY {
            return Err(DatasetError::IdentifierImmutable);
        }
        let len = self.working.len();
        let record = self
            .working
            .get_mut(row)
            .ok_or(DatasetError::RowOutOfRange { row, len })?;
        Ok(record.set(key, value))
    }

    /// Copies the pristine snapshot over the whole working copy. The edit cursor is not touched.
    pub fn revert_all(&mut self) {
        self.working = self.pristine.clone();
    }

    pub fn begin_edit(&mut self, row: usize) {
        self.rows.begin_edit(row);
    }

    /// Leaves edit mode and reverts every row, not just the one being edited.
    pub fn cancel_edit(&mut self) {
        self.rows.clear();
        self.revert_all();
    }

    /// Reveals the next step of rows. Returns whether the visible prefix grew.
    pub fn reveal_more(&mut self) -> bool {
        self.reveal.advance(self.working.len())
    }

    /// Feeds one sentinel visibility observation for a sentinel drawn after
    /// `after_row` rows. Returns whether the visible prefix grew.
    pub fn observe_sentinel(&mut self, after_row: usize, intersecting: bool) -> bool {
        self.reveal.watch_fired(after_row, intersecting) && self.reveal_more()
    }

    pub fn disarm_viewport_watch(&mut self) {
        self.reveal.disarm();
    }
}
