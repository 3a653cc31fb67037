use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::{BoundaryRecord, LandUse, Ring};
use crate::geometry::compute_area;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    #[error("boundary {0} not found")]
    NotFound(u64),

    #[error("boundary id {0} appears more than once")]
    DuplicateId(u64),

    #[error("boundary storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid boundary records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable home for boundary records.
///
/// Implementations only write what they are given; area bookkeeping happens
/// in [`save_boundary`] before `write` is called.
pub trait BoundaryStore {
    /// Insert or replace a record, assigning an id when it has none
    fn write(&mut self, record: BoundaryRecord) -> Result<u64, StoreError>;

    fn get(&self, id: u64) -> Option<&BoundaryRecord>;

    fn records(&self) -> &[BoundaryRecord];
}

/// Round to the two decimals of the `luas` column
fn round_area(area: f64) -> f64 {
    (area * 100.0).round() / 100.0
}

/// Recompute `luas` from the record's current coordinates
pub fn refresh_area(record: &mut BoundaryRecord) {
    let area = round_area(compute_area(&record.coordinates));
    if record.area_m2 != Some(area) {
        log::debug!(
            "boundary {:?}: area {:?} -> {:.2} m² ({} vertices)",
            record.name,
            record.area_m2,
            area,
            record.coordinates.len()
        );
    }
    record.area_m2 = Some(area);
}

/// Persist a boundary, always recomputing its area first
pub fn save_boundary<S: BoundaryStore + ?Sized>(
    store: &mut S,
    mut record: BoundaryRecord,
) -> Result<u64, StoreError> {
    refresh_area(&mut record);
    store.write(record)
}

/// Replace the ring of an existing boundary and persist it with a fresh area
pub fn update_coordinates<S: BoundaryStore + ?Sized>(
    store: &mut S,
    id: u64,
    coordinates: Ring,
) -> Result<u64, StoreError> {
    let mut record = store.get(id).cloned().ok_or(StoreError::NotFound(id))?;
    record.coordinates = coordinates;
    save_boundary(store, record)
}

/// Recompute `luas` of every record in place. Order, ids and row count are
/// untouched. Returns how many areas changed.
pub fn recompute_areas(records: &mut [BoundaryRecord]) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let before = record.area_m2;
        refresh_area(record);
        if record.area_m2 != before {
            changed += 1;
        }
    }
    changed
}

/// Total stored area per land-use kind
pub fn land_use_summary(records: &[BoundaryRecord]) -> BTreeMap<LandUse, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.land_use.clone()).or_insert(0.0) += record.area_m2.unwrap_or(0.0);
    }
    totals
}

/// In-process store, used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<BoundaryRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared insert-or-replace logic for stores backed by a record list.
///
/// A record without an id is inserted under a fresh id; a record with an id
/// must replace an existing one, so a caller can never overwrite a row the
/// store numbered on its own.
pub(crate) fn upsert(
    records: &mut Vec<BoundaryRecord>,
    mut record: BoundaryRecord,
) -> Result<u64, StoreError> {
    match record.id {
        Some(id) => {
            let slot = records
                .iter_mut()
                .find(|r| r.id == Some(id))
                .ok_or(StoreError::NotFound(id))?;
            *slot = record;
            Ok(id)
        }
        None => {
            let id = records.iter().filter_map(|r| r.id).max().unwrap_or(0) + 1;
            record.id = Some(id);
            records.push(record);
            Ok(id)
        }
    }
}

/// Fail if two records share an id
pub(crate) fn check_unique_ids(records: &[BoundaryRecord]) -> Result<(), StoreError> {
    let mut seen = std::collections::HashSet::new();
    for id in records.iter().filter_map(|r| r.id) {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId(id));
        }
    }
    Ok(())
}

impl BoundaryStore for MemoryStore {
    fn write(&mut self, record: BoundaryRecord) -> Result<u64, StoreError> {
        upsert(&mut self.records, record)
    }

    fn get(&self, id: u64) -> Option<&BoundaryRecord> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    fn records(&self) -> &[BoundaryRecord] {
        &self.records
    }
}
