use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::BoundaryRecord;
use crate::facade::boundary::{BoundaryStore, StoreError, check_unique_ids, upsert};

/// Read a JSON array of boundary records. A missing file is an empty list.
pub fn read_records(path: &Path) -> Result<Vec<BoundaryRecord>, StoreError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Write records as pretty JSON.
///
/// Data goes to a sibling temp file first and is renamed over `path`, so a
/// reader never sees a half-written file.
pub fn write_records(path: &Path, records: &[BoundaryRecord]) -> Result<(), StoreError> {
    let tmp = temp_path(path);
    {
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Boundary records kept in a single JSON file, rewritten on every write
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<BoundaryRecord>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = read_records(&path)?;
        check_unique_ids(&records)?;
        log::debug!("loaded {} boundaries from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoundaryStore for JsonFileStore {
    fn write(&mut self, record: BoundaryRecord) -> Result<u64, StoreError> {
        let mut next = self.records.clone();
        let id = upsert(&mut next, record)?;
        // Only adopt the new list once it is on disk
        write_records(&self.path, &next)?;
        self.records = next;
        Ok(id)
    }

    fn get(&self, id: u64) -> Option<&BoundaryRecord> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    fn records(&self) -> &[BoundaryRecord] {
        &self.records
    }
}
