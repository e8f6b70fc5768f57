use std::{fs::File, path::Path, result};

use serde::{Deserialize, Serialize};

use crate::error::MerkleTreeError;

pub type Result<T> = result::Result<T, MerkleTreeError>;

/// Represents a single entry in a CSV
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CsvEntry {
    /// Pubkey of the claimant; will be responsible for signing the claim
    pub pubkey: String,
    /// Cumulative amount, in base units of the mint
    pub amount: u64,
}

impl CsvEntry {
    pub fn new_from_file(path: &Path) -> Result<Vec<Self>> {
        let file = File::open(path)?;
        let mut rdr = csv::Reader::from_reader(file);

        let mut entries = Vec::new();
        for result in rdr.deserialize() {
            let record: CsvEntry = result?;
            entries.push(record);
        }

        Ok(entries)
    }

    pub fn write_to_file(entries: &[Self], path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for entry in entries {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
