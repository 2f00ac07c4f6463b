//! billfold-storage-json
//!
//! Filesystem-backed JSON persistence for the bill collection: one
//! pretty-printed array in `bills.json` under the data directory, the
//! single-key layout the store expects from its persistence port.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use billfold_core::{BillStorage, CoreError};
use billfold_domain::Bill;

const BILLS_FILE: &str = "bills.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON snapshot persistence implementing [`BillStorage`].
///
/// Saves write a `.tmp` sibling first and rename it over the target, so an
/// interrupted write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonBillStorage {
    data_dir: PathBuf,
}

impl JsonBillStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn bills_path(&self) -> PathBuf {
        self.data_dir.join(BILLS_FILE)
    }
}

impl BillStorage for JsonBillStorage {
    fn load(&self) -> Result<Option<Vec<Bill>>, CoreError> {
        let path = self.bills_path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        let bills =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        Ok(Some(bills))
    }

    fn save(&self, bills: &[Bill]) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(bills)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let path = self.bills_path();
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Default data directory, e.g. `~/.local/share/billfold` on Linux.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join("billfold"))
        .unwrap_or_else(|| PathBuf::from(".billfold"))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
