use crate::domain::errors::StoreError;
use crate::ports::outbound::{StateRange, WorldState};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::scan_range;

/// File-backed world state for a single local node.
///
/// Every put rewrites the whole file through a temp file and a rename, so a
/// crash leaves either the old or the new contents on disk.
///
/// File format: repeated `[key_len:u32 LE][key][value_len:u32 LE][value]`.
#[derive(Debug)]
pub struct FileBackedWorldState {
    data: BTreeMap<String, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedWorldState {
    /// Open the store at `path`, loading existing contents.
    ///
    /// A missing file opens an empty store. A truncated or non-UTF-8 key
    /// fails with `StoreError::Corruption`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match std::fs::read(&path) {
            Ok(bytes) => {
                let data = decode_entries(&bytes)?;
                info!(
                    "[registry] Loaded {} keys from {} ({} bytes)",
                    data.len(),
                    path.display(),
                    bytes.len()
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("[registry] No existing world state at {}", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { data, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn save_to_file(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = encode_entries(&self.data)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("[registry] Persisted {} keys to {}", self.data.len(), self.path.display());
        Ok(())
    }
}

impl WorldState for FileBackedWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let previous = self.data.insert(key.to_string(), value.to_vec());
        if let Err(e) = self.save_to_file() {
            // Keep memory consistent with disk.
            match previous {
                Some(old) => self.data.insert(key.to_string(), old),
                None => self.data.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<StateRange, StoreError> {
        Ok(scan_range(&self.data, start_key, end_key))
    }
}

fn encode_entries(data: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>, StoreError> {
    let mut bytes = Vec::new();
    for (key, value) in data {
        write_chunk(&mut bytes, key.as_bytes())?;
        write_chunk(&mut bytes, value)?;
    }
    Ok(bytes)
}

fn write_chunk(out: &mut Vec<u8>, chunk: &[u8]) -> Result<(), StoreError> {
    let len = u32::try_from(chunk.len()).map_err(|_| StoreError::Io {
        message: format!("entry of {} bytes exceeds u32 length prefix", chunk.len()),
    })?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(chunk);
    Ok(())
}

fn decode_entries(bytes: &[u8]) -> Result<BTreeMap<String, Vec<u8>>, StoreError> {
    let mut data = BTreeMap::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let key = read_chunk(bytes, &mut cursor)?;
        let value = read_chunk(bytes, &mut cursor)?;
        let key = String::from_utf8(key.to_vec()).map_err(|e| StoreError::Corruption {
            message: format!("non UTF-8 key: {e}"),
        })?;
        data.insert(key, value.to_vec());
    }

    Ok(data)
}

fn read_chunk<'a>(bytes: &'a [u8], cursor: &mut usize) -> Result<&'a [u8], StoreError> {
    let truncated = || StoreError::Corruption {
        message: format!("truncated entry at offset {}", *cursor),
    };

    let prefix: [u8; 4] = bytes
        .get(*cursor..*cursor + 4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(truncated)?;
    let len = u32::from_le_bytes(prefix) as usize;

    let chunk = bytes
        .get(*cursor + 4..*cursor + 4 + len)
        .ok_or_else(truncated)?;
    *cursor += 4 + len;
    Ok(chunk)
}
