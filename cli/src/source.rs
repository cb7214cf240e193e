use std::{fs::File, io::Read, path::Path};

use log::debug;

use crate::error::ConvertError;

/// Read the whole file at `path` into memory.
///
/// The handle is closed before returning, on success and on failure.
pub fn read_binary(path: &Path) -> Result<Vec<u8>, ConvertError> {
    let mut file = File::open(path).map_err(|e| ConvertError::from_open_error(path, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}
