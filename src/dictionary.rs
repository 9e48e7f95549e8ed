//! Word-list sourcing: plain files, or a payload packed onto an executable.
//!
//! Packed layout (little endian):
//! - the original executable bytes, `start` of them
//! - the word list
//! - u64: `start`
//!
//! The packed binary runs unchanged; the trailer lets it find its own word list.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use thiserror::Error;

const TRAILER_SIZE: u64 = std::mem::size_of::<u64>() as u64;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} has no packed word list (no trailer in its {len} bytes)")]
    MissingTrailer { path: PathBuf, len: u64 },
    #[error("{path} has a corrupt word list trailer: start {start} is past {end}")]
    CorruptTrailer { path: PathBuf, start: u64, end: u64 },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> DictionaryError + '_ {
    move |source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a newline-separated word list from a plain file.
pub fn read_file(path: &Path) -> Result<Vec<u8>, DictionaryError> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    log::info!("read {} bytes of words from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Reads the word list packed onto the end of `path`.
///
/// A trailer offset of zero would make the whole file its own word list;
/// it is what zero padding at the end of an unpacked binary looks like, so
/// it counts as no trailer at all.
pub fn read_payload(path: &Path) -> Result<Vec<u8>, DictionaryError> {
    let mut file = File::open(path).map_err(io_error(path))?;
    let len = file.metadata().map_err(io_error(path))?.len();
    if len < TRAILER_SIZE {
        return Err(DictionaryError::MissingTrailer {
            path: path.to_path_buf(),
            len,
        });
    }

    let end = len - TRAILER_SIZE;
    let mut trailer = [0u8; TRAILER_SIZE as usize];
    file.seek(SeekFrom::Start(end)).map_err(io_error(path))?;
    file.read_exact(&mut trailer).map_err(io_error(path))?;
    let start = u64::from_le_bytes(trailer);
    if start == 0 {
        return Err(DictionaryError::MissingTrailer {
            path: path.to_path_buf(),
            len,
        });
    }
    if start > end {
        return Err(DictionaryError::CorruptTrailer {
            path: path.to_path_buf(),
            start,
            end,
        });
    }

    let mut payload = vec![0u8; (end - start) as usize];
    file.seek(SeekFrom::Start(start)).map_err(io_error(path))?;
    file.read_exact(&mut payload).map_err(io_error(path))?;
    log::info!(
        "read {} bytes of packed words from {}",
        payload.len(),
        path.display()
    );
    Ok(payload)
}

/// Reads the word list packed onto the running executable.
pub fn read_embedded() -> Result<Vec<u8>, DictionaryError> {
    let exe = std::env::current_exe().map_err(io_error(Path::new("current executable")))?;
    read_payload(&exe)
}

/// Packs `words` onto the end of `executable` so [`read_payload`] finds it.
pub fn append_payload(executable: &Path, words: &[u8]) -> Result<(), DictionaryError> {
    let mut packed = fs::read(executable).map_err(io_error(executable))?;
    let start = packed.len() as u64;
    packed.extend_from_slice(words);
    packed.extend_from_slice(&start.to_le_bytes());
    fs::write(executable, &packed).map_err(io_error(executable))?;
    log::info!(
        "packed {} bytes of words onto {} at offset {start}",
        words.len(),
        executable.display()
    );
    Ok(())
}
