//! Where an input comes from and how its bytes are loaded.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Maximum input size (100 MB default).
pub const MAX_INPUT_SIZE: u64 = 100 * 1024 * 1024;

/// An input file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` means standard input, anything else is a path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(arg.to_path_buf())
        }
    }

    /// File stem used to prefix output names (`stdin` for standard input).
    pub fn stem(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "input".to_string()),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Reads the whole input, refusing anything larger than `max_size`.
    pub fn read_bytes(&self, max_size: u64) -> Result<Vec<u8>> {
        match self {
            Self::Path(path) => read_file_bytes(path, max_size),
            Self::Stdin => read_limited(io::stdin().lock(), &self.to_string(), max_size),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

fn read_file_bytes(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let source_name = path.display().to_string();
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                source_name: source_name.clone(),
            }
        } else {
            IngestError::Read {
                source_name: source_name.clone(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            source_name,
            size: metadata.len(),
            max_size,
        });
    }

    std::fs::read(path).map_err(|e| IngestError::Read {
        source_name,
        source: e,
    })
}

/// Reads at most `max_size` bytes from `reader`; one byte more is an error.
pub fn read_limited<R: Read>(reader: R, source_name: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| IngestError::Read {
            source_name: source_name.to_string(),
            source: e,
        })?;
    let size = buffer.len() as u64;
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            source_name: source_name.to_string(),
            size,
            max_size,
        });
    }
    Ok(buffer)
}
