//! Texture asset loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::{Texture, TextureError};

/// Fatal startup failures for the map asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file is absent or cannot be read as UTF-8 text.
    #[error("Map file '{}' not found.", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a rectangular, non-empty grid.
    #[error("Map file '{}' is invalid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: TextureError,
    },
}

impl AssetError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Follow-up line shown under the error.
    pub fn hint(&self) -> &'static str {
        match self {
            AssetError::Missing { .. } => {
                "Please make sure it exists, or pass its location with --map."
            }
            AssetError::Invalid { .. } => "Every line of the map must have the same width.",
        }
    }
}

/// Read and validate the map at `path`.
pub fn load_texture(path: &Path) -> Result<Texture, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    let texture = Texture::parse(&text).map_err(|source| AssetError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        width = texture.width(),
        height = texture.height(),
        "map loaded"
    );
    Ok(texture)
}
