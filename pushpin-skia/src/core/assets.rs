use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use skia_safe::{Data, Image};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("cannot read {path:?}: {source}")]
    Missing {
        path: PathBuf,
        source: io::Error,
    },

    #[error("cannot decode image {path:?}")]
    Decode { path: PathBuf },
}

pub fn load_image(path: impl AsRef<Path>) -> Result<Image, AssetLoadError> {
    let path = path.as_ref();
    log::debug!("Loading image {:?}", path);

    let bytes = fs::read(path).map_err(|source| AssetLoadError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    let data = Data::new_copy(&bytes);
    Image::from_encoded(data).ok_or_else(|| AssetLoadError::Decode {
        path: path.to_path_buf(),
    })
}
