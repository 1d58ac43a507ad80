use crate::source::Module;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed source module {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_module(path: impl AsRef<Path>) -> Result<Module, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Module::from_json(&json).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_module(module: &Module, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(module)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)
}
