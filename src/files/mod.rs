use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure reading or writing one of the input/output files. Every variant
/// names the file it concerns.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Toml { path: PathBuf, source: toml::de::Error },
    TomlSerialize { path: PathBuf, source: toml::ser::Error },
    Json { path: PathBuf, source: SerdeJsonError },
    Csv { path: PathBuf, source: csv::Error },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Toml { path, .. }
            | LoadError::TomlSerialize { path, .. }
            | LoadError::Json { path, .. }
            | LoadError::Csv { path, .. } => path,
        }
    }

    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self {
        move |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn toml(path: &Path) -> impl FnOnce(toml::de::Error) -> Self {
        move |source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn toml_serialize(path: &Path) -> impl FnOnce(toml::ser::Error) -> Self {
        move |source| LoadError::TomlSerialize {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path) -> impl FnOnce(SerdeJsonError) -> Self {
        move |source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path) -> impl FnOnce(csv::Error) -> Self {
        move |source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path().display();
        match self {
            LoadError::Io { source, .. } => write!(f, "{path}: io error: {source}"),
            LoadError::Toml { source, .. } => write!(f, "{path}: toml parse error: {source}"),
            LoadError::TomlSerialize { source, .. } => {
                write!(f, "{path}: toml serialization error: {source}")
            }
            LoadError::Json { source, .. } => write!(f, "{path}: json error: {source}"),
            LoadError::Csv { source, .. } => write!(f, "{path}: csv error: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Toml { source, .. } => Some(source),
            LoadError::TomlSerialize { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
            LoadError::Csv { source, .. } => Some(source),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Input file layout, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
    Csv,
}

impl FileFormat {
    /// Anything that is not `.json` or `.csv` is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => FileFormat::Json,
            Some("csv") => FileFormat::Csv,
            _ => FileFormat::Toml,
        }
    }
}

pub mod input;
pub mod output;

pub use input::{load_holidays, load_templates, save_holidays};
pub use output::{write_rows, write_rows_to_path};
