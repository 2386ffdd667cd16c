//! Dataset catalogs.
//!
//! A catalog maps material identifiers to dataset files in one directory:
//! the identifier `gold` resolves to `<dir>/gold.nk`, a binary table in the
//! layout documented in [`crate::table`]. The file is read fully during
//! construction and released immediately; the resulting model holds no
//! handle on it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::provider::MaterialError;
use crate::table::{self, RawSample};
use crate::tabulated::{ResampleOptions, TabulatedDielectric};

/// Resolves material identifiers to dataset files in a directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    /// A catalog rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this catalog reads from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file a given identifier resolves to.
    #[must_use]
    pub fn dataset_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.nk"))
    }

    /// Read the raw samples for `name`.
    ///
    /// A missing file fails with [`MaterialError::DatasetNotFound`]; any
    /// other I/O failure with [`MaterialError::Io`].
    pub fn samples(&self, name: &str) -> Result<Vec<RawSample>, MaterialError> {
        let path = self.dataset_path(name);
        match fs::read(&path) {
            Ok(bytes) => table::decode_samples(&bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(MaterialError::DatasetNotFound {
                name: name.to_string(),
                path,
            }),
            Err(err) => Err(MaterialError::Io(err)),
        }
    }

    /// Build a resampled model for `name`.
    ///
    /// `unit_scale` is the caller's unit length in micrometres.
    pub fn open(
        &self,
        name: &str,
        unit_scale: f64,
        options: &ResampleOptions,
    ) -> Result<TabulatedDielectric, MaterialError> {
        let samples = self.samples(name)?;
        TabulatedDielectric::from_samples(name, &samples, unit_scale, options)
    }
}
