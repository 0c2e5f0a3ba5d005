//! Environment probe: does the project wrapper exist in the working directory?

use std::path::{Path, PathBuf};

use crate::config::WrapperConfig;

/// Answers whether the project wrapper entry point is present.
///
/// A probe that cannot tell must answer `false`.
pub trait Probe {
    fn wrapper_present(&self) -> bool;
}

impl<F> Probe for F
where
    F: Fn() -> bool,
{
    fn wrapper_present(&self) -> bool {
        self()
    }
}

/// Filesystem probe, checked relative to the current working directory.
#[derive(Debug, Clone)]
pub struct FsProbe {
    path: PathBuf,
}

impl FsProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &WrapperConfig) -> Self {
        Self::new(config.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Probe for FsProbe {
    fn wrapper_present(&self) -> bool {
        if self.path.as_os_str().is_empty() {
            return false;
        }
        match self.path.try_exists() {
            Ok(present) => {
                log::debug!("wrapper {} present: {present}", self.path.display());
                present
            }
            Err(e) => {
                log::debug!("cannot probe {}: {e}; treating as absent", self.path.display());
                false
            }
        }
    }
}
