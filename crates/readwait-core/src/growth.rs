//! # File-Growth Oracle
//!
//! Queries the current on-disk size of the watched file. The dispatcher
//! consults it to decide whether a pending read may proceed or must stall.

use std::path::{Path, PathBuf};

use nix::errno::Errno;
use nix::sys::stat;

use crate::error::SizeQueryError;

/// Source of "how big is the watched file right now" answers
///
/// The production implementation is [`FileSizeOracle`]; tests script the
/// answers to drive the stall policy through every branch.
pub trait GrowthSource
{
    /// Current size of the watched file in bytes.
    ///
    /// ## Errors
    ///
    /// [`SizeQueryError::Missing`] when the file is absent (deleted or
    /// rotated away), [`SizeQueryError::Failed`] for any other stat
    /// failure. Callers treat either as "no growth observed" rather than
    /// aborting; the distinction exists for diagnostics.
    fn current_size(&mut self) -> std::result::Result<u64, SizeQueryError>;
}

/// stat(2)-backed oracle for a fixed path
#[derive(Debug, Clone)]
pub struct FileSizeOracle
{
    path: PathBuf,
}

impl FileSizeOracle
{
    /// Create an oracle for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self
    {
        Self { path: path.into() }
    }

    /// The path this oracle queries.
    pub fn path(&self) -> &Path
    {
        &self.path
    }
}

impl GrowthSource for FileSizeOracle
{
    fn current_size(&mut self) -> std::result::Result<u64, SizeQueryError>
    {
        match stat::stat(&self.path) {
            // st_size is signed; a regular file never reports negative
            Ok(st) => Ok(st.st_size.max(0) as u64),
            Err(Errno::ENOENT) => Err(SizeQueryError::Missing),
            Err(errno) => Err(SizeQueryError::Failed(errno)),
        }
    }
}
