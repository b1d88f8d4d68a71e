//! Writing and reading run artifacts.
//!
//! Every file is first written to a hidden sibling path and renamed into place
//! only once complete. [`OutputBatch`] extends this to a whole run: all
//! artifacts are staged first and published together, so a failure part way
//! through leaves none of them behind.

use crate::errors::{CorrelationError, CorrelationResult};
use crate::results::ResultsFile;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Hidden sibling of `path` that keeps its extension, e.g.
/// `data/.1234.tmp.analysis_results.json`.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp.{}", std::process::id(), file_name))
}

fn serialization_error(err: serde_json::Error) -> CorrelationError {
    CorrelationError::SerializationError {
        format: "JSON".to_string(),
        reason: err.to_string(),
    }
}

/// A file written to a temporary sibling path, awaiting [`StagedFile::commit`].
///
/// Dropping an uncommitted stage removes the temporary file.
#[derive(Debug)]
pub struct StagedFile {
    target: PathBuf,
    temp: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Reserve a temporary path for `target`, creating missing parent
    /// directories.
    pub fn new(target: &Path) -> CorrelationResult<Self> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CorrelationError::io(format!("create directory {}", parent.display()), e)
            })?;
        }
        Ok(Self {
            target: target.to_path_buf(),
            temp: temp_path_for(target),
            committed: false,
        })
    }

    /// Where the content must be written before committing
    pub fn temp_path(&self) -> &Path {
        &self.temp
    }

    /// Final location
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the temporary file over the target.
    pub fn commit(mut self) -> CorrelationResult<PathBuf> {
        fs::rename(&self.temp, &self.target).map_err(|e| {
            CorrelationError::io(format!("rename into {}", self.target.display()), e)
        })?;
        self.committed = true;
        Ok(self.target.clone())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match fs::remove_file(&self.temp) {
            Ok(()) => log::debug!("discarded {}", self.temp.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("could not remove {}: {}", self.temp.display(), e),
        }
    }
}

/// Artifacts of one run, published together by [`OutputBatch::commit`].
///
/// Nothing reaches its final path until every file has been staged. Dropping
/// the batch without committing discards all staged files.
#[derive(Debug, Default)]
pub struct OutputBatch {
    staged: Vec<StagedFile>,
}

impl OutputBatch {
    /// Empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a file whose content is produced by `write`, which receives the
    /// temporary path.
    pub fn stage_with<F>(&mut self, target: &Path, write: F) -> CorrelationResult<()>
    where
        F: FnOnce(&Path) -> CorrelationResult<()>,
    {
        let staged = StagedFile::new(target)?;
        write(staged.temp_path())?;
        log::debug!("staged {}", staged.target().display());
        self.staged.push(staged);
        Ok(())
    }

    /// Stage `value` as pretty JSON at `target`.
    pub fn stage_json<T: Serialize>(&mut self, target: &Path, value: &T) -> CorrelationResult<()> {
        self.stage_with(target, |temp| write_json_to(temp, value))
    }

    /// Number of staged files
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// True when nothing is staged
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Move every staged file into place, in staging order.
    ///
    /// Returns the final paths. If a rename fails, the files not yet renamed
    /// are discarded.
    pub fn commit(self) -> CorrelationResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.staged.len());
        for staged in self.staged {
            written.push(staged.commit()?);
        }
        Ok(written)
    }
}

/// Serialize `value` as pretty JSON (2-space indent) and atomically replace `path`.
///
/// Missing parent directories are created. Any existing file is overwritten.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> CorrelationResult<()> {
    let staged = StagedFile::new(path)?;
    write_json_to(staged.temp_path(), value)?;
    staged.commit().map(|_| ())
}

fn write_json_to<T: Serialize>(path: &Path, value: &T) -> CorrelationResult<()> {
    let file = File::create(path)
        .map_err(|e| CorrelationError::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(serialization_error)?;
    writer
        .flush()
        .map_err(|e| CorrelationError::io(format!("flush {}", path.display()), e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CorrelationError::io(format!("sync {}", path.display()), e))
}

/// Read a JSON document written by [`write_json_atomic`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CorrelationResult<T> {
    let file =
        File::open(path).map_err(|e| CorrelationError::io(format!("open {}", path.display()), e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(serialization_error)
}

/// Persist the results file, replacing any previous run.
pub fn save_results(path: &Path, results: &ResultsFile) -> CorrelationResult<()> {
    write_json_atomic(path, results)?;
    log::info!("results saved to {}", path.display());
    Ok(())
}

/// Load a previously saved results file.
pub fn load_results(path: &Path) -> CorrelationResult<ResultsFile> {
    read_json(path)
}
