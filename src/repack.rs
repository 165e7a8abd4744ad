//! The repackaging pass: TAR members in, EPUB ZIP container out.
//!
//! ## Steps
//!
//! 1. Check and enumerate the input TAR (gzip/bzip2/xz wrappers are detected)
//! 2. Find the first `mimetype` member and derive the root prefix from it
//! 3. Write every regular file, prefix stripped, into a deflated ZIP
//! 4. Move the finished ZIP onto the output path
//!
//! Nothing is created at the output path unless step 3 completes, so a run
//! that fails on a non-TAR input or a missing `mimetype` leaves no file.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RepackError;
use crate::io::OutputFile;
use crate::package::{EpubWriter, RootPrefix};
use crate::tarball::{TarMember, read_tar_file};

/// Options for a repackaging run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepackOptions {
    /// Store the top-level `mimetype` entry uncompressed.
    pub store_mimetype: bool,
}

/// Progress notifications emitted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The package root is nested under this prefix, which will be stripped
    RootDetected(&'a str),
    /// `mimetype` is already at the top level
    AlreadyAtRoot,
    /// The output archive is being written
    Writing(&'a Path),
    /// An entry was written under this name
    Added(&'a str),
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepackReport {
    /// Path the fixed archive was written to
    pub output: PathBuf,
    /// Stripped root prefix (empty if none)
    pub root_prefix: String,
    /// Entry names in the order they were written
    pub entries: Vec<String>,
    /// Members not copied: directories, links and devices
    pub skipped: usize,
}

/// Converts TAR-framed EPUB files into ZIP-framed ones.
pub struct Repackager<'a> {
    options: RepackOptions,
    progress: Option<Box<dyn FnMut(Progress<'_>) + 'a>>,
}

impl<'a> Repackager<'a> {
    pub fn new(options: RepackOptions) -> Self {
        Self {
            options,
            progress: None,
        }
    }

    /// Register a callback receiving [`Progress`] events.
    pub fn on_progress(mut self, callback: impl FnMut(Progress<'_>) + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Repackage `input` into `output`.
    ///
    /// `output` is replaced if it exists; it may be the same path as `input`
    /// since the input is fully read and closed before anything is written.
    pub fn run(&mut self, input: &Path, output: &Path) -> Result<RepackReport, RepackError> {
        info!("Opening TAR: {}", input.display());
        let members = read_tar_file(input)?;

        let root = RootPrefix::detect(&members).ok_or_else(|| RepackError::MissingMimetype {
            path: input.to_path_buf(),
        })?;

        if root.is_empty() {
            info!("Package files are already at the root level");
            self.emit(Progress::AlreadyAtRoot);
        } else {
            info!("Detected root directory: {} (it will be stripped)", root.as_str());
            self.emit(Progress::RootDetected(root.as_str()));
        }

        let selected = select_files(&members, &root)?;

        let sink = OutputFile::create(output)?;
        info!("Creating ZIP: {}", sink.target().display());
        self.emit(Progress::Writing(sink.target()));

        let mut writer = EpubWriter::new(sink, self.options.store_mimetype);
        let mut entries = Vec::with_capacity(selected.len());

        for (member, name) in &selected {
            writer.add_file(name, &member.data)?;
            info!("  + {}", name);
            self.emit(Progress::Added(name));
            entries.push(name.to_string());
        }

        let output = writer.finish()?.commit()?;
        info!("Fixed file saved at: {}", output.display());

        Ok(RepackReport {
            output,
            root_prefix: root.as_str().to_string(),
            skipped: members.len() - entries.len(),
            entries,
        })
    }

    fn emit(&mut self, event: Progress<'_>) {
        if let Some(callback) = self.progress.as_mut() {
            callback(event);
        }
    }
}

/// Repackage `input` into `output` with default options.
pub fn repackage(input: &Path, output: &Path) -> Result<RepackReport, RepackError> {
    Repackager::new(RepackOptions::default()).run(input, output)
}

/// Regular files to copy, paired with their archive names, in stored order.
///
/// A ZIP cannot hold two entries with the same name, so two members mapping
/// to one archive name fail the run.
fn select_files<'m>(
    members: &'m [TarMember],
    root: &RootPrefix,
) -> Result<Vec<(&'m TarMember, &'m str)>, RepackError> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();

    for member in members.iter().filter(|m| m.is_file()) {
        let name = root.strip(&member.path);
        if !seen.insert(name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("duplicate entry name '{}' (from member '{}')", name, member.path),
            )
            .into());
        }
        selected.push((member, name));
    }

    Ok(selected)
}
