//! # epubfix
//!
//! Repairs EPUB files that were mistakenly archived with TAR framing
//! instead of ZIP framing.
//!
//! The input TAR (optionally gzip, bzip2 or xz compressed) is read in one pass.
//! The package root is located through its `mimetype` file, any directory
//! prefix above it is stripped, and every regular file is written to a new
//! deflate-compressed ZIP archive in its original order.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), epubfix::RepackError> {
//!     let report = epubfix::repackage(Path::new("book.epub"), Path::new("book_fixed.epub"))?;
//!     for name in &report.entries {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod package;
pub mod repack;
pub mod tarball;

pub use cli::Cli;
pub use error::{ErrorKind, RepackError};
pub use repack::{Progress, RepackOptions, RepackReport, Repackager, repackage};
