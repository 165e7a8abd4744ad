//! EPUB package layout: locating the package root and writing the ZIP
//! container.
//!
//! An EPUB's root is the directory holding the `mimetype` file. Archives
//! packed from a parent directory carry that directory as a prefix on every
//! path; [`RootPrefix`] finds it and strips it so the output container has
//! `mimetype` at its top level.

mod root;
mod writer;

pub use root::{MIMETYPE, RootPrefix};
pub use writer::EpubWriter;
