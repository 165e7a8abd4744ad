//! Input and output handles for a repackaging run.
//!
//! The input side sniffs the compression wrapper of a file and exposes a
//! plain decoded byte stream; the output side is a write-then-rename sink so
//! a destination path only ever holds a finished archive.

mod compression;
mod local;

pub use compression::Compression;
pub use local::{InputStream, OutputFile};
