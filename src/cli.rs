use std::path::PathBuf;

use clap::Parser;

use crate::repack::RepackOptions;

#[derive(Parser, Debug)]
#[command(name = "epubfix")]
#[command(version)]
#[command(about = "Repair an EPUB that was packed as TAR instead of ZIP", long_about = None)]
#[command(after_help = "Examples:\n  \
  epubfix book.epub                 write the repaired book to book_fixed.epub\n  \
  epubfix book.tar.gz fixed.epub    read a gzip-compressed TAR, write fixed.epub\n  \
  epubfix -q book.epub book.epub    repair in place without progress output")]
pub struct Cli {
    /// TAR-framed EPUB (plain, gzip, bzip2 or xz)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output file (default: INPUT with "_fixed" before the extension)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Quiet mode, only print the result
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Store the mimetype entry uncompressed
    #[arg(long)]
    pub store_mimetype: bool,
}

impl Cli {
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(&self.input)
    }

    /// Explicit output path, or the default derived from the input path.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => PathBuf::from(output),
            None => PathBuf::from(default_output_path(&self.input)),
        }
    }

    pub fn options(&self) -> RepackOptions {
        RepackOptions {
            store_mimetype: self.store_mimetype,
        }
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Insert `_fixed` before the extension of `input`.
///
/// The extension is the part of the final path component from its last dot;
/// leading dots do not start an extension, so `.hidden` has none.
///
/// ```
/// use epubfix::cli::default_output_path;
///
/// assert_eq!(default_output_path("book.epub"), "book_fixed.epub");
/// assert_eq!(default_output_path("books/novel"), "books/novel_fixed");
/// ```
pub fn default_output_path(input: &str) -> String {
    let (base, ext) = split_extension(input);
    format!("{base}_fixed{ext}")
}

fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    let name = &path[name_start..];

    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|b| b != b'.') => {
            path.split_at(name_start + dot)
        }
        _ => (path, ""),
    }
}
