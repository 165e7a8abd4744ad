use std::io::{Seek, Write};

use zip::result::ZipResult;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::root::MIMETYPE;

/// ZIP container writer for EPUB packages.
///
/// Entries are deflated. With `store_mimetype` set, an entry named exactly
/// `mimetype` is stored uncompressed as the OCF container format asks for.
/// No directory entries are ever written.
pub struct EpubWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    store_mimetype: bool,
}

impl<W: Write + Seek> EpubWriter<W> {
    pub fn new(inner: W, store_mimetype: bool) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            store_mimetype,
        }
    }

    /// Compression method used for an entry called `name`.
    pub fn method_for(&self, name: &str) -> CompressionMethod {
        if self.store_mimetype && name == MIMETYPE {
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        }
    }

    /// Write one file entry.
    pub fn add_file(&mut self, name: &str, data: &[u8]) -> ZipResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(self.method_for(name))
            .large_file(data.len() as u64 >= u64::from(u32::MAX));

        self.zip.start_file(name, options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    /// Write the central directory and hand back the underlying writer.
    pub fn finish(self) -> ZipResult<W> {
        self.zip.finish()
    }
}
