use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::Compression;

/// Decoded byte stream over a local input file
pub struct InputStream {
    reader: Box<dyn Read>,
    compression: Compression,
}

impl InputStream {
    /// Open `path` and pick a decoder from its leading bytes.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let mut buffered = BufReader::new(file);
        let compression = Compression::from_magic_bytes(buffered.fill_buf()?);

        Ok(Self {
            reader: compression.decoder(buffered),
            compression,
        })
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

/// Output sink that lands at its target path only on [`OutputFile::commit`].
///
/// Data goes to a temporary file next to the target. Dropping the sink
/// without committing removes the temporary file, so an aborted run never
/// leaves a half-written archive at the target path.
pub struct OutputFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl OutputFile {
    pub fn create(target: &Path) -> io::Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir)?;

        Ok(Self {
            temp,
            target: target.to_path_buf(),
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Flush and atomically move the temporary file onto the target path.
    pub fn commit(mut self) -> io::Result<PathBuf> {
        self.temp.flush()?;
        self.temp.as_file().sync_all()?;

        // Temporary files are created owner-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            self.temp
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }

        self.temp.persist(&self.target).map_err(|e| e.error)?;
        Ok(self.target)
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}

impl Seek for OutputFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.temp.seek(pos)
    }
}
