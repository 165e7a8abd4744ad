#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builds TAR fixtures member by member.
pub struct TarFixture {
    builder: tar::Builder<Vec<u8>>,
}

impl TarFixture {
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    pub fn file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        self.builder
            .append_data(&mut header, path, data)
            .unwrap_or_else(|error| panic!("appending {path:?} failed, because {error:?}"));
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o755);
        header.set_entry_type(tar::EntryType::Directory);
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap_or_else(|error| panic!("appending {path:?} failed, because {error:?}"));
        self
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o777);
        header.set_entry_type(tar::EntryType::Symlink);
        self.builder
            .append_link(&mut header, path, target)
            .unwrap_or_else(|error| panic!("appending {path:?} failed, because {error:?}"));
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    pub fn into_gzip(self) -> Vec<u8> {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&self.into_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    pub fn into_xz(self) -> Vec<u8> {
        let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
        encoder.write_all(&self.into_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    pub fn into_bzip2(self) -> Vec<u8> {
        let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
        encoder.write_all(&self.into_bytes()).unwrap();
        encoder.finish().unwrap()
    }
}

/// The three-file book used across tests, nested under `MyBook/`.
pub fn sample_book() -> TarFixture {
    TarFixture::new()
        .file("MyBook/mimetype", b"application/epub+zip")
        .file(
            "MyBook/META-INF/container.xml",
            b"<?xml version=\"1.0\"?><container/>",
        )
        .file("MyBook/content.opf", b"<package version=\"3.0\"/>")
}

pub fn write_input(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data)
        .unwrap_or_else(|error| panic!("writing {path:?} failed, because {error:?}"));
    path
}

/// Entry names and contents of a ZIP file, in central directory order.
pub fn read_zip(path: &Path) -> Vec<(String, Vec<u8>)> {
    let data = std::fs::read(path)
        .unwrap_or_else(|error| panic!("reading {path:?} failed, because {error:?}"));
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();

    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            (entry.name().to_string(), content)
        })
        .collect()
}

pub fn zip_names(path: &Path) -> Vec<String> {
    read_zip(path).into_iter().map(|(name, _)| name).collect()
}
