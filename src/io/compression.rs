use std::fmt;
use std::io::Read;

use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use xz2::read::XzDecoder;

/// Compression wrapper around a TAR stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Plain TAR framing
    None,
    /// gzip (`.tar.gz`, `.tgz`)
    Gzip,
    /// bzip2 (`.tar.bz2`)
    Bzip2,
    /// xz (`.tar.xz`)
    Xz,
}

impl Compression {
    /// Detect the wrapper from the first bytes of a stream.
    ///
    /// Magic bytes:
    /// - gzip: `1f 8b`
    /// - bzip2: `42 5a 68` ("BZh")
    /// - xz: `fd 37 7a 58 5a 00` (FD + "7zXZ" + NUL)
    ///
    /// Anything else is treated as uncompressed; whether it really is TAR is
    /// decided later by the header check.
    pub fn from_magic_bytes(data: &[u8]) -> Self {
        match data {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            [b'B', b'Z', b'h', ..] => Compression::Bzip2,
            [0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00, ..] => Compression::Xz,
            _ => Compression::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Bzip2 => "bzip2",
            Compression::Xz => "xz",
        }
    }

    /// Wrap `reader` in the matching decoder.
    pub fn decoder<'a, R: Read + 'a>(self, reader: R) -> Box<dyn Read + 'a> {
        match self {
            Compression::None => Box::new(reader),
            Compression::Gzip => Box::new(MultiGzDecoder::new(reader)),
            Compression::Bzip2 => Box::new(BzDecoder::new(reader)),
            // Concatenated .xz streams, like xz(1) accepts
            Compression::Xz => Box::new(XzDecoder::new_multi_decoder(reader)),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
