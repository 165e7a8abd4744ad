use std::io::{self, Cursor, Read};
use std::path::Path;

use tar::Archive;
use tracing::debug;

use crate::error::RepackError;
use crate::io::{Compression, InputStream};

use super::header::{BLOCK_SIZE, is_valid_header};
use super::member::{MemberKind, TarMember};

/// Upper bound on the buffer reserved up front for one member's content.
const MAX_PREALLOC: u64 = 1 << 20;

/// Open `path` as a (possibly compressed) TAR stream and collect its members.
///
/// The first block is checked before anything else is read. Input that does
/// not start with a valid TAR header, including input whose compression
/// wrapper cannot be decoded, fails with [`RepackError::NotATarFile`].
/// Failures after that check are I/O errors.
pub fn read_tar_file(path: &Path) -> Result<Vec<TarMember>, RepackError> {
    let mut input = InputStream::open(path)?;
    debug!(
        "Opened {} (compression: {})",
        path.display(),
        input.compression()
    );

    let not_tar = || RepackError::NotATarFile {
        path: path.to_path_buf(),
    };

    let mut block = [0u8; BLOCK_SIZE];
    match read_block(&mut input, &mut block) {
        Ok(true) => {}
        Ok(false) => {
            debug!("Input shorter than one TAR block");
            return Err(not_tar());
        }
        Err(e) if input.compression() != Compression::None || is_decode_error(&e) => {
            debug!("Failed to decode input: {}", e);
            return Err(not_tar());
        }
        Err(e) => return Err(e.into()),
    }

    if !is_valid_header(&block) {
        debug!("First block is not a TAR header");
        return Err(not_tar());
    }

    // Put the checked block back in front of the rest of the stream
    let stream = Cursor::new(block).chain(input);
    Ok(read_members(stream)?)
}

/// Read every member of a TAR stream, in stored order.
///
/// Content is read for regular files only. GNU long-name and PAX path
/// records are folded into the member they describe.
pub fn read_members<R: Read>(reader: R) -> io::Result<Vec<TarMember>> {
    let mut archive = Archive::new(reader);
    let mut members = Vec::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let typeflag = entry.header().as_bytes()[156];
        let raw_path = String::from_utf8(entry.path_bytes().into_owned()).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "member path is not valid UTF-8: {}",
                    String::from_utf8_lossy(e.as_bytes())
                ),
            )
        })?;
        let kind = MemberKind::from_typeflag(typeflag, &raw_path);

        let path = match kind {
            MemberKind::Directory => trim_directory_name(raw_path),
            _ => raw_path,
        };

        let data = if kind == MemberKind::File {
            let expected = entry.size();
            // Size fields are untrusted; let the buffer grow past this
            let mut data = Vec::with_capacity(expected.min(MAX_PREALLOC) as usize);
            entry.read_to_end(&mut data)?;
            // Sparse members expand beyond their stored size
            if typeflag != b'S' && (data.len() as u64) < expected {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("member {} is truncated", path),
                ));
            }
            data
        } else {
            Vec::new()
        };

        debug!("Member {} ({:?}, {} bytes)", path, kind, data.len());
        members.push(TarMember { path, kind, data });
    }

    Ok(members)
}

/// Fill `block` completely. Returns `false` if the stream ends first.
fn read_block<R: Read>(reader: &mut R, block: &mut [u8; BLOCK_SIZE]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < BLOCK_SIZE {
        match reader.read(&mut block[filled..]) {
            Ok(0) => return Ok(false),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}

/// Errors a decompressor reports for malformed input.
fn is_decode_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput | io::ErrorKind::UnexpectedEof
    )
}

fn trim_directory_name(path: String) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        path
    } else {
        trimmed.to_string()
    }
}
