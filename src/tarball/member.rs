/// Kind of an archived object, as far as repackaging cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    File,
    Directory,
    /// Symlinks, hard links, devices, FIFOs
    Other,
}

impl MemberKind {
    /// Classify a member from its raw typeflag byte and stored name.
    ///
    /// Old-style archives mark regular files with a NUL typeflag and use a
    /// trailing `/` on the name to denote a directory.
    pub fn from_typeflag(typeflag: u8, name: &str) -> Self {
        match typeflag {
            b'\0' if name.ends_with('/') => MemberKind::Directory,
            // regular, contiguous, GNU sparse
            b'\0' | b'0' | b'7' | b'S' => MemberKind::File,
            b'5' => MemberKind::Directory,
            _ => MemberKind::Other,
        }
    }
}

/// One member read from a TAR stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarMember {
    /// Slash-separated path as stored (directories without trailing `/`)
    pub path: String,
    pub kind: MemberKind,
    /// File content; empty for anything but [`MemberKind::File`]
    pub data: Vec<u8>,
}

impl TarMember {
    pub fn is_file(&self) -> bool {
        self.kind == MemberKind::File
    }

    /// Final path segment.
    pub fn base_name(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.path,
        }
    }
}
