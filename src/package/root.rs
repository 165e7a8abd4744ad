use crate::tarball::TarMember;

/// Name of the marker file at the root of every EPUB package.
pub const MIMETYPE: &str = "mimetype";

/// Directory prefix shared by the package files, with a trailing `/`.
///
/// Empty when `mimetype` sits at the top level of the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootPrefix(String);

impl RootPrefix {
    /// Find the prefix from the first member named `mimetype`, at any depth.
    ///
    /// Returns `None` if no member has that base name.
    pub fn detect(members: &[TarMember]) -> Option<Self> {
        members
            .iter()
            .find(|m| m.base_name() == MIMETYPE)
            .map(|m| Self::from_marker_path(&m.path))
    }

    /// Prefix for a marker stored at `path`.
    pub fn from_marker_path(path: &str) -> Self {
        let mut prefix = dirname(path).to_string();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        RootPrefix(prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Archive name for `path`: the path minus the prefix when it starts with
    /// it, otherwise the path unchanged.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(self.0.as_str()).unwrap_or(path)
    }
}

/// Directory part of a `/`-separated path.
///
/// Redundant trailing slashes are dropped unless the directory is made of
/// slashes only, so `a//mimetype` gives `a` and `/mimetype` gives `/`.
fn dirname(path: &str) -> &str {
    let Some(idx) = path.rfind('/') else {
        return "";
    };
    let head = &path[..=idx];
    let trimmed = head.trim_end_matches('/');
    if trimmed.is_empty() { head } else { trimmed }
}
