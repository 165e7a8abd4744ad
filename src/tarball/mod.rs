//! TAR framing: header probing and member enumeration.
//!
//! ## Format Overview
//!
//! A TAR stream is a sequence of 512-byte header blocks, each followed by
//! the member's content padded to a block boundary, terminated by two zero
//! blocks. There is no central index, so the whole stream is walked once
//! and every member (with file content) is collected in memory.
//!
//! Recognition follows the usual rule: the first block must be a header
//! whose checksum field matches the sum of its bytes.

mod header;
mod member;
mod reader;

pub use header::{BLOCK_SIZE, is_valid_header};
pub use member::{MemberKind, TarMember};
pub use reader::{read_members, read_tar_file};
