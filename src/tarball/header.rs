/// Size of a TAR header block.
pub const BLOCK_SIZE: usize = 512;

/// Byte range of the checksum field inside a header block.
const CHECKSUM_FIELD: std::ops::Range<usize> = 148..156;

/// Check whether `block` is a TAR header with a matching checksum.
///
/// An all-zero block is an end-of-archive marker, not a header, so a stream
/// starting with one is not accepted. Both the unsigned and the historical
/// signed byte sums are accepted.
pub fn is_valid_header(block: &[u8; BLOCK_SIZE]) -> bool {
    if block.iter().all(|&b| b == 0) {
        return false;
    }

    let mut header = tar::Header::new_old();
    header.as_mut_bytes().copy_from_slice(block);
    let Ok(stored) = header.cksum() else {
        return false;
    };

    let mut unsigned: u32 = 0;
    let mut signed: i32 = 0;
    for (i, &b) in block.iter().enumerate() {
        let b = if CHECKSUM_FIELD.contains(&i) { b' ' } else { b };
        unsigned += u32::from(b);
        signed += i32::from(b as i8);
    }

    stored == unsigned || i64::from(stored) == i64::from(signed)
}
