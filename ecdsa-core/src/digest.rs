//! FIPS 186-4 digest truncation: a message digest wider than the group
//! order is right-shifted down to size before use in sign/verify.

use crate::error::{Error, Result};
use bigint::Integer;

/// Parse `e_hex` as an unsigned hex digest and truncate it to at most
/// `l_n` bits, per FIPS 186-4: if the digest is `L_e` bits wide and
/// `L_e > L_n`, keep only the leftmost `L_n` bits (a right-shift by
/// `L_e - L_n`).
pub fn truncate(e_hex: &str, l_n: u64) -> Result<Integer> {
    if e_hex.is_empty() {
        return Err(Error::MalformedDigest);
    }
    let e = Integer::from_hex(e_hex).map_err(|_| Error::MalformedDigest)?;
    let l_e = 4 * e_hex.len() as u64;
    if l_e > l_n {
        Ok(e.shr(l_e - l_n))
    } else {
        Ok(e)
    }
}
