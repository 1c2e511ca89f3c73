//! GF(2^8) arithmetic modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial 0x11b.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. doubles it) in GF(2^8).
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Leading byte of the round constant `Rcon(k)`, i.e. `x^(k-1)` in GF(2^8).
///
/// `k` starts at 1; `rcon(0)` is not used by the key schedule and is defined
/// as 1 so the doubling loop stays total.
pub fn rcon(k: usize) -> u8 {
    let mut value = 1u8;
    for _ in 1..k {
        value = xtime(value);
    }
    value
}
