//! Bit primitives the rest of the engine is built on.

/// Shift `x` left by `amount` when it is non-negative, right otherwise.
/// Always a logical shift.
#[inline]
#[must_use]
pub const fn signed_shift(x: u64, amount: i32) -> u64 {
    if amount >= 0 {
        x << amount
    } else {
        x >> -amount
    }
}

/// Returns true if `a` and `b` share any set bit.
#[inline]
#[must_use]
pub const fn intersects(a: u64, b: u64) -> bool {
    a & b != 0
}

/// Isolate the least-significant set bit of `x` (zero stays zero).
#[inline]
#[must_use]
pub const fn lsb(x: u64) -> u64 {
    x & x.wrapping_neg()
}

/// Bit position of a single-bit mask (its number of trailing zeros).
#[inline]
#[must_use]
pub const fn bit_index(mask: u64) -> usize {
    mask.trailing_zeros() as usize
}
