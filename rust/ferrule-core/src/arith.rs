//! Integer arithmetic operations.

/// Add one to `a`.
///
/// Overflow at `i32::MAX` wraps around to `i32::MIN`; there is no error
/// signaling on this path.
pub fn increment(a: i32) -> i32 {
    a.wrapping_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_by_one() {
        assert_eq!(increment(5), 6);
        assert_eq!(increment(0), 1);
        assert_eq!(increment(-1), 0);
        assert_eq!(increment(999), 1000);
    }

    #[test]
    fn wraps_at_max() {
        assert_eq!(increment(i32::MAX), i32::MIN);
    }
}
