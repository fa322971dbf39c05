/// Reduces `n` into the canonical range `[0, modulus)`.
///
/// The input is `i128` so callers can pass raw differences and sums of
/// `i64` values without wrapping.
pub(crate) fn reduce(n: i128, modulus: i64) -> i64 {
    let m = modulus as i128;
    let r = n % m;
    if r < 0 {
        (r + m) as i64
    } else {
        r as i64
    }
}

/// Multiplies two residues mod `modulus`, widening to `i128` so the
/// intermediate product cannot overflow for any `i64` modulus.
pub(crate) fn mul_mod(lhs: i64, rhs: i64, modulus: i64) -> i64 {
    reduce(lhs as i128 * rhs as i128, modulus)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reduce_normalizes_negatives() {
        assert_eq!(reduce(-1, 97), 96);
        assert_eq!(reduce(-97, 97), 0);
        assert_eq!(reduce(-98, 97), 96);
        assert_eq!(reduce(0, 97), 0);
        assert_eq!(reduce(96, 97), 96);
        assert_eq!(reduce(97, 97), 0);
        assert_eq!(reduce(10_000, 97), 10_000 % 97);
    }

    #[test]
    fn mul_mod_no_overflow_near_i64_max() {
        let p = i64::MAX; // not prime, but reduction must still be exact
        let a = i64::MAX - 1;
        assert_eq!(mul_mod(a, a, p), 1);
        assert_eq!(mul_mod(a, 1, p), a);
        assert_eq!(mul_mod(12, 89, 97), 1);
    }
}
