//! entropy.rs - Shannon entropy of a probability vector.
//!
//! License: MIT OR APACHE 2.0

/// Calculates the Shannon entropy of a probability vector.
///
/// Each probability `p` contributes `-p * log_base(p)`, with zero entries
/// contributing zero (the limit of `-p * log(p)` as `p` approaches zero).
/// The logarithm is never called on a zero or negative argument; the caller
/// is expected to have normalised the vector first, so every element lies
/// in `[0, 1]` and the result is non-negative.
///
/// Returns the entropy in units determined by `base` (nats for base e,
/// bits for base 2).
pub fn entropy(p_vector: &[f64], base: f64) -> f64 {
    let base_ln = base.ln();

    p_vector
        .iter()
        .filter(|&&p| p != 0.0)
        .map(|&p| -p * (p.ln() / base_ln))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_entropy_empty_vector() {
        assert_eq!(entropy(&[], E), 0.0);
    }

    #[test]
    fn test_entropy_point_mass_is_zero() {
        assert_eq!(entropy(&[1.0, 0.0, 0.0], E), 0.0);
    }

    #[test]
    fn test_entropy_uniform_is_log_of_length() {
        let uniform = [0.25; 4];
        assert!((entropy(&uniform, E) - 4.0_f64.ln()).abs() < EPSILON);
        assert!((entropy(&uniform, 2.0) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_entropy_is_non_negative() {
        let vectors: [&[f64]; 3] = [&[1.0], &[0.9, 0.1], &[0.5, 0.25, 0.25]];
        for vector in vectors {
            assert!(entropy(vector, E) >= 0.0);
        }
    }

    #[test]
    fn test_entropy_skips_zero_entries() {
        // Zero entries must contribute exactly 0, not NaN.
        let value = entropy(&[0.5, 0.0, 0.5], 2.0);
        assert!((value - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_entropy_known_value_base_e() {
        // -(0.25 ln 0.25 + 0.25 ln 0.25 + 0.5 ln 0.5)
        let value = entropy(&[0.25, 0.25, 0.5, 0.0], E);
        let expected = -(0.25_f64 * 0.25_f64.ln() * 2.0 + 0.5 * 0.5_f64.ln());
        assert!((value - expected).abs() < EPSILON);
        assert!((value - 1.0397207708399179).abs() < EPSILON);
    }
}
