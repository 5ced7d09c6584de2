use crate::utils::error::{GreetError, Result};

/// Largest input whose factorial still fits in a `u128`; 35! overflows 128 bits.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Factorial of a non-negative integer. Iterative, so the cost of a huge input
/// is an error instead of a blown call stack.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(GreetError::NegativeFactorial { value: n });
    }

    let mut acc: u128 = 1;
    for i in 2..=n as u128 {
        acc = acc.checked_mul(i).ok_or(GreetError::FactorialOverflow {
            value: n,
            max: MAX_FACTORIAL_INPUT,
        })?;
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORIALS_THROUGH_20: [u128; 21] = [
        1,
        1,
        2,
        6,
        24,
        120,
        720,
        5040,
        40320,
        362880,
        3628800,
        39916800,
        479001600,
        6227020800,
        87178291200,
        1307674368000,
        20922789888000,
        355687428096000,
        6402373705728000,
        121645100408832000,
        2432902008176640000,
    ];

    #[test]
    fn test_matches_precomputed_table() {
        for (n, expected) in FACTORIALS_THROUGH_20.iter().enumerate() {
            assert_eq!(factorial(n as i64).unwrap(), *expected, "mismatch at {}", n);
        }
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
    }

    #[test]
    fn test_negative_input_is_rejected() {
        let err = factorial(-1).unwrap_err();
        assert!(matches!(err, GreetError::NegativeFactorial { value: -1 }));

        let err = factorial(-3).unwrap_err();
        assert!(matches!(err, GreetError::NegativeFactorial { value: -3 }));
    }

    #[test]
    fn test_largest_supported_input() {
        assert_eq!(
            factorial(MAX_FACTORIAL_INPUT).unwrap(),
            295232799039604140847618609643520000000
        );
    }

    #[test]
    fn test_overflow_is_reported_not_wrapped() {
        let err = factorial(MAX_FACTORIAL_INPUT + 1).unwrap_err();
        assert!(matches!(
            err,
            GreetError::FactorialOverflow { value: 35, max: 34 }
        ));

        // A huge input fails the same way instead of spinning.
        assert!(matches!(
            factorial(i64::MAX).unwrap_err(),
            GreetError::FactorialOverflow { .. }
        ));
    }
}
