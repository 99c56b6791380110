// ============================================================================
// Decimal Functions
// Square root and inverse trigonometry evaluated in decimal arithmetic
// ============================================================================
//
// Everything here stays inside rust_decimal: no value is routed through f64,
// so results carry the full 28 decimal places the type can hold.

use super::errors::{VectorError, VectorResult};
use rust_decimal::{Decimal, MathematicalOps};

/// Arguments above this are halved before the atan series is summed.
/// Two halvings bring any value in [0, 1] below it.
const ATAN_REDUCTION_LIMIT: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Upper bound on atan series terms; convergence normally takes ~25.
const ATAN_MAX_TERMS: u32 = 96;

#[inline]
fn checked(value: Option<Decimal>) -> VectorResult<Decimal> {
    value.ok_or(VectorError::Overflow)
}

/// Decimal square root.
///
/// # Errors
/// Returns `NumericDomain` for negative input.
pub fn sqrt(value: Decimal) -> VectorResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(VectorError::NumericDomain { value });
    }
    checked(value.sqrt())
}

/// Decimal arctangent, in radians.
pub fn atan(value: Decimal) -> VectorResult<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        return atan(-value).map(|v| -v);
    }
    if value > Decimal::ONE {
        // atan(x) = pi/2 - atan(1/x)
        let reciprocal = checked(Decimal::ONE.checked_div(value))?;
        return checked(Decimal::HALF_PI.checked_sub(atan(reciprocal)?));
    }

    // atan(x) = 2 atan(x / (1 + sqrt(1 + x^2)))
    let mut x = value;
    let mut halvings = 0u32;
    while x > ATAN_REDUCTION_LIMIT {
        let hypot = sqrt(checked(Decimal::ONE.checked_add(checked(x.checked_mul(x))?))?)?;
        x = checked(x.checked_div(checked(Decimal::ONE.checked_add(hypot))?))?;
        halvings += 1;
    }

    // Maclaurin series: x - x^3/3 + x^5/5 - ...
    let x_squared = checked(x.checked_mul(x))?;
    let mut power = x;
    let mut sum = x;
    for n in 1..ATAN_MAX_TERMS {
        power = -checked(power.checked_mul(x_squared))?;
        let term = checked(power.checked_div(Decimal::from(2 * n + 1)))?;
        if term.is_zero() {
            break;
        }
        sum = checked(sum.checked_add(term))?;
    }

    checked(sum.checked_mul(Decimal::from(1u64 << halvings)))
}

/// Decimal arccosine, in radians, for input in [-1, 1].
///
/// Uses `acos(x) = 2 atan(sqrt((1 - x) / (1 + x)))`, which is exact at both
/// ends of the domain: `acos(1) = 0` and `acos(-1) = pi`.
///
/// # Errors
/// Returns `NumericDomain` if `value` lies outside [-1, 1].
pub fn acos(value: Decimal) -> VectorResult<Decimal> {
    if value > Decimal::ONE || value < Decimal::NEGATIVE_ONE {
        return Err(VectorError::NumericDomain { value });
    }
    if value == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }
    if value == Decimal::NEGATIVE_ONE {
        return Ok(Decimal::PI);
    }

    let numerator = checked(Decimal::ONE.checked_sub(value))?;
    let denominator = checked(Decimal::ONE.checked_add(value))?;
    let half_angle_tan = sqrt(checked(numerator.checked_div(denominator))?)?;
    checked(atan(half_angle_tan)?.checked_mul(Decimal::TWO))
}

/// Convert radians to degrees.
pub fn to_degrees(radians: Decimal) -> VectorResult<Decimal> {
    let half_turns = checked(radians.checked_div(Decimal::PI))?;
    checked(half_turns.checked_mul(Decimal::from(180)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn assert_close(actual: Decimal, expected: &str, tolerance: &str) {
        let expected = Decimal::from_str(expected).unwrap();
        let tolerance = Decimal::from_str(tolerance).unwrap();
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} within {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn test_sqrt() {
        assert_close(
            sqrt(Decimal::from(16)).unwrap(),
            "4",
            "0.0000000000000000000000001",
        );
        assert_eq!(sqrt(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_close(
            sqrt(Decimal::TWO).unwrap(),
            "1.4142135623730950488016887242",
            "0.0000000000000000000000001",
        );
    }

    #[test]
    fn test_sqrt_negative() {
        assert!(matches!(
            sqrt(Decimal::NEGATIVE_ONE),
            Err(VectorError::NumericDomain { .. })
        ));
    }

    #[test]
    fn test_atan() {
        assert_eq!(atan(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_close(
            atan(Decimal::ONE).unwrap(),
            "0.7853981633974483096156608458",
            "0.000000000000000000000001",
        );
        assert_close(
            atan(Decimal::from(-3)).unwrap(),
            "-1.2490457723982544258299170772",
            "0.000000000000000000000001",
        );
        assert_close(
            atan(Decimal::new(1, 1)).unwrap(),
            "0.0996686524911620273784461198",
            "0.000000000000000000000001",
        );
    }

    #[test]
    fn test_acos_endpoints() {
        assert_eq!(acos(Decimal::ONE).unwrap(), Decimal::ZERO);
        assert_eq!(acos(Decimal::NEGATIVE_ONE).unwrap(), Decimal::PI);
        assert_close(
            acos(Decimal::ZERO).unwrap(),
            "1.5707963267948966192313216916",
            "0.000000000000000000000001",
        );
    }

    #[test]
    fn test_acos_interior() {
        // acos(0.5) = pi / 3
        assert_close(
            acos(Decimal::new(5, 1)).unwrap(),
            "1.0471975511965977461542144611",
            "0.000000000000000000000001",
        );
        // acos(-0.5) = 2 pi / 3
        assert_close(
            acos(Decimal::new(-5, 1)).unwrap(),
            "2.0943951023931954923084289221",
            "0.000000000000000000000001",
        );
    }

    #[test]
    fn test_acos_outside_domain() {
        let above = Decimal::from_str("1.0000000000000000000000000001").unwrap();
        assert_eq!(
            acos(above),
            Err(VectorError::NumericDomain { value: above })
        );
        assert!(acos(Decimal::from(-2)).is_err());
    }

    #[test]
    fn test_to_degrees() {
        assert_close(
            to_degrees(Decimal::PI).unwrap(),
            "180",
            "0.000000000000000000000001",
        );
        assert_close(
            to_degrees(Decimal::HALF_PI).unwrap(),
            "90",
            "0.000000000000000000000001",
        );
    }
}
