// ============================================================================
// Coordinate Conversion
// Turning numeric and textual inputs into decimal coordinates
// ============================================================================

use super::errors::{VectorError, VectorResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A value that can become a single vector coordinate.
///
/// Text inputs are parsed digit-for-digit without passing through a float,
/// so `"8.218"` stays exactly `8.218`. Floats go through `Decimal::from_f64`
/// and carry whatever binary approximation the float already had.
pub trait ToCoordinate {
    /// Convert to a decimal coordinate.
    ///
    /// # Errors
    /// Returns `Conversion` if the value is not a finite number in decimal range.
    fn to_coordinate(&self) -> VectorResult<Decimal>;
}

impl<T: ToCoordinate + ?Sized> ToCoordinate for &T {
    #[inline]
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        (**self).to_coordinate()
    }
}

impl ToCoordinate for Decimal {
    #[inline]
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        Ok(*self)
    }
}

impl ToCoordinate for str {
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        parse_decimal(self)
    }
}

impl ToCoordinate for String {
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        parse_decimal(self)
    }
}

macro_rules! signed_coordinate {
    ($($t:ty),*) => {
        $(
            impl ToCoordinate for $t {
                #[inline]
                fn to_coordinate(&self) -> VectorResult<Decimal> {
                    Ok(Decimal::from(*self as i64))
                }
            }
        )*
    };
}

macro_rules! unsigned_coordinate {
    ($($t:ty),*) => {
        $(
            impl ToCoordinate for $t {
                #[inline]
                fn to_coordinate(&self) -> VectorResult<Decimal> {
                    Ok(Decimal::from(*self as u64))
                }
            }
        )*
    };
}

signed_coordinate!(i8, i16, i32, i64, isize);
unsigned_coordinate!(u8, u16, u32, u64, usize);

impl ToCoordinate for i128 {
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        Decimal::from_i128(*self).ok_or_else(|| conversion_error(self))
    }
}

impl ToCoordinate for u128 {
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        Decimal::from_u128(*self).ok_or_else(|| conversion_error(self))
    }
}

impl ToCoordinate for f64 {
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        Decimal::from_f64(*self).ok_or_else(|| conversion_error(self))
    }
}

impl ToCoordinate for f32 {
    fn to_coordinate(&self) -> VectorResult<Decimal> {
        Decimal::from_f32(*self).ok_or_else(|| conversion_error(self))
    }
}

fn conversion_error(input: &impl ToString) -> VectorError {
    VectorError::Conversion {
        input: input.to_string(),
    }
}

// ============================================================================
// Text Parsing
// ============================================================================

/// Parse one decimal coordinate from text.
///
/// Accepts plain decimals (`"-9.341"`, `"42"`) and scientific
/// notation (`"1e-3"`, `"2.5E4"`). Surrounding whitespace is ignored.
pub fn parse_decimal(text: &str) -> VectorResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(conversion_error(&text));
    }

    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(&trimmed.to_ascii_lowercase())
    } else {
        Decimal::from_str(trimmed)
    };

    parsed.map_err(|_| conversion_error(&trimmed))
}

/// Parse a bracketed coordinate list into decimals.
///
/// Accepted shapes: `[a, b, ...]`, `(a, b, ...)`, and the `Display` form
/// `Vector: (a, b, ...)`. A single trailing comma is allowed.
///
/// # Errors
/// - `NotIterable` if the text is not bracketed (a bare scalar)
/// - `EmptyVector` if the brackets hold nothing
/// - `Conversion` if any element is not a decimal
pub fn parse_coordinate_list(text: &str) -> VectorResult<Vec<Decimal>> {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("Vector:") {
        body = rest.trim_start();
    }

    let inner = match (body.chars().next(), body.chars().last()) {
        (Some('['), Some(']')) | (Some('('), Some(')')) if body.len() >= 2 => {
            &body[1..body.len() - 1]
        },
        _ => return Err(VectorError::NotIterable),
    };

    let inner = inner.trim();
    if inner.is_empty() {
        return Err(VectorError::EmptyVector);
    }

    let inner = inner.strip_suffix(',').unwrap_or(inner);
    inner.split(',').map(parse_decimal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keeps_all_digits() {
        let x = "8.218".to_coordinate().unwrap();
        assert_eq!(x, Decimal::new(8218, 3));
        assert_eq!(x.to_string(), "8.218");

        let y = String::from(" -9.341 ").to_coordinate().unwrap();
        assert_eq!(y, Decimal::new(-9341, 3));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_decimal("1e-3").unwrap(), Decimal::new(1, 3));
        assert_eq!(parse_decimal("2.5E2").unwrap(), Decimal::from(250));
    }

    #[test]
    fn test_invalid_text() {
        assert_eq!(
            parse_decimal("a"),
            Err(VectorError::Conversion {
                input: "a".to_string()
            })
        );
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("1.2.3").is_err());
    }

    #[test]
    fn test_integers() {
        assert_eq!(7i32.to_coordinate().unwrap(), Decimal::from(7));
        assert_eq!((-3i64).to_coordinate().unwrap(), Decimal::from(-3));
        assert_eq!(12usize.to_coordinate().unwrap(), Decimal::from(12));
        assert!(u128::MAX.to_coordinate().is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(0.5f64.to_coordinate().unwrap(), Decimal::new(5, 1));
        assert!(f64::NAN.to_coordinate().is_err());
        assert!(f64::INFINITY.to_coordinate().is_err());
        assert!(f32::NEG_INFINITY.to_coordinate().is_err());
    }

    #[test]
    fn test_parse_coordinate_list_shapes() {
        let expected = vec![Decimal::ONE, Decimal::new(-25, 1)];
        assert_eq!(parse_coordinate_list("[1, -2.5]").unwrap(), expected);
        assert_eq!(parse_coordinate_list("(1,-2.5)").unwrap(), expected);
        assert_eq!(parse_coordinate_list("Vector: (1, -2.5)").unwrap(), expected);
        assert_eq!(parse_coordinate_list("(1, -2.5,)").unwrap(), expected);
    }

    #[test]
    fn test_parse_coordinate_list_errors() {
        assert_eq!(
            parse_coordinate_list("not a sequence"),
            Err(VectorError::NotIterable)
        );
        assert_eq!(parse_coordinate_list("3.5"), Err(VectorError::NotIterable));
        assert_eq!(parse_coordinate_list("[]"), Err(VectorError::EmptyVector));
        assert_eq!(parse_coordinate_list("(  )"), Err(VectorError::EmptyVector));
        assert!(matches!(
            parse_coordinate_list("[a, b]"),
            Err(VectorError::Conversion { .. })
        ));
        assert!(matches!(
            parse_coordinate_list("[1,,2]"),
            Err(VectorError::Conversion { .. })
        ));
    }
}
