// ============================================================================
// Decimal Vector Library
// Immutable Euclidean vectors over high-precision decimal coordinates
// ============================================================================

//! # Decimal Vector
//!
//! Fixed-dimension Euclidean vectors whose coordinates are 28-digit decimals.
//!
//! ## Features
//!
//! - **Exact decimal input**: `"8.218"` is stored as `8.218`, not its binary approximation
//! - **Checked arithmetic**: every fallible operation returns `VectorResult`
//! - **Decimal geometry**: magnitude, normalization and angles computed without `f64`
//! - **Explicit configuration**: precision and tolerances passed as a `VectorConfig`
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let a = Vector::new(["7.887", "4.138"]).unwrap();
//! let b = Vector::new(["-8.802", "6.776"]).unwrap();
//!
//! println!("{}", a.add(&b).unwrap());
//! println!("a . b = {}", a.dot(&b).unwrap());
//! println!("|a| = {}", a.magnitude().unwrap());
//! println!("angle = {} deg", a.angle_with(&b, AngleUnit::Degrees).unwrap());
//!
//! let x = Vector::new([1, 0]).unwrap();
//! let y = Vector::new([0, 1]).unwrap();
//! assert!(x.check_orthogonal(&y).unwrap());
//! assert!(x.check_parallel(&Vector::zero(2).unwrap()).unwrap());
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AngleUnit, ArccosDomain, Vector, VectorConfig};
    pub use crate::numeric::{Decimal, ToCoordinate, VectorError, VectorResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn d(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_quiz_walkthrough() {
        let sum = Vector::new(["8.218", "-9.341"])
            .unwrap()
            .add(&Vector::new(["-1.129", "2.111"]).unwrap())
            .unwrap();
        assert_eq!(sum, Vector::new(["7.089", "-7.23"]).unwrap());

        let magnitude = Vector::new(["-0.221", "7.437"]).unwrap().magnitude().unwrap();
        assert!((magnitude - d("7.4402829247")).abs() < d("0.0001"));

        let dot = Vector::new(["7.887", "4.138"])
            .unwrap()
            .dot(&Vector::new(["-8.802", "6.776"]).unwrap())
            .unwrap();
        assert!((dot - d("-41.382")).abs() < d("0.001"));

        let unit = Vector::new(["1.996", "3.108", "-4.554"])
            .unwrap()
            .normalize()
            .unwrap();
        assert!((unit.magnitude().unwrap() - Decimal::ONE).abs() < d("0.000000001"));
    }

    #[test]
    fn test_classification_table() {
        let a = Vector::new(["2.118", "4.827"]).unwrap();
        let zero = Vector::new([0, 0]).unwrap();

        assert!(a.check_parallel(&zero).unwrap());
        assert!(a.check_orthogonal(&zero).unwrap());
        assert_eq!(
            a.angle_with(&zero, AngleUnit::Degrees),
            Err(VectorError::ZeroVectorAngle)
        );
    }

    #[test]
    fn test_explicit_config_threads_through() {
        let config = VectorConfig::new().with_precision(4);
        config.validate().unwrap();

        let a = Vector::new([1, 2]).unwrap();
        let b = Vector::new([2, 1]).unwrap();
        let angle = a
            .angle_with_config(&b, AngleUnit::Degrees, &config)
            .unwrap();
        assert_eq!(angle, d("36.8699"));
        assert_eq!(a.magnitude_with(&config).unwrap(), d("2.2361"));
    }

    #[test]
    fn test_shared_across_threads() {
        let a = Vector::new(["3.039", "1.879"]).unwrap();
        let b = Vector::new(["0.825", "2.036"]).unwrap();
        let expected = a.dot(&b).unwrap();

        let (a, b) = (&a, &b);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || a.dot(b).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    fn coordinate() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..1_000_000, 0u32..4)
            .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1usize..6).prop_flat_map(|dimension| {
            (
                prop::collection::vec(coordinate(), dimension),
                prop::collection::vec(coordinate(), dimension),
            )
                .prop_map(|(a, b)| {
                    (
                        Vector::from_decimals(a).unwrap(),
                        Vector::from_decimals(b).unwrap(),
                    )
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn add_commutes((a, b) in vector_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn subtract_self_is_zero((a, _b) in vector_pair()) {
            prop_assert_eq!(a.subtract(&a).unwrap(), Vector::zero(a.dimension()).unwrap());
        }

        #[test]
        fn scaling_identity_and_annihilation((a, _b) in vector_pair()) {
            prop_assert_eq!(a.times_scalar(1).unwrap(), a.clone());
            prop_assert_eq!(a.times_scalar(0).unwrap(), Vector::zero(a.dimension()).unwrap());
        }

        #[test]
        fn dot_commutes((a, b) in vector_pair()) {
            prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        }

        #[test]
        fn normalized_has_unit_length((a, _b) in vector_pair()) {
            prop_assume!(!a.magnitude().unwrap().is_zero());
            let length = a.normalize().unwrap().magnitude().unwrap();
            prop_assert!((length - Decimal::ONE).abs() <= Decimal::new(1, 9));
        }

        #[test]
        fn angle_with_self_is_zero((a, _b) in vector_pair()) {
            prop_assume!(!a.magnitude().unwrap().is_zero());
            prop_assert_eq!(a.angle_with(&a, AngleUnit::Radians).unwrap(), Decimal::ZERO);
            prop_assert!(a.check_parallel(&a).unwrap());
        }

        #[test]
        fn angle_stays_in_range((a, b) in vector_pair()) {
            prop_assume!(!a.is_zero().unwrap() && !b.is_zero().unwrap());
            let angle = a.angle_with(&b, AngleUnit::Radians).unwrap();
            prop_assert!(angle >= Decimal::ZERO);
            prop_assert!(angle <= Decimal::PI);
        }

        #[test]
        fn display_parses_back((a, _b) in vector_pair()) {
            prop_assert_eq!(a.to_string().parse::<Vector>().unwrap(), a);
        }
    }
}
