// ============================================================================
// Vector
// Immutable fixed-dimension Euclidean vector over decimal coordinates
// ============================================================================

use super::config::VectorConfig;
use crate::numeric::{
    functions, parse_coordinate_list, ToCoordinate, VectorError, VectorResult,
};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Vectors up to this dimension keep their coordinates inline.
const INLINE_DIMENSIONS: usize = 4;

type Coordinates = SmallVec<[Decimal; INLINE_DIMENSIONS]>;

/// A non-zero vector divided through by its largest absolute coordinate.
///
/// Every scaled coordinate lies in [-1, 1], so squaring neither overflows
/// nor rounds small inputs away. `magnitude == largest * norm`.
struct Scaled {
    largest: Decimal,
    coordinates: Coordinates,
    norm: Decimal,
}

impl Scaled {
    fn dot(&self, other: &Self) -> VectorResult<Decimal> {
        self.coordinates
            .iter()
            .zip(other.coordinates.iter())
            .try_fold(Decimal::ZERO, |sum, (a, b)| {
                a.checked_mul(*b).and_then(|product| sum.checked_add(product))
            })
            .ok_or(VectorError::Overflow)
    }
}

/// Unit of a computed angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable Euclidean vector of fixed dimension.
///
/// Coordinates are `Decimal`s. The dimension is fixed at construction and is
/// always at least 1; every operation returns a new vector.
///
/// Equality is exact and element-wise. Vectors of different dimension are
/// simply unequal.
///
/// # Example
/// ```
/// use decimal_vector::prelude::*;
///
/// let a = Vector::new(["8.218", "-9.341"])?;
/// let b = Vector::new(["-1.129", "2.111"])?;
/// assert_eq!(a.add(&b)?, Vector::new(["7.089", "-7.23"])?);
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    coordinates: Coordinates,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector from numbers or decimal text.
    ///
    /// # Errors
    /// - `Conversion` if any coordinate is not numeric
    /// - `EmptyVector` if there are no coordinates
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.to_coordinate())
            .collect::<VectorResult<Coordinates>>()?;
        Self::from_coordinates(coordinates)
    }

    /// Create a vector from decimals that are already converted.
    pub fn from_decimals(coordinates: Vec<Decimal>) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_vec(coordinates))
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_elem(Decimal::ZERO, dimension))
    }

    /// Parse a vector from `[a, b, ...]`, `(a, b, ...)` or its `Display` form.
    ///
    /// # Errors
    /// - `NotIterable` if the text is a bare scalar instead of a sequence
    /// - `EmptyVector` if the sequence is empty
    /// - `Conversion` if an element is not numeric
    pub fn parse(text: &str) -> VectorResult<Self> {
        Self::from_decimals(parse_coordinate_list(text)?)
    }

    fn from_coordinates(coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        Ok(Self { coordinates })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The coordinates, in order.
    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    /// Number of coordinates (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Coordinate at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Decimal> {
        self.coordinates.get(index).copied()
    }

    /// Iterate over the coordinates.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    fn ensure_same_dimension(&self, other: &Self) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, op: F) -> VectorResult<Self>
    where
        F: Fn(Decimal, Decimal) -> Option<Decimal>,
    {
        self.ensure_same_dimension(other)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op(*a, *b).ok_or(VectorError::Overflow))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Self { coordinates })
    }

    fn scale(&self, factor: Decimal) -> VectorResult<Self> {
        let coordinates = self
            .iter()
            .map(|c| c.checked_mul(factor).ok_or(VectorError::Overflow))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Self { coordinates })
    }

    fn rounded(self, precision: u32) -> Self {
        let coordinates = self.iter().map(|c| c.round_dp(precision)).collect();
        Self { coordinates }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ, `Overflow` if a sum leaves decimal range.
    pub fn add(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, Decimal::checked_add)
    }

    /// Element-wise difference `self[i] - other[i]`.
    pub fn subtract(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, Decimal::checked_sub)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> VectorResult<Decimal> {
        self.ensure_same_dimension(other)?;
        self.iter()
            .zip(other.iter())
            .try_fold(Decimal::ZERO, |sum, (a, b)| {
                a.checked_mul(*b).and_then(|product| sum.checked_add(product))
            })
            .ok_or(VectorError::Overflow)
    }

    /// Multiply every coordinate by `c`.
    ///
    /// # Errors
    /// `Conversion` if `c` is not numeric, `Overflow` if a product leaves decimal range.
    pub fn times_scalar<C: ToCoordinate>(&self, c: C) -> VectorResult<Self> {
        self.scale(c.to_coordinate()?)
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Euclidean norm.
    pub fn magnitude(&self) -> VectorResult<Decimal> {
        self.magnitude_with(&VectorConfig::default())
    }

    /// Euclidean norm, rounded to `config.precision` decimal places.
    ///
    /// Computed as `max|c_i| * sqrt(sum((c_i / max|c_i|)^2))`, so it is zero
    /// only for the zero vector and stays in range for large coordinates.
    ///
    /// # Errors
    /// `InvalidConfig` if `config` fails `VectorConfig::validate`; every
    /// `*_with` method checks its configuration the same way.
    pub fn magnitude_with(&self, config: &VectorConfig) -> VectorResult<Decimal> {
        config.validate()?;
        let magnitude = match self.scaled()? {
            Some(scaled) => scaled
                .norm
                .checked_mul(scaled.largest)
                .ok_or(VectorError::Overflow)?,
            None => Decimal::ZERO,
        };
        Ok(magnitude.round_dp(config.precision))
    }

    /// `None` exactly when every coordinate is zero.
    fn scaled(&self) -> VectorResult<Option<Scaled>> {
        let largest = self.iter().map(|c| c.abs()).max().unwrap_or(Decimal::ZERO);
        if largest.is_zero() {
            return Ok(None);
        }

        let coordinates = self
            .iter()
            .map(|c| c.checked_div(largest).ok_or(VectorError::Overflow))
            .collect::<VectorResult<Coordinates>>()?;
        let squared = coordinates.iter().try_fold(Decimal::ZERO, |sum, c| {
            c.checked_mul(*c)
                .and_then(|square| sum.checked_add(square))
                .ok_or(VectorError::Overflow)
        })?;

        Ok(Some(Scaled {
            largest,
            coordinates,
            norm: functions::sqrt(squared)?,
        }))
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// `ZeroVector` if the magnitude is zero.
    pub fn normalize(&self) -> VectorResult<Self> {
        self.normalize_with(&VectorConfig::default())
    }

    /// Unit vector in the same direction, coordinates rounded to `config.precision`.
    pub fn normalize_with(&self, config: &VectorConfig) -> VectorResult<Self> {
        config.validate()?;
        let Some(scaled) = self.scaled()? else {
            tracing::debug!("refusing to normalize zero vector of dimension {}", self.dimension());
            return Err(VectorError::ZeroVector);
        };

        let inverse = Decimal::ONE
            .checked_div(scaled.norm)
            .ok_or(VectorError::Overflow)?;
        let direction = Self {
            coordinates: scaled.coordinates,
        };
        Ok(direction.scale(inverse)?.rounded(config.precision))
    }

    /// Angle between two vectors.
    ///
    /// Identical vectors give exactly zero.
    ///
    /// # Errors
    /// - `ZeroVectorAngle` if either vector is the zero vector
    /// - `DimensionMismatch` if the dimensions differ
    /// - `NumericDomain` if the cosine rounds outside [-1, 1] under `ArccosDomain::Reject`
    pub fn angle_with(&self, other: &Self, unit: AngleUnit) -> VectorResult<Decimal> {
        self.angle_with_config(other, unit, &VectorConfig::default())
    }

    /// Angle between two vectors, using an explicit configuration.
    pub fn angle_with_config(
        &self,
        other: &Self,
        unit: AngleUnit,
        config: &VectorConfig,
    ) -> VectorResult<Decimal> {
        config.validate()?;
        self.ensure_same_dimension(other)?;

        let (Some(own), Some(theirs)) = (self.scaled()?, other.scaled()?) else {
            tracing::debug!("refusing angle computation with a zero vector");
            return Err(VectorError::ZeroVectorAngle);
        };

        if self == other {
            return Ok(Decimal::ZERO);
        }

        let cosine = own
            .dot(&theirs)?
            .checked_div(own.norm)
            .and_then(|c| c.checked_div(theirs.norm))
            .ok_or(VectorError::Overflow)?;
        let radians = functions::acos(config.arccos_domain.apply(cosine)?)?;

        let angle = match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => functions::to_degrees(radians)?,
        };
        tracing::trace!("angle {:?} = {} (cosine {})", unit, angle, cosine);

        Ok(angle.round_dp(config.precision))
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Whether the magnitude is below the default tolerance (`1e-10`).
    pub fn is_zero(&self) -> VectorResult<bool> {
        self.is_zero_with(&VectorConfig::default())
    }

    /// Whether the magnitude is below `config.zero_tolerance`.
    pub fn is_zero_with(&self, config: &VectorConfig) -> VectorResult<bool> {
        config.validate()?;
        Ok(self.magnitude_with(config)? < config.zero_tolerance)
    }

    /// Whether `|self . other|` is within the default tolerance (`1e-10`).
    pub fn check_orthogonal(&self, other: &Self) -> VectorResult<bool> {
        self.check_orthogonal_with(other, &VectorConfig::default())
    }

    /// Whether `|self . other|` is within `config.orthogonal_tolerance`.
    pub fn check_orthogonal_with(
        &self,
        other: &Self,
        config: &VectorConfig,
    ) -> VectorResult<bool> {
        config.validate()?;
        Ok(self.dot(other)?.abs() <= config.orthogonal_tolerance)
    }

    /// Whether the vectors point the same way (angle at most `1e-7` radians).
    ///
    /// A zero vector is parallel to everything.
    pub fn check_parallel(&self, other: &Self) -> VectorResult<bool> {
        self.check_parallel_with(other, &VectorConfig::default())
    }

    /// Parallel check using `config.zero_tolerance` and `config.parallel_threshold`.
    pub fn check_parallel_with(&self, other: &Self, config: &VectorConfig) -> VectorResult<bool> {
        config.validate()?;
        self.ensure_same_dimension(other)?;

        if self.is_zero_with(config)? || other.is_zero_with(config)? {
            return Ok(true);
        }

        let angle = self.angle_with_config(other, AngleUnit::Radians, config)?;
        Ok(angle <= config.parallel_threshold)
    }

    // ========================================================================
    // Projection and Cross Product
    // ========================================================================

    /// Projection of `self` onto the direction of `basis`.
    ///
    /// # Errors
    /// `ZeroVector` if `basis` is the zero vector.
    pub fn component_parallel_to(&self, basis: &Self) -> VectorResult<Self> {
        self.component_parallel_to_with(basis, &VectorConfig::default())
    }

    /// Projection onto `basis`, using an explicit configuration.
    pub fn component_parallel_to_with(
        &self,
        basis: &Self,
        config: &VectorConfig,
    ) -> VectorResult<Self> {
        config.validate()?;
        self.ensure_same_dimension(basis)?;
        let unit = basis.normalize_with(config)?;
        let weight = self.dot(&unit)?;
        Ok(unit.scale(weight)?.rounded(config.precision))
    }

    /// Component of `self` orthogonal to `basis`; adds back to `self` with
    /// `component_parallel_to`.
    pub fn component_orthogonal_to(&self, basis: &Self) -> VectorResult<Self> {
        self.subtract(&self.component_parallel_to(basis)?)
    }

    /// Component orthogonal to `basis`, using an explicit configuration.
    pub fn component_orthogonal_to_with(
        &self,
        basis: &Self,
        config: &VectorConfig,
    ) -> VectorResult<Self> {
        self.subtract(&self.component_parallel_to_with(basis, config)?)
    }

    /// Cross product of two 3-dimensional vectors.
    ///
    /// # Errors
    /// `DimensionMismatch` unless both vectors have dimension 3.
    pub fn cross(&self, other: &Self) -> VectorResult<Self> {
        let (x1, y1, z1) = self.as_triple()?;
        let (x2, y2, z2) = other.as_triple()?;

        let minor = |a: Decimal, b: Decimal, c: Decimal, d: Decimal| {
            a.checked_mul(b)
                .zip(c.checked_mul(d))
                .and_then(|(ab, cd)| ab.checked_sub(cd))
                .ok_or(VectorError::Overflow)
        };

        Self::from_decimals(vec![
            minor(y1, z2, z1, y2)?,
            minor(z1, x2, x1, z2)?,
            minor(x1, y2, y1, x2)?,
        ])
    }

    /// Area of the parallelogram spanned by two 3-dimensional vectors.
    pub fn area_of_parallelogram_with(&self, other: &Self) -> VectorResult<Decimal> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3-dimensional vectors.
    pub fn area_of_triangle_with(&self, other: &Self) -> VectorResult<Decimal> {
        self.area_of_parallelogram_with(other)?
            .checked_div(Decimal::TWO)
            .ok_or(VectorError::Overflow)
    }

    fn as_triple(&self) -> VectorResult<(Decimal, Decimal, Decimal)> {
        match self.coordinates() {
            [x, y, z] => Ok((*x, *y, *z)),
            _ => Err(VectorError::DimensionMismatch {
                expected: 3,
                found: self.dimension(),
            }),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, ")")
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            coordinates: self.iter().map(|c| -*c).collect(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Vector;
    use crate::numeric::VectorError;
    use rust_decimal::Decimal;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Vector {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.dimension()))?;
            for coordinate in self.iter() {
                seq.serialize_element(coordinate)?;
            }
            seq.end()
        }
    }

    struct VectorVisitor;

    impl VectorVisitor {
        fn scalar<E: de::Error>(self) -> Result<Vector, E> {
            Err(E::custom(VectorError::NotIterable))
        }
    }

    impl<'de> Visitor<'de> for VectorVisitor {
        type Value = Vector;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of decimal coordinates")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vector, A::Error> {
            let mut coordinates = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(coordinate) = seq.next_element::<Decimal>()? {
                coordinates.push(coordinate);
            }
            Vector::from_decimals(coordinates).map_err(de::Error::custom)
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Vector, E> {
            self.scalar()
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Vector, E> {
            self.scalar()
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Vector, E> {
            self.scalar()
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Vector, E> {
            self.scalar()
        }
    }

    impl<'de> Deserialize<'de> for Vector {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(VectorVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
