// ============================================================================
// Vector Configuration
// Precision, tolerances, and arccos policy for derived quantities
// ============================================================================

use crate::numeric::{VectorError, VectorResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of decimal places a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

// ============================================================================
// Arccos Domain Policy
// ============================================================================

/// What to do when a computed cosine falls outside [-1, 1].
///
/// Rounding in `dot / |a| / |b|` can push the cosine of near-parallel
/// vectors a few units in the last place past 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArccosDomain {
    /// Clamp the cosine into [-1, 1] before taking the arccos
    #[default]
    Clamp,

    /// Fail with `NumericDomain`
    Reject,
}

impl ArccosDomain {
    /// Bring a cosine into the arccos domain according to this policy.
    pub fn apply(self, cosine: Decimal) -> VectorResult<Decimal> {
        if cosine <= Decimal::ONE && cosine >= Decimal::NEGATIVE_ONE {
            return Ok(cosine);
        }

        match self {
            ArccosDomain::Clamp => {
                tracing::debug!("clamping cosine {} into [-1, 1]", cosine);
                Ok(cosine.clamp(Decimal::NEGATIVE_ONE, Decimal::ONE))
            },
            ArccosDomain::Reject => Err(VectorError::NumericDomain { value: cosine }),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the derived quantities of a vector.
///
/// Passed explicitly to the `*_with` methods on `Vector`; the plain methods
/// use `VectorConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorConfig {
    /// Decimal places kept in magnitudes, angles, and normalized coordinates
    pub precision: u32,

    /// A vector is zero when its magnitude is strictly below this
    pub zero_tolerance: Decimal,

    /// Two vectors are orthogonal when `|a . b|` is at most this
    pub orthogonal_tolerance: Decimal,

    /// Two vectors are parallel when their angle (radians) is at most this
    pub parallel_threshold: Decimal,

    /// Handling of cosines that round past [-1, 1]
    pub arccos_domain: ArccosDomain,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            precision: MAX_PRECISION,
            zero_tolerance: Decimal::new(1, 10),
            orthogonal_tolerance: Decimal::new(1, 10),
            parallel_threshold: Decimal::new(1, 7),
            arccos_domain: ArccosDomain::Clamp,
        }
    }
}

impl VectorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set decimal places kept in derived results
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set zero-vector tolerance
    pub fn with_zero_tolerance(mut self, tolerance: Decimal) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Builder method: Set orthogonality tolerance
    pub fn with_orthogonal_tolerance(mut self, tolerance: Decimal) -> Self {
        self.orthogonal_tolerance = tolerance;
        self
    }

    /// Builder method: Set parallel angle threshold (radians)
    pub fn with_parallel_threshold(mut self, threshold: Decimal) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder method: Set arccos domain policy
    pub fn with_arccos_domain(mut self, policy: ArccosDomain) -> Self {
        self.arccos_domain = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VectorResult<()> {
        let reason = if self.precision == 0 || self.precision > MAX_PRECISION {
            Some(format!(
                "precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.precision
            ))
        } else if self.zero_tolerance <= Decimal::ZERO {
            Some("zero tolerance must be positive".to_string())
        } else if self.orthogonal_tolerance < Decimal::ZERO {
            Some("orthogonal tolerance cannot be negative".to_string())
        } else if self.parallel_threshold < Decimal::ZERO {
            Some("parallel threshold cannot be negative".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => {
                tracing::debug!("rejected vector configuration: {}", reason);
                Err(VectorError::InvalidConfig { reason })
            },
            None => Ok(()),
        }
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl VectorConfig {
    /// Tight tolerances, and rounding past [-1, 1] is an error
    pub fn strict() -> Self {
        Self::default()
            .with_zero_tolerance(Decimal::new(1, 20))
            .with_orthogonal_tolerance(Decimal::new(1, 20))
            .with_parallel_threshold(Decimal::new(1, 12))
            .with_arccos_domain(ArccosDomain::Reject)
    }

    /// Loose tolerances for inputs measured to a few decimal places
    pub fn lenient() -> Self {
        Self::default()
            .with_zero_tolerance(Decimal::new(1, 6))
            .with_orthogonal_tolerance(Decimal::new(1, 6))
            .with_parallel_threshold(Decimal::new(1, 4))
    }
}
