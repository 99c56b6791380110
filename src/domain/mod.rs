// ============================================================================
// Domain Models Module
// The vector value type and the configuration of its derived quantities
// ============================================================================

pub mod config;
pub mod vector;

pub use config::{ArccosDomain, VectorConfig, MAX_PRECISION};
pub use vector::{AngleUnit, Vector};
