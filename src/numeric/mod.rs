// ============================================================================
// Numeric Module
// Decimal coordinates, conversion, and the functions vectors are built on
// ============================================================================
//
// This module provides:
// - VectorError / VectorResult: the error taxonomy for every vector operation
// - ToCoordinate: conversion of numbers and decimal text into coordinates
// - sqrt / atan / acos / to_degrees evaluated in rust_decimal
//
// Design principles:
// - No floating-point round-trips inside the arithmetic
// - All fallible arithmetic returns Result (no panics)

mod coordinate;
mod errors;
pub mod functions;

pub use coordinate::{parse_coordinate_list, parse_decimal, ToCoordinate};
pub use errors::{VectorError, VectorResult};
pub use rust_decimal::Decimal;
