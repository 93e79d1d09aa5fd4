//! Discrete probability distributions over advance counts.
//!
//! ## Core Types
//!
//! - [`Distribution`] — Dense array of probability mass indexed by outcome
//! - [`Density`] — Read access to any discrete distribution
//! - [`Support`] — The outcome space a distribution ranges over
//!
//! ## Operations
//!
//! - Convolution — The distribution of a sum of independent outcomes, exposed
//!   as [`Distribution::convolve`], `&a * &b`, and [`Iterator::product`]
//! - [`Summary`] — The full and display-significant [`Span`]s of a distribution
mod convolution;
mod density;
mod distribution;
mod summary;
mod support;

pub use density::*;
pub use distribution::*;
pub use summary::*;
pub use support::*;
