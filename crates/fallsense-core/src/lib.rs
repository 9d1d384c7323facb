//! # fallsense-core: Foundational Types
//!
//! Leaf crate of the Fallsense workspace. Every other crate depends on
//! `fallsense-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes for operating parameters.** `Money`, `Minutes` and
//!    `Fraction` can only be constructed from finite values in range. Invalid
//!    input is rejected at the boundary (constructor or deserialization), so
//!    the calculator itself never has to re-check.
//!
//! 2. **One guarded-division helper.** Every ratio with a denominator that can
//!    legitimately be zero goes through [`guarded_ratio`]. The fallback is
//!    chosen once per call site and the result is always finite.
//!
//! 3. **`Bounded` instead of infinity.** Quantities that diverge (payback with
//!    zero savings) are `Bounded::Unbounded`, never `f64::INFINITY` or NaN.
//!
//! 4. **UTC-only timestamps** for content rows, seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fallsense-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod quantity;
pub mod ratio;
pub mod section;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{FallsenseError, ValidationError};
pub use quantity::{Fraction, Minutes, Money, MAX_AMOUNT};
pub use ratio::{guarded_ratio, Bounded, OnZero};
pub use section::SectionKey;
pub use temporal::Timestamp;
