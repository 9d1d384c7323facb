//! # Guarded Division
//!
//! Every ratio whose denominator may legitimately be zero is computed with
//! [`guarded_ratio`]. The caller states up front what a zero denominator
//! means via [`OnZero`]; the helper never returns NaN or infinity.
//!
//! ## Policies in use
//!
//! | ratio | denominator | on zero |
//! |-------|-------------|---------|
//! | falls per resident | residents | `Zero` |
//! | prevention share | falls per year | `Zero` |
//! | payback period | annual savings | `Unbounded` |
//! | three-year ROI | three-year cost | `UnboundedIfPositive` |

use serde::{Deserialize, Serialize};

/// A quantity that is either a finite number or diverges.
///
/// Serialized adjacently tagged: `{"kind":"finite","value":0.12}` or
/// `{"kind":"unbounded"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Bounded {
    /// A finite value.
    Finite(f64),
    /// No finite value exists (e.g. payback that never happens).
    Unbounded,
}

impl Bounded {
    /// The finite value, if any.
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Unbounded => None,
        }
    }

    /// The finite value, or `default` when unbounded.
    pub fn finite_or(self, default: f64) -> f64 {
        self.finite().unwrap_or(default)
    }

    /// Whether this value diverges.
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl std::fmt::Display for Bounded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// What a ratio evaluates to when its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnZero {
    /// The ratio is zero: there is nothing to apportion.
    Zero,
    /// The ratio diverges.
    Unbounded,
    /// The ratio diverges when the numerator is positive, otherwise zero.
    UnboundedIfPositive,
}

/// Divide `numerator` by `denominator` under the given zero policy.
///
/// `quantity` names the ratio for the debug event emitted when the guard
/// fires. A non-zero denominator whose quotient overflows also yields
/// [`Bounded::Unbounded`].
pub fn guarded_ratio(quantity: &'static str, numerator: f64, denominator: f64, on_zero: OnZero) -> Bounded {
    if denominator == 0.0 {
        tracing::debug!(quantity, numerator, ?on_zero, "division guarded: zero denominator");
        return match on_zero {
            OnZero::Zero => Bounded::Finite(0.0),
            OnZero::Unbounded => Bounded::Unbounded,
            OnZero::UnboundedIfPositive if numerator > 0.0 => Bounded::Unbounded,
            OnZero::UnboundedIfPositive => Bounded::Finite(0.0),
        };
    }

    let q = numerator / denominator;
    if q.is_finite() {
        Bounded::Finite(q)
    } else {
        tracing::debug!(quantity, numerator, denominator, "division guarded: non-finite quotient");
        Bounded::Unbounded
    }
}
