//! Bounce policy applied to a single velocity component

use serde::{Deserialize, Serialize};

/// How a collision modifies one velocity component.
///
/// Wall and paddle bounces force a sign ([`Negative`](Self::Negative) /
/// [`Positive`](Self::Positive)) so a ball already moving away from the
/// surface is never re-captured by it; [`Inverse`](Self::Inverse) reflects
/// unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceDirection {
    /// Force the component negative (leftward/upward)
    Negative,
    /// Leave the component unchanged
    NoChange,
    /// Force the component positive (rightward/downward)
    Positive,
    /// Flip the component's sign regardless of its current sign
    Inverse,
}

impl BounceDirection {
    /// Apply this policy to a velocity component. Total and pure.
    pub fn apply(self, v: f64) -> f64 {
        match self {
            BounceDirection::Negative => -v.abs(),
            BounceDirection::NoChange => v,
            BounceDirection::Positive => v.abs(),
            BounceDirection::Inverse => -v,
        }
    }
}
