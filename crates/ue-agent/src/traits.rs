//! Personality traits and learnable preference weights.

use ue_core::SimRng;

/// Four traits in `[0, 1]` sampled once at creation.
///
/// Learning nudges `efficiency` up (capped at 1.0) and `risk_tolerance`
/// down (floored at [`Personality::MIN_RISK_TOLERANCE`]); the other two never
/// change.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    /// Scales the traffic term of the move score.  0.3 = cautious, 1.0 = adventurous.
    pub risk_tolerance: f64,
    /// Probability (× `exploration_scale`) of a uniformly random move.
    pub exploration:    f64,
    /// Above the social threshold, crowds are penalized less.
    pub social:         f64,
    /// Bonus per unit of visible resource.
    pub efficiency:     f64,
}

impl Personality {
    pub const MIN_RISK_TOLERANCE: f64 = 0.3;

    /// Draw a personality from the reference ranges.
    ///
    /// Draw order is fixed (risk, exploration, social, efficiency) so that a
    /// seeded `SimRng` reproduces the same population.
    pub fn sample(rng: &mut SimRng) -> Self {
        Self {
            risk_tolerance: rng.gen_range(0.3..=1.0),
            exploration:    rng.gen_range(0.2..=1.0),
            social:         rng.gen_range(0.1..=1.0),
            efficiency:     rng.gen_range(0.3..=1.0),
        }
    }

    /// Clamp every trait into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            risk_tolerance: self.risk_tolerance.clamp(0.0, 1.0),
            exploration:    self.exploration.clamp(0.0, 1.0),
            social:         self.social.clamp(0.0, 1.0),
            efficiency:     self.efficiency.clamp(0.0, 1.0),
        }
    }
}

/// Per-factor preference weights, mutated by learning.
///
/// `comfort` is carried but not scored; crowding is handled by the
/// personality's social adjustment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceWeights {
    pub resources:   f64,
    pub traffic:     f64,
    pub pollution:   f64,
    pub comfort:     f64,
    pub familiarity: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            resources:   1.0,
            traffic:     -2.0,
            pollution:   -0.5,
            comfort:     0.3,
            familiarity: 0.2,
        }
    }
}
