//! Device-tier classification.
//!
//! Narrow viewports get fewer particles and slower spawn cadences. The
//! tier is resolved once at startup from the viewport pixel width and
//! carried as a profile struct instead of scattered width checks.

use std::time::Duration;

/// Viewports narrower than this many virtual pixels are the narrow tier.
const NARROW_BELOW_PX: f32 = 800.0;

/// Coarse viewport classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTier {
    Narrow,
    Wide,
}

impl DeviceTier {
    /// Classify a viewport by its width in virtual pixels.
    pub fn from_px_width(px_width: f32) -> Self {
        if px_width < NARROW_BELOW_PX {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// Density and cadence parameters for this tier.
    pub fn profile(self) -> TierProfile {
        match self {
            Self::Narrow => TierProfile {
                star_count: 100,
                max_falling: 20,
                shooting_star_interval: Duration::from_millis(1000),
                falling_spawn_interval: Duration::from_millis(300),
                glow_px: 2.0,
            },
            Self::Wide => TierProfile {
                star_count: 300,
                max_falling: 50,
                shooting_star_interval: Duration::from_millis(500),
                falling_spawn_interval: Duration::from_millis(100),
                glow_px: 5.0,
            },
        }
    }
}

/// Tier-dependent scene parameters, resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct TierProfile {
    /// Background stars regenerated on resize.
    pub star_count: usize,
    /// Population cap for falling elements; also the initial burst size.
    pub max_falling: usize,
    /// Cadence of the shooting-star spawn timer.
    pub shooting_star_interval: Duration,
    /// Cadence of the falling-element spawn timer.
    pub falling_spawn_interval: Duration,
    /// Base glow radius for phrase text, scaled by projection.
    pub glow_px: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_threshold() {
        assert_eq!(DeviceTier::from_px_width(640.0), DeviceTier::Narrow);
        assert_eq!(DeviceTier::from_px_width(799.9), DeviceTier::Narrow);
        assert_eq!(DeviceTier::from_px_width(800.0), DeviceTier::Wide);
        assert_eq!(DeviceTier::from_px_width(1920.0), DeviceTier::Wide);
    }

    #[test]
    fn test_narrow_tier_is_sparser_and_slower() {
        let narrow = DeviceTier::Narrow.profile();
        let wide = DeviceTier::Wide.profile();
        assert!(narrow.star_count < wide.star_count);
        assert!(narrow.max_falling < wide.max_falling);
        assert!(narrow.shooting_star_interval > wide.shooting_star_interval);
        assert!(narrow.falling_spawn_interval > wide.falling_spawn_interval);
    }
}
