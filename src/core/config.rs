//! Round configuration.
//!
//! `RoundConfig` holds the numbers a round is played to: trip length with and
//! without the extension, hand size, and the per-play distance cap when no
//! speed limit is in force.

use serde::{Deserialize, Serialize};

/// Trip length of a normal round.
pub const BASE_DISTANCE: u32 = 700;

/// Trip length when the extension is in play.
pub const EXTENDED_DISTANCE: u32 = 1000;

/// Cards dealt to each player at the start of a round.
pub const HAND_SIZE: usize = 6;

/// Largest distance card playable without a speed limit.
pub const MAX_SPEED: u32 = 200;

/// Numbers a round is played to.
///
/// ```
/// use mille_bornes::core::RoundConfig;
///
/// let config = RoundConfig::default().with_base_distance(500);
/// assert_eq!(config.required_distance(false), 500);
/// assert_eq!(config.required_distance(true), 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Distance a team must cover to complete the trip.
    pub base_distance: u32,

    /// Distance required when the round is extended.
    pub extended_distance: u32,

    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Distance cap per play when the speed area holds no limit.
    pub max_speed: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            base_distance: BASE_DISTANCE,
            extended_distance: EXTENDED_DISTANCE,
            hand_size: HAND_SIZE,
            max_speed: MAX_SPEED,
        }
    }
}

impl RoundConfig {
    #[must_use]
    pub fn with_base_distance(mut self, distance: u32) -> Self {
        self.base_distance = distance;
        self
    }

    #[must_use]
    pub fn with_extended_distance(mut self, distance: u32) -> Self {
        self.extended_distance = distance;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_speed(mut self, speed: u32) -> Self {
        self.max_speed = speed;
        self
    }

    /// Distance required to complete the trip.
    #[must_use]
    pub fn required_distance(&self, extension: bool) -> u32 {
        if extension {
            self.extended_distance
        } else {
            self.base_distance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.required_distance(false), 700);
        assert_eq!(config.required_distance(true), 1000);
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.max_speed, 200);
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::default()
            .with_extended_distance(1200)
            .with_hand_size(4)
            .with_max_speed(100);

        assert_eq!(config.required_distance(true), 1200);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.max_speed, 100);
    }

    #[test]
    fn test_config_serde() {
        let config = RoundConfig::default().with_base_distance(300);
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
