//! Match configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, DealBias, Seat};

/// Static configuration for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Which seats are played by the automated policy, indexed by seat.
    pub automated: [bool; 4],
    /// The dealer of the first round.
    pub first_dealer: Seat,
    /// How hands are assigned to seats.
    pub deal_bias: DealBias,
    /// Seed for shuffling. Drawn from entropy if unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            automated: [false, true, true, true],
            first_dealer: Seat::North,
            deal_bias: DealBias::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Every seat is automated.
    pub fn all_automated() -> Self {
        Self {
            automated: [true; 4],
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Makes `seat` the only human seat.
    pub fn with_human(mut self, seat: Seat) -> Self {
        self.automated = [true; 4];
        self.automated[seat.index()] = false;
        self
    }

    /// Sets the shuffling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the deal bias.
    pub fn with_deal_bias(mut self, bias: DealBias) -> Self {
        self.deal_bias = bias;
        self
    }

    /// Returns true if the seat is played by the automated policy.
    pub fn is_automated(&self, seat: Seat) -> bool {
        self.automated[seat.index()]
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(GameConfig::default(), config);
        assert!(!config.is_automated(Seat::North));
        assert!(config.is_automated(Seat::West));
    }

    #[test]
    fn test_partial_json() {
        let config = GameConfig::from_json(
            r#"{"automated": [true, true, false, true], "deal_bias": "favored", "seed": 9}"#,
        )
        .unwrap();
        assert!(!config.is_automated(Seat::South));
        assert_eq!(DealBias::Favored, config.deal_bias);
        assert_eq!(Some(9), config.seed);
        assert_eq!(Seat::North, config.first_dealer);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default().with_human(Seat::East).with_seed(4);
        assert_eq!([true, false, true, true], config.automated);
        assert_eq!(Some(4), config.seed);
    }

    #[test]
    fn test_bad_input() {
        assert_matches!(GameConfig::from_json("[1"), Err(ConfigError::Parse(_)));
        assert_matches!(
            GameConfig::from_path("/nonexistent/tarneeb.json"),
            Err(ConfigError::Io(_))
        );
    }
}
