//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tarneeb::{DealBias, GameConfig, Seat};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON match configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The seat you play. All other seats are automated.
    #[arg(short, long, value_parser = parse_seat)]
    pub seat: Option<Seat>,

    /// Seed for shuffling.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How hands are assigned to seats.
    #[arg(short, long)]
    pub bias: Option<Bias>,

    /// Watch four automated seats play.
    #[arg(short, long)]
    pub watch: bool,

    /// Stop after this many rounds.
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Don't color the cards.
    #[arg(long)]
    pub no_color: bool,

    /// Write the match log here, as JSON, on exit.
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Log debug messages.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Bias {
    Uniform,
    Favored,
}

impl From<Bias> for DealBias {
    fn from(bias: Bias) -> Self {
        match bias {
            Bias::Uniform => DealBias::Uniform,
            Bias::Favored => DealBias::Favored,
        }
    }
}

fn parse_seat(s: &str) -> Result<Seat, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Seat::try_from(c),
        _ => match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Seat::North),
            "east" => Ok(Seat::East),
            "south" => Ok(Seat::South),
            "west" => Ok(Seat::West),
            _ => Err(()),
        },
    }
    .map_err(|_| format!("invalid seat: {s}"))
}

impl Args {
    /// Builds the match configuration: the file, if any, overridden by flags.
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_path(path)?,
            None => GameConfig::default(),
        };
        if let Some(seat) = self.seat {
            config = config.with_human(seat);
        }
        if self.watch {
            config.automated = [true; 4];
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(bias) = self.bias {
            config = config.with_deal_bias(bias.into());
        }
        Ok(config)
    }
}
