//! Command-line options for the desktop game.

use clap::Parser;

use crate::seed::SeedChoice;

#[derive(Parser, Debug)]
#[command(author, version, about = "Escape the monster in a carved maze", long_about = None)]
pub struct Cli {
    /// Seed for maze carving and monster decisions; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn seed_choice(&self) -> SeedChoice {
        SeedChoice::from_flag(self.seed)
    }
}
