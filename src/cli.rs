use clap::Parser;

/// CLI tooling for the game.
#[derive(Parser, Debug)]
pub struct Args {
    /// Fixes the RNG seed so the fish spawn sequence is replayable.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Skips the menu and drops straight into play.
    #[arg(long)]
    pub skip_menu: bool,
}
