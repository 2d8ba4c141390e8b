use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wallet-hub")]
#[command(about = "Post onboarding actions and fee views for the wallet", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file",
        default_value = "data/config.toml"
    )]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the post onboarding actions offered for a device
    Actions {
        #[arg(short, long, help = "Device model id (blue, nanoS, nanoSP, nanoX, stax)")]
        device: String,
        #[arg(long, help = "Show the demo actions instead of the production ones")]
        mock: bool,
        #[arg(long, help = "Do not hide actions behind disabled feature flags")]
        all: bool,
    },
    /// Show a single post onboarding action
    Action {
        #[arg(help = "Action id, e.g. customImage")]
        id: String,
    },
    /// Run an action's start capability and print what it would open
    StartAction {
        #[arg(help = "Action id, e.g. buyCrypto")]
        id: String,
    },
    /// Print the fee fields relevant to a transaction's family
    Fees {
        #[arg(short, long, help = "Path to a transaction JSON file")]
        transaction: PathBuf,
    },
    /// Convert an atomic amount to the account's display unit
    Convert {
        #[arg(short = 'n', long, help = "Amount in atomic units")]
        amount: String,
        #[arg(short, long, help = "Path to an account JSON file")]
        account: PathBuf,
    },
}
