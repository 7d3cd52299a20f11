pub mod start;
pub mod vehicle;

use clap::{ArgAction, Parser, Subcommand};

use vehicle::VehicleArgs;

#[derive(Parser)]
#[command(name = "ignite")]
#[command(about = "Starts network endpoints and reports on electric vehicles.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Hide banner and headers
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Validate the endpoint before activating it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize and activate a server endpoint
    #[command(alias = "s")]
    Start {
        #[arg(default_value = "111.1.11.12")]
        address: String,
        #[arg(default_value_t = 8080, allow_negative_numbers = true)]
        port: i32,
        /// How many times to call activate
        #[arg(long, default_value_t = 1)]
        repeat: usize,
    },
    /// Show and charge an electric vehicle (run with -v to see teardown events)
    #[command(alias = "v")]
    Vehicle(VehicleArgs),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
