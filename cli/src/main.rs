use ignite_cli::commands::{CommandLine, Commands, start, vehicle};
use ignite_cli::terminal::{logging, print};
use ignite_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        strict: commands.strict,
        no_color: commands.no_color,
    };

    print::initialize(&cfg);
    print::banner(&cfg);

    let result = match commands.command {
        Commands::Start {
            address,
            port,
            repeat,
        } => {
            print::header("starting server", cfg.quiet);
            start::start(address, port, repeat, &cfg)
        }
        Commands::Vehicle(args) => {
            print::header("vehicle status", cfg.quiet);
            vehicle::vehicle(args, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
