use clap::{Parser, Subcommand};
use pixgate_core::cli;
use pixgate_core::conf::load_config;
use pixgate_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pixgate",
    version,
    about = "Pixgate: Pingora-based image-delivery edge gateway"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfCmd,
    },

    /// Run the Pixgate gateway (default)
    Run {
        /// Path to the Pixgate config file
        #[arg(long, default_value = "config/pixgate.toml")]
        config: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum ConfCmd {
    /// Load and validate a config file
    Check {
        #[arg(long, default_value = "config/pixgate.toml")]
        config: PathBuf,
    },

    /// Write a starter config file
    Init {
        #[arg(long, default_value = "config/pixgate.toml")]
        config: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Conf { cmd }) => match cmd {
            ConfCmd::Check { config } => {
                if let Err(e) = cli::conf::check(config) {
                    eprintln!("conf error: {e}");
                    std::process::exit(1);
                }
            }

            ConfCmd::Init { config, force } => {
                if let Err(e) = cli::conf::init(config, force) {
                    eprintln!("conf error: {e}");
                    std::process::exit(1);
                }
            }
        },

        Some(Command::Run { config }) => run(config),

        None => run(PathBuf::from("config/pixgate.toml")),
    }
}

fn run(config: PathBuf) {
    init_logging();

    let cfg = load_config(&config).expect("Failed to load Pixgate config");

    pixgate_core::server::run(cfg).expect("Failed to start Pixgate server");
}
