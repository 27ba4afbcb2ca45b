use std::process::ExitCode;

use clap::Parser;

use crate::cmd_build::palette_build;
use crate::cmd_sizes::palette_sizes;
use crate::commands::{Cli, Commands};

mod cmd_build;
mod cmd_sizes;
mod commands;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let result = match &cli.command {
		Some(Commands::Build(args)) => palette_build(args, cli.debug),
		Some(Commands::Sizes) => palette_sizes(cli.debug),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
