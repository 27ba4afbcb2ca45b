use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Builds and checks indexed-color palettes")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct BuildArgs {
	#[arg(short, long, help = "The palette size. Must be a power of two between 2 and 1024.")]
	pub size: usize,

	#[arg(long, help = "Stops at the first color that can't be added.")]
	pub strict: bool,

	#[arg(required = true, allow_hyphen_values = true, help = "The colors to add, in order. Format #RRGGBB, 0xRRGGBB, or R,G,B.")]
	pub colors: Vec<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Builds a palette from a list of colors and prints the result.")]
	Build(BuildArgs),

	#[command(about = "Lists the valid palette sizes.")]
	Sizes,
}
