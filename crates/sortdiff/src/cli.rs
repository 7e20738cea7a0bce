use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sortdiff",
    about = "Find the lines unique to each of two sorted text files",
    version
)]
pub struct Cli {
    /// First sorted input file (prompted for when omitted)
    pub first: Option<String>,

    /// Second sorted input file (prompted for when omitted)
    pub second: Option<String>,

    /// Directory for the result files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name for lines only in the first input
    #[arg(long)]
    pub first_name: Option<String>,

    /// File name for lines only in the second input
    #[arg(long)]
    pub second_name: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary instead of the success message
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
