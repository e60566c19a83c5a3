use clap::Parser;
use std::path::PathBuf;

/// Turn a `Chunk (<offset> , <size>) => <count>` listing into an `offset,count` CSV
#[derive(Parser, Debug)]
#[command(name = "chunk-csv")]
pub struct Cli {
	/// Chunk listing to read (default: solution_5.txt, or CHUNK_CSV_INPUT)
	pub input: Option<PathBuf>,
	/// Fail on chunk lines whose count is missing or not a number
	#[arg(long, short)]
	pub strict: bool,
}
