use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
	#[error("could not read chunk listing '{}'", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("line {line}: chunk record has no '=>' count separator")]
	MissingSeparator { line: usize },

	#[error("line {line}: count '{value}' is not a number")]
	InvalidCount { line: usize, value: String },
}
