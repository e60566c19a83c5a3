use crate::{chunks::CountPolicy, commands::Cli};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variables are read with this prefix, e.g. `CHUNK_CSV_INPUT`
pub const ENV_PREFIX: &str = "CHUNK_CSV_";

pub const DEFAULT_INPUT: &str = "solution_5.txt";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
	#[serde(default = "default_input")]
	pub input: PathBuf,
	#[serde(default)]
	pub strict: bool,
}

fn default_input() -> PathBuf {
	PathBuf::from(DEFAULT_INPUT)
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			input: default_input(),
			strict: false,
		}
	}
}

impl AppConfig {
	pub fn from_env() -> Result<Self> {
		envy::prefixed(ENV_PREFIX)
			.from_env::<Self>()
			.context("invalid CHUNK_CSV_* environment configuration")
	}

	/// Command line values win over the environment
	pub fn with_overrides(mut self, cli: &Cli) -> Self {
		if let Some(input) = &cli.input {
			self.input = input.clone();
		}
		self.strict |= cli.strict;
		self
	}

	pub fn count_policy(&self) -> CountPolicy {
		if self.strict {
			CountPolicy::Strict
		} else {
			CountPolicy::Lenient
		}
	}
}
