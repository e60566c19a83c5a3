use crate::{
	chunks::{ChunkRecord, extract_records},
	config::AppConfig,
	error::TransformError,
};
use thin_logger::log;

pub const CSV_HEADER: &str = "offset,count";

/// Renders records as CSV, header first. Every row ends with a newline.
pub fn render_csv(records: &[ChunkRecord]) -> String {
	let mut csv = format!("{CSV_HEADER}\n");

	for record in records {
		csv.push_str(&format!("{},{}\n", record.offset, record.count));
	}

	csv
}

pub struct CsvExportService {
	config: AppConfig,
}

impl CsvExportService {
	pub fn new(config: AppConfig) -> Self {
		Self { config }
	}

	/// Converts listing text that is already in memory
	pub fn convert(&self, source: &str) -> Result<String, TransformError> {
		let records = extract_records(source, self.config.count_policy())?;
		Ok(render_csv(&records))
	}

	/// Reads the configured listing and converts it
	pub async fn export(&self) -> Result<String, TransformError> {
		let path = &self.config.input;
		log::info!("exporting chunk counts from {}", path.display());

		let bytes = tokio::fs::read(path)
			.await
			.map_err(|source| TransformError::Read {
				path: path.clone(),
				source,
			})?;

		// invalid UTF-8 becomes U+FFFD instead of failing the run
		self.convert(&String::from_utf8_lossy(&bytes))
	}
}
