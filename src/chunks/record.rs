use super::types::{ChunkRecord, Count, CountPolicy};
use crate::error::TransformError;
use thin_logger::log;

/// Lines not starting with this are not chunk records
pub const RECORD_PREFIX: &str = "Chunk";

/// Separates the `Chunk (<offset> , <size>)` head from the count
pub const COUNT_SEPARATOR: &str = "=>";

/// Separates offset and size inside the parentheses
pub const FIELD_SEPARATOR: &str = " , ";

/// First occurrence is stripped from the first field to leave the bare offset
pub const OFFSET_OPENER: &str = "Chunk (";

/// Parses one line of a chunk listing.
///
/// Returns `Ok(None)` for lines that are not chunk records. The offset is kept as the
/// text found in the listing, only the count is read as a number.
pub fn parse_record(
	line: usize,
	text: &str,
	policy: CountPolicy,
) -> Result<Option<ChunkRecord>, TransformError> {
	if !text.starts_with(RECORD_PREFIX) {
		return Ok(None);
	}

	let mut parts = text.split(COUNT_SEPARATOR);
	// split always yields at least one segment
	let head = parts.next().unwrap_or_default();

	let count = match parts.next() {
		Some(count_text) => {
			let count = Count::parse(count_text);
			if !count.is_valid() {
				if policy == CountPolicy::Strict {
					return Err(TransformError::InvalidCount {
						line,
						value: count_text.trim().to_string(),
					});
				}
				log::warn!("line {line}: count {:?} is not a number", count_text.trim());
			}
			count
		}
		None => {
			if policy == CountPolicy::Strict {
				return Err(TransformError::MissingSeparator { line });
			}
			log::warn!("line {line}: chunk record without '{COUNT_SEPARATOR}'");
			Count::INVALID
		}
	};

	let offset = head
		.split(FIELD_SEPARATOR)
		.next()
		.unwrap_or_default()
		.replacen(OFFSET_OPENER, "", 1);

	log::trace!("line {line}: offset {offset}, count {count}");

	Ok(Some(ChunkRecord {
		line,
		offset,
		count,
	}))
}

/// Collects every chunk record of a listing, in source order
pub fn extract_records(
	source: &str,
	policy: CountPolicy,
) -> Result<Vec<ChunkRecord>, TransformError> {
	let start = std::time::Instant::now();
	let mut records = Vec::new();
	let mut total_lines = 0;

	for (index, text) in source.split('\n').enumerate() {
		total_lines += 1;
		if let Some(record) = parse_record(index + 1, text, policy)? {
			records.push(record);
		}
	}

	log::debug!(
		"extracted {} chunk records from {} lines in {:?}",
		records.len(),
		total_lines,
		start.elapsed()
	);

	Ok(records)
}
