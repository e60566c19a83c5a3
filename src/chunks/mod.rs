pub mod record;
pub mod types;

pub use record::{extract_records, parse_record};
pub use types::{ChunkRecord, Count, CountPolicy};
