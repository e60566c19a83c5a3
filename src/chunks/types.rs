use std::fmt;

/// A `Chunk (<offset> , <size>) => <count>` line reduced to the fields we export
#[derive(Debug, PartialEq, Clone)]
pub struct ChunkRecord {
	/// 1-based line number in the source listing
	pub line: usize,
	pub offset: String,
	pub count: Count,
}

/// How a chunk line with a missing or non-numeric count is handled
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CountPolicy {
	/// keep the row and emit `NaN` as its count
	#[default]
	Lenient,
	/// fail the whole run
	Strict,
}

/// Numeric count of a chunk record. `NaN` marks count text that is not a number.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Count(pub f64);

impl Count {
	pub const INVALID: Count = Count(f64::NAN);

	/// Reads count text the way the listing tools write it: surrounding whitespace is
	/// ignored, blank text counts as zero, and `0x`/`0o`/`0b` integers are accepted.
	pub fn parse(text: &str) -> Self {
		let text = text.trim();

		if text.is_empty() {
			return Self(0.0);
		}

		let value = match text {
			"Infinity" | "+Infinity" => f64::INFINITY,
			"-Infinity" => f64::NEG_INFINITY,
			_ if text
				.chars()
				.any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) =>
			{
				parse_prefixed_integer(text)
			}
			_ => text.parse().unwrap_or(f64::NAN),
		};

		Self(value)
	}

	pub fn is_valid(&self) -> bool {
		!self.0.is_nan()
	}
}

fn parse_prefixed_integer(text: &str) -> f64 {
	let (radix, digits) = match text.get(..2) {
		Some("0x" | "0X") => (16, &text[2..]),
		Some("0o" | "0O") => (8, &text[2..]),
		Some("0b" | "0B") => (2, &text[2..]),
		_ => return f64::NAN,
	};

	if digits.is_empty() {
		return f64::NAN;
	}

	// accumulated in f64 so literals wider than any integer type stay finite
	digits
		.chars()
		.try_fold(0.0, |acc: f64, c| {
			c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
		})
		.unwrap_or(f64::NAN)
}

impl fmt::Display for Count {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let value = self.0;

		if value.is_nan() {
			f.write_str("NaN")
		} else if value.is_infinite() {
			f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
		} else if value == 0.0 {
			// covers -0
			f.write_str("0")
		} else if value.abs() >= 1e21 || value.abs() < 1e-6 {
			// exponent form carries an explicit sign, e.g. `1e+21` and `1e-7`
			let exp = format!("{:e}", value);
			match exp.split_once('e') {
				Some((mantissa, power)) if !power.starts_with('-') => {
					write!(f, "{mantissa}e+{power}")
				}
				_ => f.write_str(&exp),
			}
		} else {
			write!(f, "{}", value)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_plain_and_padded_counts() {
		assert_eq!(Count::parse("5"), Count(5.0));
		assert_eq!(Count::parse("  7 "), Count(7.0));
		assert_eq!(Count::parse("12\r"), Count(12.0));
		assert_eq!(Count::parse("-3"), Count(-3.0));
		assert_eq!(Count::parse("2.5"), Count(2.5));
		assert_eq!(Count::parse(".5"), Count(0.5));
		assert_eq!(Count::parse("1e3"), Count(1000.0));
	}

	#[test]
	fn test_parse_blank_count_is_zero() {
		assert_eq!(Count::parse(""), Count(0.0));
		assert_eq!(Count::parse("   "), Count(0.0));
	}

	#[test]
	fn test_parse_prefixed_integers() {
		assert_eq!(Count::parse("0x1F"), Count(31.0));
		assert_eq!(Count::parse("0o17"), Count(15.0));
		assert_eq!(Count::parse("0b101"), Count(5.0));
		assert!(!Count::parse("0x").is_valid());
		assert!(!Count::parse("0x+1").is_valid());
		assert!(!Count::parse("0xZZ").is_valid());
	}

	#[test]
	fn test_parse_wide_prefixed_integer_stays_finite() {
		// 33 hex digits, one past what u128 holds
		let count = Count::parse("0x100000000000000000000000000000000");

		assert!(count.is_valid());
		assert_eq!(count, Count(2f64.powi(128)));
	}

	#[test]
	fn test_parse_rejects_words() {
		for text in ["abc", "inf", "nan", "infinity", "12 apples", "e"] {
			assert!(!Count::parse(text).is_valid(), "{text:?} should not parse");
		}
		assert_eq!(Count::parse("-Infinity"), Count(f64::NEG_INFINITY));
	}

	#[test]
	fn test_display() {
		assert_eq!(Count(5.0).to_string(), "5");
		assert_eq!(Count(2.5).to_string(), "2.5");
		assert_eq!(Count(-0.0).to_string(), "0");
		assert_eq!(Count(f64::INFINITY).to_string(), "Infinity");
		assert_eq!(Count(f64::NEG_INFINITY).to_string(), "-Infinity");
		assert_eq!(Count::INVALID.to_string(), "NaN");
	}

	#[test]
	fn test_display_uses_exponent_outside_plain_range() {
		assert_eq!(Count(1e21).to_string(), "1e+21");
		assert_eq!(Count(-1.5e22).to_string(), "-1.5e+22");
		assert_eq!(Count(1e-7).to_string(), "1e-7");
		assert_eq!(Count(1e20).to_string(), "100000000000000000000");
		assert_eq!(Count(0.000001).to_string(), "0.000001");
	}
}
