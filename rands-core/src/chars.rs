//! Character tables.
//!
//! All tables are slices of one static sequence:
//! `a..z`, `A..Z`, `1234567890`, then punctuation.
//! Unions that are not contiguous in that sequence must be built by the caller.

static CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$%^&*()_+[]{};':\",./<>?";

/// Names accepted by [`by_name`], in table order.
pub const NAMES: [&str; 7] = [
	"alpha",
	"lower_alpha",
	"upper_alpha",
	"number",
	"punct",
	"alpha_number",
	"alpha_number_punct",
];

/// Lower and upper case letters.
pub fn alpha() -> &'static [u8] {
	&CHARS[0..52]
}

/// Lower case letters.
pub fn lower_alpha() -> &'static [u8] {
	&CHARS[0..26]
}

/// Upper case letters.
pub fn upper_alpha() -> &'static [u8] {
	&CHARS[26..52]
}

/// Digits, `1` first and `0` last.
pub fn number() -> &'static [u8] {
	&CHARS[52..62]
}

/// Punctuation.
pub fn punct() -> &'static [u8] {
	&CHARS[62..]
}

/// [`alpha`] + [`number`]
pub fn alpha_number() -> &'static [u8] {
	&CHARS[0..62]
}

/// [`alpha`] + [`number`] + [`punct`]
pub fn alpha_number_punct() -> &'static [u8] {
	CHARS
}

/// Looks up a table by name (case-insensitive).
///
/// Returns `None` for unknown names.
pub fn by_name(name: &str) -> Option<&'static [u8]> {
	match name.trim().to_ascii_lowercase().as_str() {
		"alpha" => Some(alpha()),
		"lower_alpha" => Some(lower_alpha()),
		"upper_alpha" => Some(upper_alpha()),
		"number" => Some(number()),
		"punct" => Some(punct()),
		"alpha_number" => Some(alpha_number()),
		"alpha_number_punct" => Some(alpha_number_punct()),
		_ => None,
	}
}
