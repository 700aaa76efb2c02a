/// The only character that delimits a quoted span for whitespace compaction.
///
/// Single quotes are deliberately not recognized here even though
/// [`strip_comments`](crate::strip_comments) honours them, so whitespace
/// between single quotes is removed.
pub const COMPACT_QUOTE: u8 = b'"';

/// Whitespace removed outside quoted spans: space, tab, line feed, carriage
/// return, vertical tab and form feed.
pub fn is_blank(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Remove whitespace outside double-quoted spans.
///
/// The line is split on `"` into alternating outside and inside segments,
/// starting with an outside one. Only outside segments lose their whitespace;
/// the quotes themselves and inside segments are kept as they are. A trailing
/// unmatched quote therefore protects the rest of the line.
pub fn compact_whitespace(line: &[u8]) -> Vec<u8> {
	let mut output = Vec::with_capacity(line.len());

	for (index, segment) in line.split(|&b| b == COMPACT_QUOTE).enumerate() {
		if index > 0 {
			output.push(COMPACT_QUOTE);
		}

		if index % 2 == 0 {
			output.extend(segment.iter().copied().filter(|&b| !is_blank(b)));
		} else {
			output.extend_from_slice(segment);
		}
	}

	output
}
