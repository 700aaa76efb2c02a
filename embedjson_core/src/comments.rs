//! Removal of `//` and `/* ... */` comments that sit outside quoted text.
//!
//! Each line is scanned on its own. Quoted spans opened by either `"` or `'`
//! are copied through verbatim, and no state survives the end of the line:
//! an unterminated quote keeps the rest of the line, an unterminated block
//! comment drops it.

/// Opens a line comment that runs to the end of the line.
pub const LINE_COMMENT: &[u8] = b"//";
/// Opens a block comment.
pub const BLOCK_COMMENT_OPEN: &[u8] = b"/*";
/// Closes a block comment.
pub const BLOCK_COMMENT_CLOSE: &[u8] = b"*/";

/// Returns `true` for the characters that delimit a quoted span in this
/// stage.
pub fn is_quote(byte: u8) -> bool {
	matches!(byte, b'"' | b'\'')
}

/// Find the first occurrence of `needle` in `haystack`.
pub(crate) fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	if needle.is_empty() || haystack.len() < needle.len() {
		return None;
	}

	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

/// Strip every comment span that is not inside a quoted span.
///
/// Spans are recognized left to right and the earliest one wins, so a quote
/// inside a comment never opens a string and a comment marker inside a string
/// never opens a comment. Quote delimiters are kept.
///
/// ```
/// use embedjson_core::strip_comments;
///
/// let line = br#"{"url": "http://x"} // trailing"#;
/// assert_eq!(strip_comments(line), br#"{"url": "http://x"} "#.to_vec());
/// ```
pub fn strip_comments(line: &[u8]) -> Vec<u8> {
	let mut output = Vec::with_capacity(line.len());
	let mut cursor = 0;

	while cursor < line.len() {
		let rest = &line[cursor..];
		let byte = rest[0];

		if is_quote(byte) {
			// Copy the whole span including both delimiters. Without a closing
			// quote the remainder of the line counts as quoted.
			let span_len = rest[1..]
				.iter()
				.position(|&b| b == byte)
				.map_or(rest.len(), |close| close + 2);
			output.extend_from_slice(&rest[..span_len]);
			cursor += span_len;
			continue;
		}

		if rest.starts_with(LINE_COMMENT) {
			break;
		}

		if rest.starts_with(BLOCK_COMMENT_OPEN) {
			let body = &rest[BLOCK_COMMENT_OPEN.len()..];
			let Some(close) = find_subslice(body, BLOCK_COMMENT_CLOSE) else {
				break;
			};
			cursor += BLOCK_COMMENT_OPEN.len() + close + BLOCK_COMMENT_CLOSE.len();
			continue;
		}

		output.push(byte);
		cursor += 1;
	}

	output
}
