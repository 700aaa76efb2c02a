use std::io::Write;
use std::num::NonZeroUsize;

use crate::EmbedError;
use crate::EmbedResult;

/// Byte appended once after all data so every array ends with a newline.
pub const TRAILING_BYTE: u8 = b'\n';

/// Separator placed between two literals on the same output line.
const SEPARATOR: &str = ", ";

/// Separator used instead of [`SEPARATOR`] when a wrapped line is full.
const WRAPPED_SEPARATOR: &str = ",\n";

/// Format a byte as a lowercase two-digit hex literal, e.g. `0x7b`.
pub fn hex_literal(byte: u8) -> String {
	format!("0x{byte:02x}")
}

/// Incrementally writes a `static const char <symbol>[] = {...};`
/// declaration.
///
/// The header is written by [`ByteArrayWriter::begin`] before any data, so
/// callers can feed bytes line by line without buffering the whole array.
#[derive(Debug)]
pub struct ByteArrayWriter<W: Write> {
	sink: W,
	bytes_per_line: Option<NonZeroUsize>,
	written: usize,
}

impl<W: Write> ByteArrayWriter<W> {
	/// Write the declaration header for `symbol` and return the writer.
	///
	/// `symbol` is used verbatim.
	pub fn begin(
		mut sink: W,
		symbol: &str,
		bytes_per_line: Option<NonZeroUsize>,
	) -> EmbedResult<Self> {
		write!(sink, "static const char {symbol}[] = {{").map_err(EmbedError::StreamWrite)?;

		Ok(Self {
			sink,
			bytes_per_line,
			written: 0,
		})
	}

	/// Number of literals written so far.
	pub fn written(&self) -> usize {
		self.written
	}

	/// Append one literal per byte.
	pub fn push_bytes(&mut self, bytes: &[u8]) -> EmbedResult<()> {
		for &byte in bytes {
			self.push_byte(byte)?;
		}

		Ok(())
	}

	fn push_byte(&mut self, byte: u8) -> EmbedResult<()> {
		if self.written > 0 {
			let wrap = self
				.bytes_per_line
				.is_some_and(|width| self.written % width.get() == 0);
			let separator = if wrap { WRAPPED_SEPARATOR } else { SEPARATOR };
			self.sink
				.write_all(separator.as_bytes())
				.map_err(EmbedError::StreamWrite)?;
		}

		self.sink
			.write_all(hex_literal(byte).as_bytes())
			.map_err(EmbedError::StreamWrite)?;
		self.written += 1;

		Ok(())
	}

	/// Append the trailing newline literal, close the declaration and flush.
	///
	/// Returns the sink and the total number of literals written.
	pub fn finish(mut self) -> EmbedResult<(W, usize)> {
		self.push_byte(TRAILING_BYTE)?;
		self.sink
			.write_all(b"};\n")
			.map_err(EmbedError::StreamWrite)?;
		self.sink.flush().map_err(EmbedError::StreamWrite)?;

		Ok((self.sink, self.written))
	}
}
