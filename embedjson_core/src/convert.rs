use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::Path;
use std::path::PathBuf;

use crate::ByteArrayWriter;
use crate::EmbedError;
use crate::EmbedResult;
use crate::compact_whitespace;
use crate::strip_comments;

/// Symbol name used when the caller does not provide one.
pub const DEFAULT_SYMBOL: &str = "json";

/// Extension given to derived output paths.
pub const DEFAULT_EXTENSION: &str = "cpp";

/// Options controlling a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
	/// Name of the emitted array, used verbatim.
	pub symbol: String,
	/// Break the literal list onto a new line after this many entries. `None`
	/// keeps the whole array on the declaration line.
	pub bytes_per_line: Option<NonZeroUsize>,
}

impl ConvertOptions {
	pub fn new(symbol: impl Into<String>) -> Self {
		Self {
			symbol: symbol.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_bytes_per_line(mut self, bytes_per_line: Option<NonZeroUsize>) -> Self {
		self.bytes_per_line = bytes_per_line;
		self
	}
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			symbol: DEFAULT_SYMBOL.to_string(),
			bytes_per_line: None,
		}
	}
}

/// Counts collected while converting one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
	/// Lines read from the input, including ones that were dropped.
	pub lines_read: usize,
	/// Lines that still had content after cleaning.
	pub lines_emitted: usize,
	/// Raw bytes read from the input.
	pub bytes_read: usize,
	/// Literals in the emitted array, including the trailing newline.
	pub bytes_emitted: usize,
}

impl ConvertSummary {
	/// Bytes removed as comments or whitespace.
	pub fn bytes_removed(&self) -> usize {
		(self.bytes_read + 1).saturating_sub(self.bytes_emitted)
	}
}

/// Run one line through comment stripping and whitespace compaction.
pub fn clean_line(line: &[u8]) -> Vec<u8> {
	compact_whitespace(&strip_comments(line))
}

/// Derive the output path by replacing the final extension of `input` with
/// `extension`.
///
/// `foo.json` becomes `foo.cpp`, and an input without an extension gains one.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
	input.with_extension(extension.trim_start_matches('.'))
}

/// Stream `reader` line by line into a byte array declaration on `writer`.
///
/// Read failures surface as [`EmbedError::StreamRead`] and write failures as
/// [`EmbedError::StreamWrite`]. Output already written is not rolled back.
pub fn transform<R: BufRead, W: Write>(
	mut reader: R,
	writer: W,
	options: &ConvertOptions,
) -> EmbedResult<ConvertSummary> {
	let mut array = ByteArrayWriter::begin(writer, &options.symbol, options.bytes_per_line)?;
	let mut summary = ConvertSummary::default();
	let mut line = Vec::new();

	loop {
		line.clear();
		let read = reader
			.read_until(b'\n', &mut line)
			.map_err(EmbedError::StreamRead)?;
		if read == 0 {
			break;
		}

		summary.lines_read += 1;
		summary.bytes_read += read;

		let cleaned = clean_line(&line);
		if cleaned.is_empty() {
			tracing::trace!(line = summary.lines_read, "dropped empty line");
			continue;
		}

		array.push_bytes(&cleaned)?;
		summary.lines_emitted += 1;
	}

	let (_, written) = array.finish()?;
	summary.bytes_emitted = written;

	Ok(summary)
}

/// Convert in memory and return the declaration text.
pub fn transform_to_string(input: &[u8], options: &ConvertOptions) -> EmbedResult<String> {
	let mut output = Vec::new();
	transform(input, &mut output, options)?;

	// Only ASCII is ever written.
	Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Open `input` for reading and make sure the first read succeeds.
///
/// Directories open fine on some platforms but fail on the first read, so
/// the buffer is filled here before anything is written to a destination.
pub fn open_input(input: &Path) -> EmbedResult<BufReader<File>> {
	let unreadable = |source: std::io::Error| {
		EmbedError::InputUnreadable {
			path: input.display().to_string(),
			source,
		}
	};
	let mut reader = BufReader::new(File::open(input).map_err(unreadable)?);
	reader.fill_buf().map_err(unreadable)?;

	Ok(reader)
}

/// Convert the file at `input` and write the declaration to `output`,
/// creating or truncating it.
///
/// The input is opened and read from before the output is touched, so a
/// missing or unreadable input leaves the destination alone. Both handles are
/// closed on every exit path.
pub fn convert_file(
	input: &Path,
	output: &Path,
	options: &ConvertOptions,
) -> EmbedResult<ConvertSummary> {
	let input_label = input.display().to_string();
	let output_label = output.display().to_string();
	tracing::debug!(
		input = %input_label,
		output = %output_label,
		symbol = %options.symbol,
		"converting file"
	);

	let reader = open_input(input)?;

	let file = File::create(output).map_err(|source| {
		EmbedError::OutputUnwritable {
			path: output_label.clone(),
			source,
		}
	})?;

	let summary = transform(reader, BufWriter::new(file), options).map_err(|error| {
		error
			.with_input_path(&input_label)
			.with_output_path(&output_label)
	})?;

	tracing::debug!(
		lines_read = summary.lines_read,
		lines_emitted = summary.lines_emitted,
		bytes_read = summary.bytes_read,
		bytes_emitted = summary.bytes_emitted,
		"conversion finished"
	);

	Ok(summary)
}
