use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Embed a commented JSON file in C/C++ source as a byte array.",
	long_about = "embedjson strips comments and insignificant whitespace from a data file and \
	              writes the remaining bytes as a `static const char <symbol>[] = {...};` \
	              declaration.\n\nText inside double quotes is kept exactly as written. The \
	              emitted array always ends with a single newline byte.\n\nExamples:\n  \
	              embedjson device.json             Write device.cpp with symbol `json`\n  \
	              embedjson device.json -s device   Name the array `device`\n  embedjson \
	              device.json --stdout  Print the declaration instead"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmbedCli {
	/// Input file to convert.
	pub input: PathBuf,

	/// Output file. Defaults to the input path with its extension replaced
	/// (`foo.json` becomes `foo.cpp`).
	#[arg(long, short, conflicts_with = "stdout")]
	pub output: Option<PathBuf>,

	/// Name of the generated array. Defaults to the config value or `json`.
	#[arg(long, short)]
	pub symbol: Option<String>,

	/// Write the declaration to standard output instead of a file.
	#[arg(long, default_value_t = false)]
	pub stdout: bool,

	/// Start a new line after this many byte literals.
	#[arg(long, value_name = "N")]
	pub bytes_per_line: Option<NonZeroUsize>,

	/// Explicit config file. Skips discovery of `embedjson.toml`.
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Directory searched for `embedjson.toml`, `.embedjson.toml` and
	/// `.config/embedjson.toml`. Defaults to the current directory.
	#[arg(long, short, value_name = "DIR")]
	pub path: Option<PathBuf>,

	/// Enable debug logging on stderr.
	#[arg(long, short, default_value_t = false, conflicts_with = "quiet")]
	pub verbose: bool,

	/// Do not print a summary after writing the output file.
	#[arg(long, short, default_value_t = false)]
	pub quiet: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
