use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum EmbedError {
	#[error(transparent)]
	#[diagnostic(code(embedjson::io_error))]
	Io(#[from] std::io::Error),

	#[error("could not read file: `{path}`")]
	#[diagnostic(
		code(embedjson::input_unreadable),
		help("check that the input path exists and is readable")
	)]
	InputUnreadable {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("could not write file: `{path}`")]
	#[diagnostic(
		code(embedjson::output_unwritable),
		help("check that the output directory exists and is writable")
	)]
	OutputUnwritable {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to read from input stream")]
	#[diagnostic(code(embedjson::stream_read))]
	StreamRead(#[source] std::io::Error),

	#[error("failed to write to output stream")]
	#[diagnostic(code(embedjson::stream_write))]
	StreamWrite(#[source] std::io::Error),

	#[error("could not read config file: `{path}`")]
	#[diagnostic(
		code(embedjson::config_unreadable),
		help("check the path passed to `--config`")
	)]
	ConfigUnreadable {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file `{path}`: {reason}")]
	#[diagnostic(
		code(embedjson::config_parse),
		help("supported keys are `symbol`, `extension` and `bytes_per_line`")
	)]
	ConfigParse { path: String, reason: String },

	#[error("invalid config value: {0}")]
	#[diagnostic(code(embedjson::invalid_config))]
	InvalidConfig(String),
}

impl EmbedError {
	/// Attach the input path to a stream read failure.
	pub fn with_input_path(self, path: &str) -> Self {
		match self {
			Self::StreamRead(source) => {
				Self::InputUnreadable {
					path: path.to_string(),
					source,
				}
			}
			other => other,
		}
	}

	/// Attach the output path to a stream write failure.
	pub fn with_output_path(self, path: &str) -> Self {
		match self {
			Self::StreamWrite(source) => {
				Self::OutputUnwritable {
					path: path.to_string(),
					source,
				}
			}
			other => other,
		}
	}
}

pub type EmbedResult<T> = Result<T, EmbedError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
