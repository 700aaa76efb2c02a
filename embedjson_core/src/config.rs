use std::num::NonZeroUsize;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_EXTENSION;
use crate::DEFAULT_SYMBOL;
use crate::EmbedError;
use crate::EmbedResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"embedjson.toml",
	".embedjson.toml",
	".config/embedjson.toml",
];

/// Configuration loaded from an `embedjson.toml` file.
///
/// ```toml
/// symbol = "default_config"
/// extension = "h"
/// bytes_per_line = 20
/// ```
///
/// Every key is optional. Values given on the command line take precedence.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
	/// Symbol name for the emitted array. Defaults to `json`.
	#[serde(default)]
	pub symbol: Option<String>,
	/// Extension for derived output paths. Defaults to `cpp`.
	#[serde(default)]
	pub extension: Option<String>,
	/// Wrap the emitted literals after this many entries.
	#[serde(default)]
	pub bytes_per_line: Option<usize>,
}

impl EmbedConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no candidate exists.
	pub fn load(root: &Path) -> EmbedResult<Option<EmbedConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load and validate the config at an explicit path.
	pub fn load_file(path: &Path) -> EmbedResult<EmbedConfig> {
		tracing::debug!(path = %path.display(), "loading config");
		let content = std::fs::read_to_string(path).map_err(|source| {
			EmbedError::ConfigUnreadable {
				path: path.display().to_string(),
				source,
			}
		})?;
		Self::from_toml(&content, path)
	}

	fn from_toml(content: &str, path: &Path) -> EmbedResult<EmbedConfig> {
		let config: EmbedConfig = toml::from_str(content).map_err(|e| {
			EmbedError::ConfigParse {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;
		config.validate()?;

		Ok(config)
	}

	fn validate(&self) -> EmbedResult<()> {
		if self.symbol.as_deref().is_some_and(str::is_empty) {
			return Err(EmbedError::InvalidConfig(
				"`symbol` must not be empty".to_string(),
			));
		}

		if self
			.extension
			.as_deref()
			.is_some_and(|ext| ext.trim_start_matches('.').is_empty())
		{
			return Err(EmbedError::InvalidConfig(
				"`extension` must not be empty".to_string(),
			));
		}

		if self.bytes_per_line == Some(0) {
			return Err(EmbedError::InvalidConfig(
				"`bytes_per_line` must be greater than zero".to_string(),
			));
		}

		Ok(())
	}

	/// Symbol to use when none is given explicitly.
	pub fn symbol(&self) -> &str {
		self.symbol.as_deref().unwrap_or(DEFAULT_SYMBOL)
	}

	/// Extension for derived output paths, without a leading dot.
	pub fn extension(&self) -> &str {
		self.extension
			.as_deref()
			.map_or(DEFAULT_EXTENSION, |ext| ext.trim_start_matches('.'))
	}

	/// Configured wrap width, if any.
	pub fn bytes_per_line(&self) -> Option<NonZeroUsize> {
		self.bytes_per_line.and_then(NonZeroUsize::new)
	}
}
