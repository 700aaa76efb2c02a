use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use embedjson_cli::EmbedCli;
use embedjson_core::ConvertOptions;
use embedjson_core::EmbedConfig;
use embedjson_core::EmbedError;
use embedjson_core::EmbedResult;
use embedjson_core::convert_file;
use embedjson_core::default_output_path;
use embedjson_core::open_input;
use embedjson_core::transform;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = EmbedCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<EmbedError>() {
			Ok(embed_err) => {
				let report: miette::Report = (*embed_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = if verbose {
		EnvFilter::new(default_level)
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &EmbedCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &EmbedCli) -> EmbedResult<EmbedConfig> {
	if let Some(path) = &args.config {
		return EmbedConfig::load_file(path);
	}

	let root = resolve_root(args);
	Ok(EmbedConfig::load(&root)?.unwrap_or_default())
}

/// Merge command line flags over the config file.
fn resolve_options(args: &EmbedCli, config: &EmbedConfig) -> ConvertOptions {
	let symbol = args
		.symbol
		.clone()
		.unwrap_or_else(|| config.symbol().to_string());

	ConvertOptions::new(symbol).with_bytes_per_line(args.bytes_per_line.or(config.bytes_per_line()))
}

fn run(args: &EmbedCli) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let options = resolve_options(args, &config);

	if args.stdout {
		return run_stdout(&args.input, &options);
	}

	let output = args
		.output
		.clone()
		.unwrap_or_else(|| default_output_path(&args.input, config.extension()));
	tracing::debug!(
		symbol = %options.symbol,
		output = %output.display(),
		"resolved options"
	);
	let summary = convert_file(&args.input, &output, &options)?;

	if !args.quiet {
		println!(
			"{} {} ({} bytes, {} removed)",
			colored!("Generated", green),
			output.display(),
			summary.bytes_emitted,
			summary.bytes_removed()
		);
	}

	Ok(())
}

fn run_stdout(input: &Path, options: &ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
	let input_label = input.display().to_string();
	let reader = open_input(input)?;

	let stdout = std::io::stdout();
	transform(reader, stdout.lock(), options)
		.map_err(|error| error.with_input_path(&input_label))?;

	Ok(())
}
