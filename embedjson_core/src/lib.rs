//! `embedjson_core` turns a commented, loosely formatted data file (usually
//! JSON) into a C/C++ byte array declaration that can be compiled straight
//! into a binary.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → split into lines (terminator kept)
//!   → Comment stripper (drops `//` and `/* */` outside quotes)
//!   → Whitespace compactor (drops whitespace outside double quotes)
//!   → Byte array writer (one `0xHH` literal per surviving byte)
//!   → `static const char json[] = {..., 0x0a};`
//! ```
//!
//! Quote and comment state never crosses a line boundary. One `0x0a` entry
//! is appended after the data whether or not the source ends with a newline.
//! A line with an unmatched `"` keeps everything after the quote, including
//! its own line feed, so such a line contributes a `0x0a` of its own.
//!
//! ## Modules
//!
//! - [`config`] — Optional `embedjson.toml` with defaults for the symbol
//!   name, output extension and line wrapping.
//!
//! ## Key Types
//!
//! - [`ConvertOptions`] — Symbol name and wrapping for one conversion.
//! - [`ConvertSummary`] — Line and byte counts for a finished conversion.
//! - [`ByteArrayWriter`] — Incremental writer for the array declaration.
//! - [`EmbedError`] — Every failure, with the offending path where known.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use embedjson_core::ConvertOptions;
//! use embedjson_core::DEFAULT_EXTENSION;
//! use embedjson_core::convert_file;
//! use embedjson_core::default_output_path;
//!
//! let input = Path::new("config.json");
//! let output = default_output_path(input, DEFAULT_EXTENSION);
//! let summary = convert_file(input, &output, &ConvertOptions::default()).unwrap();
//! println!("{} bytes removed", summary.bytes_removed());
//! ```

pub use comments::*;
pub use config::*;
pub use convert::*;
pub use emit::*;
pub use error::*;
pub use whitespace::*;

mod comments;
pub mod config;
mod convert;
mod emit;
#[allow(unused_assignments)]
mod error;
mod whitespace;
