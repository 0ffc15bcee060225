//! File-based logging for the plugin.
//!
//! A plugin pane has no stderr the user can see, so `tracing` output goes to
//! a rotating log file instead.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → bookcase.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/bookcase/bookcase.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Configurable Level**: `trace_level` accepts any `EnvFilter` directive
//!
//! # Usage
//!
//! Initialize tracing early in plugin lifecycle:
//!
//! ```rust
//! use bookcase::observability::init_tracing;
//! use bookcase::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
