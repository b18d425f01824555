//! File-based structured logging.
//!
//! Log records from `tracing` macros are formatted by `tracing-subscriber`'s
//! `fmt` layer and appended to
//! `~/.local/share/zellij/formshell/formshell.log` through a size-rotating
//! writer (10 MB, three backups).
//!
//! # Configuration
//!
//! The filter is taken from the `trace_level` plugin option (any
//! `EnvFilter` directive, e.g. `debug` or `formshell=trace`). Default: `info`,
//! which records submissions, saves and validation errors.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - [`file_writer`]: Rotating file writer

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
