//! Spotificity Watch-List Client Library
//!
//! This library provides the session state and remote-invocation action layer
//! of an interactive client that manages a watch-list of music artists. The
//! watch-list itself lives behind a remote service reached through named,
//! payload-based remote calls; this crate mirrors it locally, disambiguates
//! free-text artist searches and drives the interactive menu.
//!
//! # Modules
//!
//! - `cli` - Prompts, disambiguation flow, user-facing actions and the main menu
//! - `config` - Configuration management and environment variables
//! - `management` - Watch-list cache and per-session state
//! - `remote` - Remote invocation contract, HTTP gateway and typed calls
//! - `types` - Data structures and type definitions
//! - `utils` - Formatting helpers and progress indicators
//!
//! # Example
//!
//! ```
//! use spotificity::{config, remote::GatewayInvoker};
//!
//! #[tokio::main]
//! async fn main() -> spotificity::Res<()> {
//!     config::load_env().await?;
//!     let invoker = GatewayInvoker::new(config::GatewayConfig::from_env()?)?;
//!     // Drive the menu...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod remote;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use spotificity::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching monitored artists...");
/// info!("Found {} candidates", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm that a remote write went through and the local
/// watch-list was updated accordingly.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1.
///
/// # Behavior
///
/// Only the binary's startup path uses this macro. Once the menu is running
/// every failure is reported with [`warning!`] and control returns to the
/// menu, so the session never dies on an operational error.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: failed remote calls, rejected input and
/// precondition violations that abort an operation without side effects.
///
/// # Example
///
/// ```
/// warning!("Please enter a valid selection.");
/// warning!("Could not reach the backend: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
