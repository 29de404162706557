//! Build script for the Spotificity watch-list client.
//!
//! Copies the `.env.example` configuration template into the local data
//! directory the binary reads its `.env` from, so a fresh install has a
//! template next to the place it is expected.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to the local data directory.
///
/// # Destination
///
/// - Linux: `~/.local/share/spotificity/.env.example`
/// - macOS: `~/Library/Application Support/spotificity/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotificity/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or to write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotificity");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        fs::copy(&env_example_path, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
