//! Build script for the tracklift CLI.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory so it sits next to the `.env` file the application reads.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the local data directory.
///
/// Destination:
/// - Linux: `~/.local/share/tracklift/.env.example`
/// - macOS: `~/Library/Application Support/tracklift/.env.example`
/// - Windows: `%LOCALAPPDATA%/tracklift/.env.example`
///
/// A missing template or a data directory that cannot be written only produce
/// a `cargo:warning`; the build itself never fails because of the copy.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    // Compute target dir (local data dir); sandboxed builds may not be allowed to write there
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("tracklift");
    let copied = fs::create_dir_all(&out_dir).and_then(|_| {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)
    });

    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
