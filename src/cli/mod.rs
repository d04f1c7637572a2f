//! # CLI Module
//!
//! This module provides the command-line interface layer for tracklift. Each
//! command reads its input, hands it to the ingestion engine and prints the
//! resulting playlist.
//!
//! ## Commands
//!
//! - [`parse`] - Parses a pasted track list from a file or stdin. A paste that
//!   is just a playlist link is imported remotely instead.
//! - [`import`] - Imports a Spotify playlist by link, URI or id.
//! - [`verify`] - Parses a track list and runs the matching stage, optionally
//!   searching the second catalog for each track.
//! - [`library`] - Lists the playlists in the second catalog's library.
//!
//! ## Error Handling
//!
//! Engine errors are shown through [`IngestError::user_message`](crate::error::IngestError::user_message),
//! which adds a suggestion on how to fix the problem, and end the program
//! with a non-zero status.
//!
//! ## Usage Patterns
//!
//! ```bash
//! pbpaste | tracklift parse                          # parse the clipboard
//! tracklift parse --file tracks.txt --json           # machine-readable output
//! tracklift import https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! tracklift verify --file tracks.txt --lookup        # check against the catalog
//! ```

mod import;
mod library;
mod output;
mod parse;
mod verify;

pub use import::import;
pub use library::library;
pub use parse::parse;
pub use verify::verify;
