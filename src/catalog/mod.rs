//! # Catalog Module
//!
//! Everything that deals with the second catalog, the service an imported
//! playlist is matched against:
//!
//! - [`envelope`] - turns responses of unknown wrapper shape into a resource
//!   list or a single resource without ever failing
//! - [`search`] - the catalog client (search, library playlists)
//! - [`confidence`] - the heuristic match estimate and the matching stage

pub mod confidence;
pub mod envelope;
pub mod search;

pub use confidence::{
    ConfidenceBreakdown, MatchEstimate, apply_estimate, estimate_match, verify_manifest,
};
pub use envelope::{CatalogEnvelope, resource_list, single_resource};
pub use search::{CatalogClient, resource_id, resource_name, search_query};
