//! URL handling module for Scour
//!
//! This module provides URL normalization, host/subdomain extraction,
//! label-aware suffix matching, and scope filtering.

mod domain;
mod normalize;
mod scope;
mod suffix;

// Re-export main types and functions
pub use domain::{first_label, host_of};
pub use normalize::NormalizedUrl;
pub use scope::ScopeFilter;
pub use suffix::host_matches_suffix;
