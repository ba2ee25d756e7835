//! Crawl policy module
//!
//! This module contains the two stateful gates of the decision core:
//! - `PolitenessLedger`: per-host crawl-delay enforcement, consulted by the
//!   frontier scheduler before a fetch is dispatched
//! - `TrapGuard`: duplicate suppression and heuristic trap detection over
//!   the visited set, consulted after a fetch when the page is considered
//!   for retention

mod politeness;
mod trap;

pub use politeness::PolitenessLedger;
pub use trap::{TrapGuard, TrapPredicate};
