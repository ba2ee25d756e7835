//! State module for per-domain crawl tracking
//!
//! `DomainState` records when a host was last fetched and which crawl-delay
//! applies to it. The [`PolitenessLedger`](crate::policy::PolitenessLedger)
//! owns one record per distinct host for the lifetime of a crawl run.

mod domain_state;

pub use domain_state::DomainState;
