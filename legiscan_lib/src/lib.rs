//! Research layer for legislative data: batched fetching, session
//! resolution, name matching, and the composite research operations.
//!
//! Wraps the `legiscan_api` client with concurrency-bounded batch
//! execution, partial-failure isolation, and the pure classification
//! helpers the composite operations are built from.

pub mod batch;
pub mod error;
pub mod matching;
pub mod provider;
pub mod research;
pub mod session;
pub mod sponsors;
pub mod validation;

pub use legiscan_api;
pub use legiscan_api::types;

pub use error::ResearchError;
pub use provider::LegislativeDataProvider;
pub use research::{
    find_legislator, legislator_votes, primary_authored_bills, AuthoredBill, AuthoredBillReport,
    LegislatorMatch, LegislatorSearch, LegislatorVoteReport, VoteRecord, VoteTally,
};
