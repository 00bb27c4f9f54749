//! Multi-source city-data aggregation.
//!
//! Given a place name, [`Aggregator`] resolves coordinates through a
//! [`cityscope_core::Geocoder`], then fans out concurrently to the
//! weather and point-of-interest providers and folds the outcomes into
//! one [`AggregationResult`]. Only geocoding failures abort the run;
//! every downstream source degrades independently to an absent/empty
//! field with a per-source failure flag.
//!
//! [`RecipeLookup`] is a sibling operation sharing the provider-call
//! contract but not the coordinate pipeline.

pub mod aggregate;
pub mod error;
pub mod recipe;
pub mod types;

pub use aggregate::Aggregator;
pub use error::AggregateError;
pub use recipe::RecipeLookup;
pub use types::{AggregationResult, PopulationBreakdown, SourceFailures};
