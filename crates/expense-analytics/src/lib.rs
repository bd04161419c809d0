//! expense-analytics
//!
//! The expense analytics engine: filtering, pagination, aggregation and chart geometry.
//! Depends on expense-domain. Synchronous and side-effect free; collaborators that touch
//! the network or disk are described here as traits and implemented elsewhere.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod paginate;
pub mod store;
pub mod summary;
pub mod time;

pub use aggregate::*;
pub use error::{AnalyticsError, StoreError};
pub use filter::*;
pub use geometry::*;
pub use paginate::*;
pub use store::*;
pub use summary::*;
pub use time::*;

#[cfg(test)]
mod tests;
