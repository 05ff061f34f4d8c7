//! Balanced-clustering engine: a primal network-simplex solver driven by
//! a Lloyd-style outer loop, plus an exclusive-lasso coordinate-descent
//! alternative.
//!
//! The three public entry points are [`cluster_hard`], [`cluster_soft`],
//! and [`cluster_lasso`] (and [`cluster_hard_bounded`] for caller-chosen
//! size bounds). Everything else in this crate — the distance kernel,
//! the cost-matrix builder, the initializers, the centroid updater, and
//! the network-simplex solver itself — is implementation detail reached
//! through those entry points.

pub mod centroid;
pub mod cost;
pub mod distance;
pub mod error;
pub mod init;
mod outer;
pub mod simplex;
mod validate;

pub use error::{ClusterError, ClusterResult};
pub use init::InitMethod;
pub use outer::{ClusterOutcome, cluster_hard, cluster_hard_bounded, cluster_lasso, cluster_soft};
