//! Graph metrics.
//!
//! * [centrality] - closeness centrality
//! * [motifs] - rectangle (4-cycle) counting
//! * [metrics] - degree statistics

pub mod centrality;
pub mod metrics;
pub mod motifs;
