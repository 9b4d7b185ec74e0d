//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`: the edge task writes the tracker, the sampler snapshots it on
//! a fixed cadence, the broadcaster drains the latest sample to the radio
//! link.

pub mod broadcast;
pub mod edge;
pub mod sampler;

pub use broadcast::broadcast_task;
pub use edge::edge_task;
pub use sampler::sampler_task;
