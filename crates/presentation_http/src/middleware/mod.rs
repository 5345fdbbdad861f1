//! HTTP middleware components

pub mod hit_counter;

pub use hit_counter::{HitCountLayer, HitCountService};
