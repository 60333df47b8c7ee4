pub mod aggregation;

pub use aggregation::{round_to, Tally};
