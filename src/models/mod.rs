pub mod market;
pub mod plan;
pub mod stats;
pub mod transaction;
pub mod wallet;
