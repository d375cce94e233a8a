pub mod analysis;
pub mod confidence;
pub mod distribution;
pub mod histogram;
pub mod probability;
pub mod statistics;
