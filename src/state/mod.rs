pub mod observation_series;
pub mod reference;
pub mod stat_catalog;
