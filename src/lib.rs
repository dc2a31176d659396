pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod indicator;
pub mod market;
pub mod model;
pub mod prediction;
pub mod report;
pub mod watchlist;
