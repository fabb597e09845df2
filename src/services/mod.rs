// Service module exports

pub mod calendar;
pub mod classifier;
pub mod config;
pub mod shift;
