// Cache Simulator Library

pub mod generator;
pub mod input;
pub mod logger;
pub mod models;
pub mod runner;
pub mod stats;
