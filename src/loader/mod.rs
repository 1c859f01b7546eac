//! Catalog client and batch fetcher
//!
//! Turns a range of dex numbers into an ordered list of raw creature records

pub mod catalog;
pub mod fetcher;

pub use catalog::{Catalog, HttpCatalog};
pub use fetcher::{FetchFailure, FetchReport, Fetcher};
