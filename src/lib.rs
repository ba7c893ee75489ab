//! Ohana web - a search front end for an Ohana organization directory.
//!
//! Searches the directory API, retries empty searches with a curated
//! replacement keyword, tags results with top-level service categories,
//! and renders search results and organization detail pages.

pub mod backend;
pub mod cli;
pub mod config;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;
