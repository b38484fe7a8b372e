//! Storefront catalog client library
//!
//! A small async client for the Fake Store products API.

pub mod error;
pub mod model;

mod client;

pub use client::*;
