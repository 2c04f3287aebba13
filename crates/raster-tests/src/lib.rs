//! Integration tests for raster-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between raster-core buffers and the raster-ops engines.
