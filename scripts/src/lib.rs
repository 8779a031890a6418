//! Scripts for deploying and operating the token vault contracts.

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod utils;

/// Contract WASM build utils
pub mod build;

/// Contract deployment utils
pub mod deploy;

/// The per-network record of deployed contract addresses
pub mod registry;

pub mod tx;
