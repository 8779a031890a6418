//! On-chain interaction helpers.

/// ABI definitions of the deployed contracts
pub mod abi;
/// RPC client creation
pub mod client;
/// Contract state reads
pub mod reader;
/// Contract call transactions
pub mod sender;
