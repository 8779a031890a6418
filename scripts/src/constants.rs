//! Constants used in the deploy scripts

use crate::errors::ScriptError;

/// Network targeted when no `--network` flag is given.
pub const DEFAULT_NETWORK: &str = "dev";

/// File recording deployed contract addresses, keyed by network.
pub const REGISTRY_FILE: &str = "deployed.json";

/// Cargo package name of the asset token contract.
pub const TOKEN_PACKAGE: &str = "asset-token";

/// Cargo package name of the vault contract.
pub const VAULT_PACKAGE: &str = "token-vault";

/// Registry key of the asset token contract.
pub const TOKEN_CONTRACT: &str = "Token";

/// Registry key of the vault contract.
pub const VAULT_CONTRACT: &str = "Vault";

/// The target triple for the WASM build target
pub const WASM_TARGET_TRIPLE: &str = "wasm32-unknown-unknown";

/// Built-in RPC endpoints per network.
const NETWORK_RPC_URLS: &[(&str, &str)] = &[
    ("dev", "http://localhost:8547"),
    ("arbitrum-sepolia", "https://sepolia-rollup.arbitrum.io/rpc"),
    ("arbitrum-one", "https://arb1.arbitrum.io/rpc"),
];

/// Resolves the RPC endpoint for `network`.
///
/// Precedence: the `--rpc-url` flag, then the `RPC_URL` environment variable,
/// then the built-in default for the network.
pub fn resolve_rpc_url(
    network: &str,
    flag: Option<&str>,
) -> Result<String, ScriptError> {
    if let Some(url) = flag {
        return Ok(url.to_string());
    }
    if let Ok(url) = std::env::var("RPC_URL") {
        return Ok(url);
    }
    NETWORK_RPC_URLS
        .iter()
        .find(|(name, _)| *name == network)
        .map(|(_, url)| url.to_string())
        .ok_or_else(|| ScriptError::UnknownNetwork(network.to_string()))
}
