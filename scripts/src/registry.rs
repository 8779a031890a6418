//! Per-network JSON registry of deployed contract addresses.

use std::{
    fmt::LowerHex,
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use json::JsonValue;

use crate::errors::ScriptError;

/// The deployed-address registry, backed by a JSON file keyed first by
/// network name then by contract name.
pub struct AddressRegistry {
    /// Path of the backing JSON file
    path: PathBuf,
    /// Parsed registry contents
    entries: JsonValue,
}

impl AddressRegistry {
    /// Loads the registry at `path`, starting empty if the file does not
    /// exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| ScriptError::RegistryUpdate(e.to_string()))?;
            json::parse(&raw)
                .map_err(|e| ScriptError::RegistryUpdate(e.to_string()))?
        } else {
            JsonValue::new_object()
        };
        Ok(Self { path, entries })
    }

    /// Looks up the address recorded for `contract` on `network`.
    pub fn get(
        &self,
        network: &str,
        contract: &str,
    ) -> Result<Address, ScriptError> {
        let value = &self.entries[network][contract];
        let raw = value.as_str().ok_or_else(|| {
            ScriptError::RegistryLookup(format!(
                "no '{contract}' entry for network '{network}'"
            ))
        })?;
        raw.parse::<Address>()
            .map_err(|e| ScriptError::RegistryLookup(e.to_string()))
    }

    /// Records the address of `contract` on `network`, replacing any
    /// previous entry.
    pub fn set<T: LowerHex>(
        &mut self,
        network: &str,
        contract: &str,
        address: T,
    ) {
        self.entries[network][contract] =
            JsonValue::String(format!("{address:#x}"));
    }

    /// Writes the registry back to its file.
    pub fn flush(&self) -> Result<(), ScriptError> {
        fs::write(&self.path, json::stringify_pretty(self.entries.clone(), 4))
            .map_err(|e| ScriptError::RegistryUpdate(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf};

    use alloy::primitives::address;

    use super::AddressRegistry;

    fn scratch_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("{}-{name}", std::process::id()))
    }

    #[test]
    fn records_and_reloads_addresses() {
        let path = scratch_file("registry-roundtrip.json");
        let token = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

        let mut registry =
            AddressRegistry::load(&path).expect("missing file loads empty");
        registry.set("dev", "Token", token);
        registry.flush().expect("flush");

        let reloaded = AddressRegistry::load(&path).expect("load");
        assert_eq!(token, reloaded.get("dev", "Token").expect("get"));

        fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn missing_entry_is_an_error() {
        let path = scratch_file("registry-missing.json");
        let registry =
            AddressRegistry::load(&path).expect("missing file loads empty");
        registry
            .get("dev", "Vault")
            .expect_err("empty registry has no entries");
    }

    #[test]
    fn overwrite_preserves_other_networks() {
        let path = scratch_file("registry-overwrite.json");
        let first = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let second = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

        let mut registry =
            AddressRegistry::load(&path).expect("missing file loads empty");
        registry.set("dev", "Vault", first);
        registry.set("arbitrum-sepolia", "Vault", first);
        registry.set("dev", "Vault", second);

        assert_eq!(second, registry.get("dev", "Vault").expect("get"));
        assert_eq!(
            first,
            registry.get("arbitrum-sepolia", "Vault").expect("get")
        );
    }
}
