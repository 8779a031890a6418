//! Builds the contract crates to WASM ahead of deployment.

use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    constants::WASM_TARGET_TRIPLE, errors::ScriptError,
    utils::command_success_or,
};

/// Builder for the release WASM artifact of a contract package
pub struct WasmBuilder;

impl WasmBuilder {
    /// Full build of the given contract `package`, returning the path to the
    /// optimized WASM file
    pub fn build_wasm(&self, package: &str) -> Result<PathBuf, ScriptError> {
        let current_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").map_err(
            |e| ScriptError::ContractCompilation(e.to_string()),
        )?);
        let workspace_path =
            current_dir
                .parent()
                .ok_or(ScriptError::ContractCompilation(String::from(
                    "Could not find contracts workspace directory",
                )))?;

        // Build the initial wasm file
        let wasm_file_path =
            self.build_initial_wasm(workspace_path, package)?;

        // Build the optimized wasm file
        self.build_opt_wasm(&wasm_file_path)
    }

    /// Build the initial wasm file
    fn build_initial_wasm(
        &self,
        workspace_path: &Path,
        package: &str,
    ) -> Result<PathBuf, ScriptError> {
        let mut build_cmd = Command::new("cargo");
        build_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        // Run from the contracts workspace root
        build_cmd.current_dir(workspace_path);
        // Invoke the build command
        build_cmd.arg("build");
        // Use the release profile
        build_cmd.arg("-r");
        // Build the requested contract package
        build_cmd.arg("-p");
        build_cmd.arg(package);
        // Set the build target to WASM
        build_cmd.arg("--target");
        build_cmd.arg(WASM_TARGET_TRIPLE);

        command_success_or(build_cmd, "Failed to build contract WASM")?;

        // Then, fetch the build directory
        let target_dir = workspace_path
            .join("target")
            .join(WASM_TARGET_TRIPLE)
            .join("release");

        // And find the package's artifact inside it
        let wasm_file_name = format!("{}.wasm", package.replace('-', "_"));
        let wasm_file_path = target_dir.join(&wasm_file_name);
        if !wasm_file_path.exists() {
            return Err(ScriptError::ContractCompilation(format!(
                "Could not find contract WASM file {wasm_file_name}"
            )));
        }

        Ok(wasm_file_path)
    }

    /// Build the optimized wasm file
    fn build_opt_wasm(
        &self,
        wasm_file_path: &Path,
    ) -> Result<PathBuf, ScriptError> {
        let opt_wasm_file_path = wasm_file_path.with_extension("wasm.opt");

        let mut opt_cmd = Command::new("wasm-opt");
        opt_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        opt_cmd.arg(wasm_file_path);
        opt_cmd.arg("-o");
        opt_cmd.arg(opt_wasm_file_path.clone());
        opt_cmd.arg("-O4");

        command_success_or(opt_cmd, "Failed to optimize contract WASM")?;

        if !opt_wasm_file_path.exists() {
            return Err(ScriptError::ContractCompilation(String::from(
                "wasm-opt did not produce an output file",
            )));
        }

        Ok(opt_wasm_file_path)
    }
}
