//! Default values for sdk-docs configuration.
//!
//! This module provides the built-in SDK list and documentation URLs used when
//! no configuration file overrides them.

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sdk-docs.yaml";

/// Documentation source tree, relative to the working directory.
pub const SOURCE_DIR: &str = "source";

/// SDKs whose get-started guides are published, in toctree order.
pub const SDK_NAMES: [&str; 8] = [
    "csharp", "python", "elixir", "esp32", "java", "qt5", "go", "rust",
];

/// Clone URL of the SDK repository called `name`.
pub fn sdk_repo_url(name: &str) -> String {
    format!("https://github.com/astarte-platform/astarte-device-sdk-{name}.git")
}

/// Repository holding the rendered API documentation of every SDK.
pub fn docs_repo_url() -> String {
    "https://github.com/astarte-platform/docs.git".to_string()
}

/// Public URL under which the docs repository's API subdirectory is served.
pub fn api_docs_base_url() -> String {
    "https://docs.astarte-platform.org/device-sdks".to_string()
}

/// Directory of the docs repository holding one directory per platform.
pub fn api_docs_subdir() -> String {
    "device-sdks".to_string()
}
