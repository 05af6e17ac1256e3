//! Build environment classification.

use std::collections::HashMap;

/// Which build orchestration environment is driving the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEnvironment {
    /// Generic package build graph.
    Package,
    /// IDE-native Xcode project build.
    Xcode,
}

/// Derived, per-invocation environment facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentProfile {
    pub kind: BuildEnvironment,
    /// True when running inside an Xcode Cloud CI sandbox, which denies
    /// writes to the conventional derived-data output location.
    pub sandboxed_ci: bool,
}

/// Environment variables Xcode Cloud sets on every build.
///
/// <https://developer.apple.com/documentation/xcode/environment-variable-reference>
pub const XCODE_CLOUD_ENV_KEYS: [&str; 17] = [
    "CI",
    "CI_BUILD_ID",
    "CI_BUILD_NUMBER",
    "CI_BUNDLE_ID",
    "CI_COMMIT",
    "CI_DERIVED_DATA_PATH",
    "CI_PRODUCT",
    "CI_PRODUCT_ID",
    "CI_PRODUCT_PLATFORM",
    "CI_PROJECT_FILE_PATH",
    "CI_START_CONDITION",
    "CI_TEAM_ID",
    "CI_WORKFLOW",
    "CI_WORKSPACE",
    "CI_XCODE_PROJECT",
    "CI_XCODE_SCHEME",
    "CI_XCODEBUILD_ACTION",
];

/// Snapshot the process environment into a plain map.
///
/// Classification reads only an injected snapshot, never ambient global
/// state, so callers control exactly what the classifier sees.
pub fn snapshot() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Whether the environment looks like an Xcode Cloud build.
///
/// A strict key-presence test: true iff every required key exists in the
/// map, regardless of its value. A single absent key means false.
pub fn is_xcode_cloud(env: &HashMap<String, String>) -> bool {
    XCODE_CLOUD_ENV_KEYS.iter().all(|key| env.contains_key(*key))
}

/// Classify the build environment.
///
/// Package builds never report sandboxed CI; the sandbox signal only exists
/// for Xcode project builds.
pub fn classify(kind: BuildEnvironment, env: &HashMap<String, String>) -> EnvironmentProfile {
    let sandboxed_ci = match kind {
        BuildEnvironment::Package => false,
        BuildEnvironment::Xcode => is_xcode_cloud(env),
    };
    EnvironmentProfile { kind, sandboxed_ci }
}
