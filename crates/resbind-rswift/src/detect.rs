//! Generator detection and version parsing.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::RswiftError;

/// Information about a detected `rswift` installation.
#[derive(Debug, Clone)]
pub struct RswiftInfo {
    /// Absolute path to the `rswift` binary.
    pub path: PathBuf,
    /// Parsed semantic version (e.g. "7.3.2").
    pub version: String,
    /// SHA-256 hex digest of the `rswift` binary.
    pub fingerprint: String,
}

/// Locate `rswift` and determine its version and fingerprint.
///
/// Resolution order:
/// 1. Explicit `override_path` (from `resbind.toml`)
/// 2. `RSWIFT_PATH` environment variable
/// 3. `PATH` lookup via `which`
///
/// # Errors
/// Returns an error if `rswift` is not found, is not executable, returns an
/// unparseable version string, or cannot be fingerprinted.
pub fn detect_rswift(override_path: Option<&Path>) -> Result<RswiftInfo, RswiftError> {
    let path = resolve_rswift_path(override_path)?;
    check_executable(&path)?;
    let version = query_version(&path)?;
    let fingerprint = compute_fingerprint(&path)?;

    Ok(RswiftInfo {
        path,
        version,
        fingerprint,
    })
}

/// Check a detected installation against a configured version pin.
///
/// # Errors
/// Returns `VersionMismatch` if the detected version differs from `pin`.
pub fn verify_version(info: &RswiftInfo, pin: &str) -> Result<(), RswiftError> {
    if info.version == pin {
        Ok(())
    } else {
        Err(RswiftError::VersionMismatch {
            expected: pin.to_owned(),
            actual: info.version.clone(),
        })
    }
}

/// Parse a semver version from raw `rswift --version` output.
///
/// Handles formats like:
/// - `R.swift v7.3.2`
/// - `rswift 7.3.2`
/// - `7.3.2`
pub fn parse_version(raw: &str) -> Option<String> {
    // Look for a semver-like pattern: digits.digits.digits (optional -suffix)
    for token in raw.split_whitespace() {
        let trimmed = token.trim_start_matches('v');
        if is_semver_like(trimmed) {
            return Some(trimmed.to_owned());
        }
    }
    None
}

fn is_semver_like(s: &str) -> bool {
    let mut parts = s.split('.');
    let Some(major) = parts.next() else {
        return false;
    };
    let Some(minor) = parts.next() else {
        return false;
    };
    let Some(patch_part) = parts.next() else {
        return false;
    };
    // No more than 3 dot-separated components for basic semver
    if parts.next().is_some() {
        return false;
    }

    // patch_part may contain a pre-release suffix like "0-beta1"
    let patch = patch_part.split('-').next().unwrap_or(patch_part);

    major.chars().all(|c| c.is_ascii_digit())
        && minor.chars().all(|c| c.is_ascii_digit())
        && patch.chars().all(|c| c.is_ascii_digit())
}

fn resolve_rswift_path(override_path: Option<&Path>) -> Result<PathBuf, RswiftError> {
    if let Some(p) = override_path {
        if p.exists() {
            return Ok(p.to_path_buf());
        }
        return Err(RswiftError::NotFound);
    }

    if let Ok(env_path) = std::env::var("RSWIFT_PATH") {
        let p = PathBuf::from(env_path);
        if p.exists() {
            return Ok(p);
        }
        return Err(RswiftError::NotFound);
    }

    which_rswift().ok_or(RswiftError::NotFound)
}

fn which_rswift() -> Option<PathBuf> {
    let output = Command::new("which").arg("rswift").output().ok()?;
    if output.status.success() {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let trimmed = path_str.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(PathBuf::from(trimmed))
    } else {
        None
    }
}

fn check_executable(path: &Path) -> Result<(), RswiftError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path).map_err(|_| RswiftError::NotExecutable {
            path: path.to_path_buf(),
        })?;
        let permissions = metadata.permissions();
        // Check user/group/other execute bits
        if permissions.mode() & 0o111 == 0 {
            return Err(RswiftError::NotExecutable {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn query_version(path: &PathBuf) -> Result<String, RswiftError> {
    let output = Command::new(path)
        .arg("--version")
        .output()
        .map_err(|source| RswiftError::Exec { source })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // rswift prints its banner to stdout; fall back to stderr just in case.
    let raw = if stdout.trim().is_empty() {
        stderr.trim().to_owned()
    } else {
        stdout.trim().to_owned()
    };

    parse_version(&raw).ok_or_else(|| RswiftError::VersionParse {
        output: raw.clone(),
    })
}

fn compute_fingerprint(path: &Path) -> Result<String, RswiftError> {
    resbind_util::hash::sha256_file(path).map_err(|source| RswiftError::Fingerprint {
        path: path.to_path_buf(),
        source,
    })
}
