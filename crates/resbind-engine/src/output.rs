//! Output location resolution for generated bindings.

use std::path::{Path, PathBuf};

use resbind_util::fs::ensure_dir;

use crate::environment::EnvironmentProfile;
use crate::error::EngineError;

/// Fixed name of the generated bindings file.
///
/// Must stay stable across builds of the same target: the host build system
/// keys incremental staleness on this exact path.
pub const GENERATED_FILE_NAME: &str = "R.generated.swift";

/// A writable, per-target output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Directory the generated file lives in; created before returning.
    pub directory: PathBuf,
    /// Full path of the generated bindings file.
    pub generated_file: PathBuf,
}

/// Resolve the output location for a package build target.
///
/// Package builds always stage under the system temp area: the package
/// graph's conventional derived-output location is not guaranteed writable
/// for every caller, and the temp area is uniformly safe.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn resolve_package_output(
    temp_root: &Path,
    target_name: &str,
) -> Result<OutputSpec, EngineError> {
    let directory = temp_root.join(target_name);
    ensure_dir(&directory)?;
    let generated_file = directory.join(GENERATED_FILE_NAME);
    Ok(OutputSpec {
        directory,
        generated_file,
    })
}

/// Resolve the output location for an Xcode project target.
///
/// Normally stages under the plugin work directory the IDE allocated. On
/// sandboxed CI that directory is not writable, so the temp area is used
/// instead.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn resolve_xcode_output(
    work_dir: &Path,
    temp_root: &Path,
    display_name: &str,
    profile: &EnvironmentProfile,
) -> Result<OutputSpec, EngineError> {
    let root = if profile.sandboxed_ci {
        temp_root
    } else {
        work_dir
    };
    let directory = root.join(display_name).join("Resources");
    ensure_dir(&directory)?;
    let generated_file = directory.join(GENERATED_FILE_NAME);
    Ok(OutputSpec {
        directory,
        generated_file,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::environment::BuildEnvironment;

    fn xcode_profile(sandboxed_ci: bool) -> EnvironmentProfile {
        EnvironmentProfile {
            kind: BuildEnvironment::Xcode,
            sandboxed_ci,
        }
    }

    #[test]
    fn package_output_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = resolve_package_output(tmp.path(), "Foo").unwrap();

        assert_eq!(spec.directory, tmp.path().join("Foo"));
        assert_eq!(
            spec.generated_file,
            tmp.path().join("Foo").join("R.generated.swift")
        );
        assert!(spec.directory.is_dir());
    }

    #[test]
    fn package_output_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let first = resolve_package_output(tmp.path(), "Foo").unwrap();
        let second = resolve_package_output(tmp.path(), "Foo").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn package_output_unique_per_name() {
        let tmp = tempfile::tempdir().unwrap();
        let a = resolve_package_output(tmp.path(), "Foo").unwrap();
        let b = resolve_package_output(tmp.path(), "Bar").unwrap();
        assert_ne!(a.directory, b.directory);
        assert_ne!(a.generated_file, b.generated_file);
    }

    #[test]
    fn xcode_output_uses_work_dir() {
        let work = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let spec =
            resolve_xcode_output(work.path(), tmp.path(), "MyApp", &xcode_profile(false)).unwrap();

        assert_eq!(
            spec.generated_file,
            work.path()
                .join("MyApp")
                .join("Resources")
                .join("R.generated.swift")
        );
        assert!(spec.directory.is_dir());
    }

    #[test]
    fn xcode_output_sandboxed_ci_redirects_to_temp() {
        let work = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let spec =
            resolve_xcode_output(work.path(), tmp.path(), "MyApp", &xcode_profile(true)).unwrap();

        assert_eq!(
            spec.generated_file,
            tmp.path()
                .join("MyApp")
                .join("Resources")
                .join("R.generated.swift")
        );
        assert!(!work.path().join("MyApp").exists());
    }

    #[test]
    fn xcode_output_is_idempotent() {
        let work = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let profile = xcode_profile(false);
        let first = resolve_xcode_output(work.path(), tmp.path(), "MyApp", &profile).unwrap();
        let second = resolve_xcode_output(work.path(), tmp.path(), "MyApp", &profile).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generated_file_name_is_stable() {
        assert_eq!(GENERATED_FILE_NAME, "R.generated.swift");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Distinct target names never collide on the same directory,
            /// and resolving twice is idempotent.
            #[test]
            fn unique_and_idempotent(
                a in "[A-Za-z][A-Za-z0-9_]{0,12}",
                b in "[A-Za-z][A-Za-z0-9_]{0,12}",
            ) {
                prop_assume!(a != b);
                let tmp = tempfile::tempdir().unwrap();

                let spec_a = resolve_package_output(tmp.path(), &a).unwrap();
                let spec_b = resolve_package_output(tmp.path(), &b).unwrap();
                let spec_a_again = resolve_package_output(tmp.path(), &a).unwrap();

                prop_assert_ne!(spec_a.directory.clone(), spec_b.directory);
                prop_assert_eq!(spec_a, spec_a_again);
            }
        }
    }
}
