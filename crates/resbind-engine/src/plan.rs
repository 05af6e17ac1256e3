//! Invocation synthesis and build-command emission.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use resbind_config::Config;
use resbind_rswift::detect::{detect_rswift, verify_version, RswiftInfo};
use resbind_rswift::invoke::{AccessLevel, BundleSource, InputType, RswiftCommand};

use crate::environment::{classify, BuildEnvironment};
use crate::error::EngineError;
use crate::inputs::resource_inputs;
use crate::output::{resolve_package_output, resolve_xcode_output};
use crate::target::{TargetDescriptor, TargetKind};

/// A synthesized external-process invocation plus its declared outputs, in
/// the shape the host build system consumes for incremental tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCommand {
    /// Human-readable label shown in build logs.
    pub display_name: String,
    /// Absolute path to the generator executable.
    pub executable: PathBuf,
    /// Ordered argument list, flag/value pairs flattened.
    pub arguments: Vec<String>,
    /// Exactly the files the generator will write. The host's
    /// incremental-rebuild detection is keyed on these paths.
    pub output_files: Vec<PathBuf>,
}

/// Synthesize build commands for a target, resolving the generator first.
///
/// Steps:
/// 1. Skip package targets that are not source modules (empty plan)
/// 2. Detect the generator, honoring the config override and version pin
/// 3. Classify the environment and resolve the output location
/// 4. Assemble the invocation and wrap it in a command descriptor
///
/// # Errors
/// Returns an error if the generator cannot be resolved or the output
/// directory cannot be created. An inapplicable target is not an error.
pub fn plan(
    descriptor: &TargetDescriptor,
    config: &Config,
    env: &HashMap<String, String>,
    temp_root: &Path,
) -> Result<Vec<BuildCommand>, EngineError> {
    // Skip before detecting: an uninstalled generator must not fail targets
    // that would produce no command anyway.
    if let TargetDescriptor::Package { target } = descriptor {
        if !target.kind.is_source_module() {
            return Ok(Vec::new());
        }
    }

    let generator = detect_rswift(config.generator.path.as_deref())?;
    if let Some(pin) = &config.generator.version {
        verify_version(&generator, pin)?;
    }

    plan_with_generator(descriptor, &generator, env, temp_root)
}

/// Synthesize build commands for a target using an already-resolved generator.
///
/// Returns exactly one command, or none for package targets that are not
/// source modules. Xcode targets always get a command.
///
/// # Errors
/// Returns an error if the output directory cannot be created.
pub fn plan_with_generator(
    descriptor: &TargetDescriptor,
    generator: &RswiftInfo,
    env: &HashMap<String, String>,
    temp_root: &Path,
) -> Result<Vec<BuildCommand>, EngineError> {
    match descriptor {
        TargetDescriptor::Package { target } => {
            if !target.kind.is_source_module() {
                return Ok(Vec::new());
            }

            // Package staging is unconditionally temp-rooted, so the
            // sandbox signal is irrelevant here.
            let output = resolve_package_output(temp_root, &target.name)?;
            let inputs = resource_inputs(&target.source_files);

            // Only generic modules support module-relative bundle lookup.
            let bundle_source = if target.kind == TargetKind::Generic {
                BundleSource::Module
            } else {
                BundleSource::Finder
            };

            let arguments = RswiftCommand::new()
                .output(&output.generated_file)
                .input_type(InputType::InputFiles)
                .bundle_source(bundle_source)
                .access_level(AccessLevel::Public)
                .input_files(&inputs)
                .build_args()?;

            Ok(vec![BuildCommand {
                display_name: format!("rswift generate resources for {}", target.description()),
                executable: generator.path.clone(),
                arguments,
                output_files: vec![output.generated_file],
            }])
        }
        TargetDescriptor::Xcodeproj { work_dir, target } => {
            let profile = classify(BuildEnvironment::Xcode, env);
            let output =
                resolve_xcode_output(work_dir, temp_root, &target.display_name, &profile)?;

            // IDE targets have no module-relative bundle analogue, so
            // filesystem search is used unconditionally.
            let arguments = RswiftCommand::new()
                .output(&output.generated_file)
                .target(&target.display_name)
                .input_type(InputType::Xcodeproj)
                .bundle_source(BundleSource::Finder)
                .access_level(AccessLevel::Public)
                .build_args()?;

            Ok(vec![BuildCommand {
                display_name: format!("rswift generate resources for {}", target.description()),
                executable: generator.path.clone(),
                arguments,
                output_files: vec![output.generated_file],
            }])
        }
    }
}
