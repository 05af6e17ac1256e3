//! Invocation construction for the `rswift generate` subcommand.

use std::path::{Path, PathBuf};

use crate::error::RswiftError;

/// Source of truth the generator uses for resource discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// A flat list of resource file paths, passed via repeated `--input-files`.
    #[default]
    InputFiles,
    /// An Xcode project file; the generator discovers resources itself.
    Xcodeproj,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::InputFiles => "input-files",
            InputType::Xcodeproj => "xcodeproj",
        }
    }
}

/// Runtime strategy the generated bindings use to locate their resource bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleSource {
    /// Module-relative lookup (`Bundle.module`); only valid for generic
    /// package modules.
    Module,
    /// Filesystem-search lookup; works everywhere, so it is the default.
    #[default]
    Finder,
}

impl BundleSource {
    pub fn as_str(self) -> &'static str {
        match self {
            BundleSource::Module => "module",
            BundleSource::Finder => "finder",
        }
    }
}

/// Visibility of the generated symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessLevel {
    Internal,
    /// This plugin exists to produce cross-module-consumable bindings, so
    /// public is the default.
    #[default]
    Public,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Internal => "internal",
            AccessLevel::Public => "public",
        }
    }
}

/// Builder for constructing an `rswift generate` invocation.
///
/// The builder serializes whatever combination it is given; choosing an
/// environment-correct combination (e.g. `--target` only with the xcodeproj
/// input type) is the planner's job.
#[derive(Debug, Default)]
pub struct RswiftCommand {
    output: Option<PathBuf>,
    target: Option<String>,
    input_type: InputType,
    input_files: Vec<PathBuf>,
    bundle_source: BundleSource,
    access_level: AccessLevel,
}

impl RswiftCommand {
    /// Create a new empty command builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated bindings output path.
    pub fn output(mut self, path: &Path) -> Self {
        self.output = Some(path.to_path_buf());
        self
    }

    /// Name the IDE target (xcodeproj input type only).
    pub fn target(mut self, name: &str) -> Self {
        self.target = Some(name.to_owned());
        self
    }

    /// Set the resource discovery input type.
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set the resource input files (input-files input type only).
    pub fn input_files(mut self, paths: &[PathBuf]) -> Self {
        self.input_files = paths.to_vec();
        self
    }

    /// Set the runtime bundle lookup strategy.
    pub fn bundle_source(mut self, source: BundleSource) -> Self {
        self.bundle_source = source;
        self
    }

    /// Set the visibility of the generated symbols.
    pub fn access_level(mut self, level: AccessLevel) -> Self {
        self.access_level = level;
        self
    }

    /// Build the argument list without executing.
    ///
    /// # Errors
    /// Returns an error if the output path is not set.
    pub fn build_args(&self) -> Result<Vec<String>, RswiftError> {
        let Some(output) = &self.output else {
            return Err(RswiftError::NoOutput);
        };

        let mut args = Vec::new();

        // Subcommand and positional output path
        args.push("generate".to_owned());
        args.push(output.display().to_string());

        // IDE target name
        if let Some(target) = &self.target {
            args.push("--target".to_owned());
            args.push(target.clone());
        }

        // Resource discovery source
        args.push("--input-type".to_owned());
        args.push(self.input_type.as_str().to_owned());

        // Runtime bundle lookup strategy
        args.push("--bundle-source".to_owned());
        args.push(self.bundle_source.as_str().to_owned());

        // Generated symbol visibility
        args.push("--access-level".to_owned());
        args.push(self.access_level.as_str().to_owned());

        // Resource input files, order preserved from the target's source list
        for file in &self.input_files {
            args.push("--input-files".to_owned());
            args.push(file.display().to_string());
        }

        Ok(args)
    }
}
