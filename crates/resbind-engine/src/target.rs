//! Build-target descriptors supplied by the host build system.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Classification of a single source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    /// Recognized source code; never fed to the generator.
    Source,
    /// A declared resource (asset catalogs, storyboards, string tables, ...).
    Resource,
    /// Unclassified by the host; the generator decides what to do with it.
    Unknown,
}

/// One entry in a target's declared source list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Kind of a package build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    Generic,
    Executable,
    Snippet,
    Test,
    Macro,
    Binary,
    Plugin,
}

impl TargetKind {
    /// Whether targets of this kind carry compilable sources and can
    /// therefore consume generated bindings. Binary and plugin targets
    /// cannot, and get no build command.
    pub fn is_source_module(self) -> bool {
        matches!(
            self,
            TargetKind::Generic
                | TargetKind::Executable
                | TargetKind::Snippet
                | TargetKind::Test
                | TargetKind::Macro
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Generic => "generic",
            TargetKind::Executable => "executable",
            TargetKind::Snippet => "snippet",
            TargetKind::Test => "test",
            TargetKind::Macro => "macro",
            TargetKind::Binary => "binary",
            TargetKind::Plugin => "plugin",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compilable unit in a package build graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTarget {
    pub name: String,
    pub kind: TargetKind,
    #[serde(default)]
    pub source_files: Vec<SourceFile>,
}

impl PackageTarget {
    /// Human-readable description used in command display labels.
    pub fn description(&self) -> String {
        format!("{} module {}", self.kind, self.name)
    }
}

/// The product an Xcode target produces (application, framework, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcodeProduct {
    pub kind: String,
}

/// A target in an Xcode project build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcodeTarget {
    pub display_name: String,
    #[serde(default)]
    pub product: Option<XcodeProduct>,
}

impl XcodeTarget {
    /// Human-readable description used in command display labels.
    pub fn description(&self) -> String {
        match &self.product {
            Some(product) => format!("{} {}", product.kind, self.display_name),
            None => self.display_name.clone(),
        }
    }
}

/// A build target plus the environment context it arrived from.
///
/// The two orchestration environments expose structurally different target
/// metadata (flat file list vs. named-target/product model), so this is a
/// tagged variant rather than a common trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "context", rename_all = "kebab-case")]
pub enum TargetDescriptor {
    /// A target in a generic package build graph.
    Package { target: PackageTarget },
    /// A target in an IDE project build, with the plugin work directory
    /// the IDE allocated for generated files.
    Xcodeproj {
        work_dir: PathBuf,
        target: XcodeTarget,
    },
}

impl TargetDescriptor {
    /// Read and parse a JSON target descriptor from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|source| EngineError::DescriptorRead {
            path: path.display().to_string(),
            source,
        })?;
        let descriptor: TargetDescriptor =
            serde_json::from_str(&content).map_err(|source| EngineError::DescriptorParse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(descriptor)
    }
}
