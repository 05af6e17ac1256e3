//! Build-command synthesis for the rswift resource generator.

pub mod environment;
pub mod error;
pub mod inputs;
pub mod output;
pub mod plan;
pub mod target;

pub use environment::{classify, is_xcode_cloud, snapshot, BuildEnvironment, EnvironmentProfile};
pub use error::EngineError;
pub use inputs::resource_inputs;
pub use output::{resolve_package_output, resolve_xcode_output, OutputSpec, GENERATED_FILE_NAME};
pub use plan::{plan, plan_with_generator, BuildCommand};
pub use target::{
    FileKind, PackageTarget, SourceFile, TargetDescriptor, TargetKind, XcodeProduct, XcodeTarget,
};
