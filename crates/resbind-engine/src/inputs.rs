//! Resource input enumeration for package targets.

use std::path::PathBuf;

use crate::target::{FileKind, SourceFile};

/// Filter a target's declared source entries down to the ones the generator
/// consumes: resources and unclassified files, never recognized source code.
///
/// This is a stable filter — surviving entries keep the target's declared
/// order. The order feeds the generator's resource-merging order, which
/// affects generated symbol ordering.
pub fn resource_inputs(files: &[SourceFile]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|f| matches!(f.kind, FileKind::Resource | FileKind::Unknown))
        .map(|f| f.path.clone())
        .collect()
}
