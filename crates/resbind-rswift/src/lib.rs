//! Generator detection and invocation construction for `rswift`.

pub mod detect;
pub mod error;
pub mod invoke;

pub use detect::{detect_rswift, verify_version, RswiftInfo};
pub use error::RswiftError;
pub use invoke::{AccessLevel, BundleSource, InputType, RswiftCommand};
