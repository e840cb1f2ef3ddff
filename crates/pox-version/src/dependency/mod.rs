//! Package dependencies and dependency lists

#[allow(clippy::module_inception)]
mod dependency;
mod list_parser;
mod platform;

pub use dependency::{Dependency, DependencySet, TargetPlatform};
pub use list_parser::DependencyListParser;
pub use platform::{PassThroughResolver, PlatformResolver};
