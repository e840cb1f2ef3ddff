//! Version ranges

mod bound;
mod format;
mod version_range;

pub use bound::Bound;
pub use format::RangeStyle;
pub use version_range::VersionRange;
