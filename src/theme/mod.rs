//! Global styles for the CGN site.

mod styles;

pub use styles::GLOBAL_STYLES;
