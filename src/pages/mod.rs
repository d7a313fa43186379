//! Page components for the CGN site.

mod landing;

pub use landing::Landing;
