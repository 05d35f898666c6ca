//! UI components for the greeting viewer.

mod app;
mod confetti;
mod distance;
mod finale;
mod landing;
mod reasons;
mod wishes;

pub use app::*;
pub use confetti::*;
pub use distance::*;
pub use finale::*;
pub use landing::*;
pub use reasons::*;
pub use wishes::*;
