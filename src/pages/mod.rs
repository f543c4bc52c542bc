pub mod guide;
pub mod index;

pub use guide::GuidePage;
pub use index::Index;
