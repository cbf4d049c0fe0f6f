pub mod counter;
pub mod effects;
pub mod spy;
pub mod timeline;
