// UI module exports
// Text front-end used by the binary

pub mod text;

pub use text::render;
