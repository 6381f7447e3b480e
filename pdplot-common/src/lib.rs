pub mod color;
pub mod colorscale;
pub mod error;
pub mod number;
pub mod types;
