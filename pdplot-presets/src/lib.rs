pub mod annotation;
pub mod config;
pub mod document;
pub mod error;
pub mod fill;
pub mod layout;
pub mod marker;
pub mod preset;
pub mod registry;
pub mod topology;
pub mod validate;

pub use pdplot_common::{color::Color, colorscale::Colorscale};
