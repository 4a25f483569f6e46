pub mod error;
pub mod json;
pub mod model;

pub use model::Settings;
