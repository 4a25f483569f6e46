mod controller;
mod model;
mod timer;

pub use controller::GenerationController;
pub use model::{GenerationMode, GenerationParameters, GenerationState, Snapshot};
