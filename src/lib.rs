pub mod bit;
pub mod error;
pub mod generator;
pub mod view;

pub use bit::{BitSource, BitValue, RngBitSource};
pub use error::GeneratorError;
pub use generator::{
    GenerationController, GenerationMode, GenerationParameters, GenerationState, Snapshot,
};
pub use view::{result_rows, split_width, ResultRow, Stats};
