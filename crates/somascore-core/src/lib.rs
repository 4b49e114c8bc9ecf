pub mod assemble;
pub mod category;
pub mod encode;
mod error;
pub mod input;
pub mod schema;

pub use category::ObesityCategory;
pub use error::PredictError;
pub use input::RawInput;
