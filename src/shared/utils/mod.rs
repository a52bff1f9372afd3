pub mod formatting;
pub mod logger;
pub mod validation;

pub use validation::Validator;
