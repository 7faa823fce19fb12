pub mod block;
pub mod error;
pub mod generator;
pub mod recipe;
pub mod types;
pub mod validator;

pub use block::{Block, BlockRegistry};
pub use error::GeneratorError;
pub use generator::{generate_workflow, GeneratorOutput};
pub use recipe::Recipe;
pub use validator::{validate_workflow, ValidationResult};
