mod generate;
mod health;
mod llm;
mod models;

pub use generate::*;
pub use health::*;
pub use llm::*;
pub use models::*;
