pub mod fallback;
pub mod parser;
pub mod prompt;
pub mod providers;

pub use parser::parse_recommendations;
pub use prompt::build_prompt;
