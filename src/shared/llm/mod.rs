pub mod parser;
pub mod response;

pub use parser::parse_json;
pub use response::LlmResponse;
