pub mod suggest_handler;

pub use suggest_handler::{__path_suggest, suggest};
