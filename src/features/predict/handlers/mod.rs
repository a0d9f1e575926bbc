pub mod predict_handler;

pub use predict_handler::{__path_predict, predict};
