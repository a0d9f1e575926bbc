pub mod info_handler;

pub use info_handler::{__path_health, __path_info, health, info};
