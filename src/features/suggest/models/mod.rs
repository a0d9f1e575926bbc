pub mod activity;
pub mod suggestion;

pub use activity::ActivityKind;
pub use suggestion::*;
