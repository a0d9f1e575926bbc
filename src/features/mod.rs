pub mod chat;
pub mod info;
pub mod predict;
pub mod suggest;
