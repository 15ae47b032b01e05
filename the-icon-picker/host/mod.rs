pub mod bridge;
pub mod connected;
pub mod editor;
pub mod field;
pub mod standalone;
