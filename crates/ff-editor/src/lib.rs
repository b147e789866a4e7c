pub mod commands;
pub mod input;
pub mod session;
pub mod shortcuts;
pub mod tools;

pub use session::DesignSession;
pub use tools::{ColorChannel, ToolController, ToolKind};
