pub mod bridge;
pub mod console;
