pub mod loader;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod viewer;
