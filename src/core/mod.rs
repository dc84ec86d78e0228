pub mod browser;
pub mod loader;
pub mod logic;
pub mod selector;
pub mod stats;
