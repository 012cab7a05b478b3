// Application data
// Read-only stores injected into the component tree as context

pub mod config_store;
pub mod talent;
