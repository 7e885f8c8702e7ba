// Infrastructure layer - Configuration and catalog documents
pub mod catalog_loader;
pub mod config;
