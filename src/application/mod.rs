// Application layer - Sizing use cases and the catalog seam
pub mod board_catalog;
pub mod engine;
pub mod sizing_service;
pub mod validator;
