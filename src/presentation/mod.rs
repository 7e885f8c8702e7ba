// Presentation layer - Presenters and the form session
pub mod form_session;
pub mod presenter;
