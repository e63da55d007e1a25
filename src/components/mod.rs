pub mod app;
pub mod editor;
pub mod profile;
pub mod search;
pub mod viewer;
