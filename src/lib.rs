pub mod app;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod error;
pub mod markup;
pub mod model;
pub mod transport;
pub mod ui;
pub mod view_models;

pub use app::LessonApp;
