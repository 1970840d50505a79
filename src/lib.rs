pub mod app;
pub mod config;
pub mod language;
pub mod output;
pub mod poeditor;
pub mod project;
pub mod sync;
pub mod terms;
pub mod translation;
