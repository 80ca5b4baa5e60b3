pub mod language;
pub mod project;
pub mod resource;
pub mod resource_container;
pub mod source_translation;
pub mod translation;
