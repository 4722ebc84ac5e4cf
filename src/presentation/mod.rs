//! Presentation layer: askama views and the in-memory page.

pub mod document;
pub mod views;
