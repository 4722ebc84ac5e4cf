//! postboard: list posts from a REST endpoint and submit new ones through a form.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
