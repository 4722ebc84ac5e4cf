//! Application services: listing and submitting posts against a page surface.

pub mod api;
pub mod board;
pub mod error;
pub mod lister;
pub mod page;
pub mod submitter;

#[cfg(test)]
pub(crate) mod testing;
