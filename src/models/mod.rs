//! Model catalogs and download backends.

pub mod catalog;
pub mod fetcher;
pub mod speech;
pub mod translation;
