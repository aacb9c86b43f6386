//! Links Entity Module

pub mod link;

pub use link::Link;
