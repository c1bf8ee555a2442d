//! Core entry point for the dashboard_wireframes crate.

pub mod canvas;
pub mod error;
pub mod generator;
pub mod layout;
pub mod panel;
pub mod pdf;
pub mod svg;
pub mod wrap;
