//! Reusable HTML components for page generation
//!
//! Maud component functions that make up the page layout: head metadata,
//! the global stylesheet, the navigation list and the document wrapper that
//! composes them around rendered content.

pub mod layout;
pub mod metadata;
pub mod nav;
pub mod theme;
