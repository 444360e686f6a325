//! compmap - heuristic component map for front-end codebases
//!
//! This crate scans `.tsx` and `.js` files and answers two questions:
//! which named components does each file export, and which named
//! components does it import from project-local modules.

pub mod analysis;
pub mod report;
