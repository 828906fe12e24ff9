// src/core/extractors/mod.rs
//! Per-command payload grammars

pub mod job_data;
pub mod job_portals;
pub mod line_entities;
pub mod resume;

pub use job_data::extract_jobs;
pub use job_portals::extract_portals;
pub use line_entities::extract_entities;
pub use resume::{derive_filename, extract_resume};
