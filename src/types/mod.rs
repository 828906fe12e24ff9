// src/types/mod.rs
pub mod records;

pub use records::{
    CommandKind, JobRecord, LinkedEntityRecord, RenderDescriptor, ResumeRecord, StructuredRecord,
};
