// src/core/mod.rs
//! Command detection, payload extraction and render dispatch

pub mod cards;
pub mod extractors;
pub mod link_resolver;
pub mod matcher;
pub mod registry;
pub mod renderer;

pub use cards::Card;
pub use link_resolver::favicon_url;
pub use matcher::find_keyword;
pub use registry::{CommandEntry, CommandRegistry, ExtractFn};
pub use renderer::Renderer;
