//! Command implementations for hexo2astro CLI

pub mod completions;
pub mod convert;
pub mod routes;
pub mod version;
