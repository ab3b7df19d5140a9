// Library exports for testing
pub mod canvas;
pub mod capability;
pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod render;

pub use config::GeneratorConfig;
pub use error::{IconError, Result};
pub use generate::{generate, GenerationReport, WrittenIcon};
pub use render::{render, IconGeometry, IconImage, RenderRequest};
