mod artifact_store;
mod generator;

pub use artifact_store::ArtifactStore;
pub use generator::{Generator, RenderContext, RenderedFile};
