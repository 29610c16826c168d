//! Rendering surfaces
//!
//! The [`Surface`] trait is the only thing the simulation core draws through.
//! Two implementations ship with the crate: a recording [`CommandList`] and a
//! tessellating [`VertexBatch`].

pub mod batch;
pub mod commands;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use batch::VertexBatch;
pub use commands::{CommandList, DrawCommand};
pub use surface::{Color, Surface, colors, rgb8};
pub use vertex::Vertex;
