//! CPU ray caster for sphere scenes and pixel-map output.

pub mod math;
pub mod camera;
pub mod geometry;
pub mod scene;
pub mod shading;
pub mod integrator;
pub mod image_out;
pub mod error;

pub use error::RenderError;
pub use image_out::{encode, write_ppm, OutputFormat};
pub use integrator::{render_world, trace, Framebuffer, RenderSettings};
pub use scene::World;
