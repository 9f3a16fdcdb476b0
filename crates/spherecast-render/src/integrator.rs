use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::geometry::Intersection;
use crate::math::{Ray, Vec3};
use crate::scene::World;
use crate::shading::{quantize, shade};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// 0 renders on the global rayon pool.
    pub threads: usize,
    /// Log progress every N finished rows; 0 disables it.
    pub progress_every: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            threads: 0,
            progress_every: 64,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(RenderError::InvalidSettings("width must be at least 1".into()));
        }
        if self.height < 2 {
            return Err(RenderError::InvalidSettings("height must be at least 2".into()));
        }
        Ok(())
    }
}

/// Quantized RGB pixels in row-major order, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Nearest hit for `ray` and the linear color it shades to.
pub fn trace(world: &World, ray: &Ray) -> (Intersection, Vec3) {
    let hit = world.intersect(ray);
    (hit, shade(&hit, world))
}

pub fn render_pixel(world: &World, camera: &Camera, x: u32, y: u32) -> [u8; 3] {
    let (_, color) = trace(world, &camera.ray(x, y));
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Renders every pixel. Rows are independent and are spread over the rayon
/// pool; the result does not depend on the thread count.
pub fn render_world(world: &World, settings: &RenderSettings) -> Result<Framebuffer> {
    settings.validate()?;

    let camera = Camera::new(settings.width, settings.height);
    let mut frame = Framebuffer::new(settings.width, settings.height);
    let width = settings.width as usize;
    let height = settings.height;
    let progress_every = settings.progress_every;
    let start = Instant::now();
    let counter = AtomicU32::new(0);

    info!(
        width = settings.width,
        height = settings.height,
        spheres = world.spheres().len(),
        lights = world.lights().len(),
        threads = settings.threads,
        "render started"
    );

    with_thread_pool(settings.threads, || {
        frame
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = render_pixel(world, &camera, x as u32, y as u32);
                }

                if progress_every > 0 {
                    let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
                    if done == height || done % progress_every == 0 {
                        let elapsed = start.elapsed().as_secs_f64();
                        let total = elapsed * height as f64 / done as f64;
                        info!(
                            rows = done,
                            of = height,
                            elapsed_s = elapsed,
                            eta_s = (total - elapsed).max(0.0),
                            "render progress"
                        );
                    }
                }
            });
    })?;

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "render finished");
    Ok(frame)
}

fn with_thread_pool<T: Send>(threads: usize, f: impl FnOnce() -> T + Send) -> Result<T> {
    if threads == 0 {
        Ok(f())
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(pool.install(f))
    }
}
