//! Scene container and the built-in reference scene.

use crate::error::{RenderError, Result};
use crate::geometry::{Intersection, Light, Sphere};
use crate::math::{Ray, Vec3};
use spherecast_model::{LightSpec, SceneFile, SphereSpec, SCENE_VERSION};

/// Immutable once built; shared read-only by every render worker.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    atmosphere_color: Vec3,
}

impl World {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, atmosphere_color: Vec3) -> Self {
        Self {
            spheres,
            lights,
            atmosphere_color,
        }
    }

    /// Three unit spheres at staggered depths, two huge spheres standing in
    /// for the ceiling and the floor, and two opposed tinted lights.
    pub fn reference() -> Self {
        const R: f64 = 100_000.0;
        const MAX_C: f64 = 1.0;
        const MIN_C: f64 = 0.1;

        let spheres = vec![
            Sphere {
                position: Vec3::new(-2.0, 0.0, 6.0),
                squared_radius: 1.0,
                color: Vec3::new(MAX_C, MAX_C, MIN_C),
            },
            Sphere {
                position: Vec3::new(0.0, 0.0, 5.0),
                squared_radius: 1.0,
                color: Vec3::new(MAX_C, MIN_C, MIN_C),
            },
            Sphere {
                position: Vec3::new(2.0, 0.0, 4.0),
                squared_radius: 1.0,
                color: Vec3::new(2.0 * MIN_C, 4.0 * MIN_C, MAX_C),
            },
            Sphere {
                position: Vec3::new(0.0, 1.0 + R, 0.0),
                squared_radius: R * R,
                color: Vec3::new(MIN_C, MAX_C, MIN_C),
            },
            Sphere {
                position: Vec3::new(0.0, -1.0 - R, 0.0),
                squared_radius: R * R,
                color: Vec3::new(MAX_C, MAX_C, MAX_C),
            },
        ];

        let lights = vec![
            Light::new(Vec3::new(1.0, 1.0, 2.0), 0.4 * Vec3::new(1.0, 0.8, 0.5)),
            Light::new(Vec3::new(-1.0, -1.0, -2.0), 0.4 * Vec3::new(0.5, 0.5, 1.0)),
        ];

        Self::new(spheres, lights, 0.3 * Vec3::new(0.5, 0.5, 1.0))
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn atmosphere_color(&self) -> Vec3 {
        self.atmosphere_color
    }

    /// Nearest hit over all spheres. On equal distances the earlier sphere
    /// wins.
    pub fn intersect(&self, ray: &Ray) -> Intersection {
        let mut nearest = Intersection::MISS;
        for sphere in &self.spheres {
            let candidate = sphere.intersect(ray);
            if candidate.distance < nearest.distance {
                nearest = candidate;
            }
        }
        nearest
    }

    pub fn to_scene_file(&self) -> SceneFile {
        SceneFile {
            version: SCENE_VERSION,
            spheres: self
                .spheres
                .iter()
                .map(|sphere| SphereSpec {
                    position: sphere.position.into(),
                    squared_radius: sphere.squared_radius,
                    color: sphere.color.into(),
                })
                .collect(),
            lights: self
                .lights
                .iter()
                .map(|light| LightSpec {
                    direction: light.direction().into(),
                    color: light.color.into(),
                })
                .collect(),
            atmosphere_color: self.atmosphere_color.into(),
        }
    }
}

impl TryFrom<&SceneFile> for World {
    type Error = RenderError;

    /// Scenes from disk are checked here so the render loop can trust them:
    /// every hit the pinhole camera can see ends up with non-negative color
    /// channels and a non-negative depth.
    fn try_from(scene: &SceneFile) -> Result<Self> {
        if scene.version != SCENE_VERSION {
            return Err(invalid(format!(
                "unsupported scene version {} (expected {})",
                scene.version, SCENE_VERSION
            )));
        }

        let atmosphere_color = Vec3::from(scene.atmosphere_color);
        check_color("atmosphere_color", atmosphere_color)?;

        let camera = Vec3::zero();
        let mut spheres = Vec::with_capacity(scene.spheres.len());
        for (idx, spec) in scene.spheres.iter().enumerate() {
            let sphere = Sphere {
                position: spec.position.into(),
                squared_radius: spec.squared_radius,
                color: spec.color.into(),
            };
            if !sphere.position.is_finite() {
                return Err(invalid(format!("sphere {idx}: position must be finite")));
            }
            if !(sphere.squared_radius.is_finite() && sphere.squared_radius > 0.0) {
                return Err(invalid(format!(
                    "sphere {idx}: squared_radius must be positive, got {}",
                    sphere.squared_radius
                )));
            }
            if sphere.contains(camera) {
                return Err(invalid(format!("sphere {idx}: encloses the camera")));
            }
            check_color(&format!("sphere {idx}: color"), sphere.color)?;
            spheres.push(sphere);
        }

        let mut lights = Vec::with_capacity(scene.lights.len());
        for (idx, spec) in scene.lights.iter().enumerate() {
            let direction = Vec3::from(spec.direction);
            if !direction.is_finite() || direction.squared_length() == 0.0 {
                return Err(invalid(format!(
                    "light {idx}: direction must be finite and non-zero"
                )));
            }
            let color = Vec3::from(spec.color);
            check_color(&format!("light {idx}: color"), color)?;
            lights.push(Light::new(direction, color));
        }

        Ok(Self::new(spheres, lights, atmosphere_color))
    }
}

fn check_color(what: &str, color: Vec3) -> Result<()> {
    let channels: [f64; 3] = color.into();
    if channels.iter().all(|c| c.is_finite() && *c >= 0.0) {
        Ok(())
    } else {
        Err(invalid(format!("{what} components must be finite and non-negative")))
    }
}

fn invalid(message: String) -> RenderError {
    RenderError::InvalidScene(message)
}
