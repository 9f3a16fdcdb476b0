use crate::math::{Ray, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub squared_radius: f64,
    pub color: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    direction: Vec3,
    pub color: Vec3,
}

impl Light {
    /// `direction` is the way the light travels, from the light into the
    /// scene. It is normalized here so intensity depends on `color` alone.
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self {
            direction: direction.normalized(),
            color,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

/// Result of casting a ray. A miss has infinite `distance`; its other fields
/// are zero and carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub position: Vec3,
    pub normal: Vec3,
    pub distance: f64,
    pub color: Vec3,
}

impl Intersection {
    pub const MISS: Self = Self {
        position: Vec3::zero(),
        normal: Vec3::zero(),
        distance: f64::INFINITY,
        color: Vec3::zero(),
    };

    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }
}

impl Sphere {
    /// Near-root intersection. Spheres whose center lies behind the ray
    /// origin are rejected, as are rays starting inside the sphere.
    pub fn intersect(&self, ray: &Ray) -> Intersection {
        let offset = self.position - ray.origin;
        let c = ray.direction.dot(offset);
        if c < 0.0 {
            return Intersection::MISS;
        }
        let discriminant = c * c - offset.squared_length() + self.squared_radius;
        if discriminant < 0.0 {
            return Intersection::MISS;
        }

        let distance = c - discriminant.sqrt();
        if distance < 0.0 {
            return Intersection::MISS;
        }
        let position = ray.at(distance);
        Intersection {
            position,
            normal: (position - self.position).normalized(),
            distance,
            color: self.color,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.position).squared_length() <= self.squared_radius
    }
}
