use crate::math::{Ray, Vec3};

/// Pinhole at the origin looking down +z, focal length of half the image
/// height. Pixel rows grow along +y.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    half_width: i64,
    half_height: i64,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            half_width: i64::from(width / 2),
            half_height: i64::from(height / 2),
        }
    }

    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let direction = Vec3::new(
            (i64::from(x) - self.half_width) as f64,
            (i64::from(y) - self.half_height) as f64,
            self.half_height as f64,
        );
        Ray {
            origin: Vec3::zero(),
            direction: direction.normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_looks_down_the_axis() {
        let camera = Camera::new(800, 600);
        let ray = camera.ray(400, 300);
        assert_eq!(ray.origin, Vec3::zero());
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn corner_pixel_direction_is_unit_and_diagonal() {
        let camera = Camera::new(2, 2);
        let ray = camera.ray(0, 0);
        let expected = Vec3::new(-1.0, -1.0, 1.0).normalized();
        assert!((ray.direction - expected).length() < 1e-12);
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
    }
}
