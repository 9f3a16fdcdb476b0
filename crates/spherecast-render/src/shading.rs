use crate::geometry::{Intersection, Light};
use crate::math::Vec3;
use crate::scene::World;

/// Color returned for rays that hit nothing.
pub const BACKGROUND: Vec3 = Vec3::splat(1.0);

/// Lambertian term. Lights arriving from behind the surface contribute zero.
pub fn shade_light(hit: &Intersection, light: &Light) -> Vec3 {
    let geometry = (-light.direction().dot(hit.normal)).max(0.0);
    geometry * hit.color.mul_elem(light.color)
}

/// Depth-based haze. Expects `hit.position.z >= 0`.
pub fn shade_atmosphere(hit: &Intersection, atmosphere_color: Vec3) -> Vec3 {
    hit.position.z.sqrt() * atmosphere_color
}

pub fn shade(hit: &Intersection, world: &World) -> Vec3 {
    if !hit.is_hit() {
        return BACKGROUND;
    }
    world
        .lights()
        .iter()
        .fold(shade_atmosphere(hit, world.atmosphere_color()), |color, light| {
            color + shade_light(hit, light)
        })
}

/// Maps a linear channel to `0..=255`, truncating toward zero.
pub fn quantize(channel: f64) -> u8 {
    (255.0 * channel).clamp(0.0, 255.0) as u8
}
