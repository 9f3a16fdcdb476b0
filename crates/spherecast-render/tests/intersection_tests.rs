use spherecast_render::geometry::{Intersection, Sphere};
use spherecast_render::math::{Ray, Vec3};
use spherecast_render::World;

fn sphere(position: Vec3, squared_radius: f64, color: Vec3) -> Sphere {
    Sphere {
        position,
        squared_radius,
        color,
    }
}

fn axis_ray() -> Ray {
    Ray {
        origin: Vec3::zero(),
        direction: Vec3::new(0.0, 0.0, 1.0),
    }
}

#[test]
fn hit_reports_near_surface() {
    let red = Vec3::new(1.0, 0.1, 0.1);
    let hit = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, red).intersect(&axis_ray());

    assert!(hit.is_hit());
    assert!((hit.distance - 4.0).abs() < 1e-12);
    assert!((hit.position - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-12);
    assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    assert_eq!(hit.color, red);
}

#[test]
fn sphere_behind_origin_is_missed() {
    let behind = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::splat(1.0));
    assert_eq!(behind.intersect(&axis_ray()), Intersection::MISS);

    // Center behind the origin even though the sphere reaches in front of it.
    let straddling = sphere(Vec3::new(0.0, 0.0, -0.5), 4.0, Vec3::splat(1.0));
    assert!(!straddling.intersect(&axis_ray()).is_hit());
}

#[test]
fn ray_passing_beside_sphere_is_missed() {
    let off_axis = sphere(Vec3::new(3.0, 0.0, 5.0), 1.0, Vec3::splat(1.0));
    assert!(!off_axis.intersect(&axis_ray()).is_hit());
}

#[test]
fn ray_starting_inside_sphere_is_missed() {
    let around = sphere(Vec3::new(0.0, 0.0, 0.5), 1.0, Vec3::splat(1.0));
    assert!(!around.intersect(&axis_ray()).is_hit());
}

#[test]
fn world_picks_nearest_sphere_regardless_of_order() {
    let near = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::new(1.0, 0.0, 0.0));
    let far = sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, Vec3::new(0.0, 0.0, 1.0));

    for spheres in [vec![near, far], vec![far, near]] {
        let world = World::new(spheres, Vec::new(), Vec3::zero());
        let hit = world.intersect(&axis_ray());
        assert!((hit.distance - 4.0).abs() < 1e-12);
        assert_eq!(hit.color, near.color);
    }
}

#[test]
fn equal_distances_keep_first_sphere() {
    let first = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::new(1.0, 0.0, 0.0));
    let second = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::new(0.0, 1.0, 0.0));
    let world = World::new(vec![first, second], Vec::new(), Vec3::zero());

    assert_eq!(world.intersect(&axis_ray()).color, first.color);
}

#[test]
fn empty_world_is_a_miss() {
    let world = World::new(Vec::new(), Vec::new(), Vec3::zero());
    assert_eq!(world.intersect(&axis_ray()), Intersection::MISS);
}

#[test]
fn reference_scene_floor_catches_downward_rays() {
    let world = World::reference();
    let ray = Ray {
        origin: Vec3::zero(),
        direction: Vec3::new(0.0, -1.0, 1.0).normalized(),
    };

    let hit = world.intersect(&ray);
    assert!(hit.is_hit());
    assert_eq!(hit.color, Vec3::new(1.0, 1.0, 1.0));
    assert!(hit.position.z >= 0.0);
}
