use glam::Vec3;
use picket_core::picking::{ray_aabb, ray_plane_y, ray_sphere};
use picket_core::{Aabb, Ray};

#[test]
fn ray_direction_is_normalized() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    assert!((ray.dir.length() - 1.0).abs() < 1e-6);
    let p = ray.at(3.0);
    assert!((p - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
}

#[test]
fn ray_aabb_hits_front_face() {
    // Unit cube centered at the origin, ray approaching along -Z
    let cube = Aabb::from_half_extent(0.5);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let t = ray_aabb(&ray, &cube);
    assert!(t.is_some());
    let hit = ray.at(t.unwrap());
    assert!((hit.z - 0.5).abs() < 1e-5); // enters through the near face
}

#[test]
fn ray_aabb_miss() {
    let cube = Aabb::from_half_extent(0.5);
    // Parallel to the cube, offset well past its extent
    let ray = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(ray_aabb(&ray, &cube).is_none());
}

#[test]
fn ray_aabb_behind_origin() {
    let cube = Aabb::from_half_extent(0.5);
    // Pointing away from the cube
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(ray_aabb(&ray, &cube).is_none());
}

#[test]
fn ray_aabb_origin_inside() {
    let cube = Aabb::from_half_extent(0.5);
    let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    // Entry parameter clamps to zero when the origin is inside the box
    assert_eq!(ray_aabb(&ray, &cube), Some(0.0));
}

#[test]
fn ray_aabb_diagonal_corner_hit() {
    let cube = Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5));
    let ray = Ray::new(Vec3::new(3.0, 3.0, 3.0), Vec3::new(-1.0, -1.0, -1.0));
    let t = ray_aabb(&ray, &cube);
    assert!(t.is_some());
    let hit = ray.at(t.unwrap());
    assert!((hit - Vec3::splat(0.5)).length() < 1e-4);
}

#[test]
fn ray_sphere_basic_hit() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
    let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_some());
    let t = t.unwrap();
    assert!((t - 3.0).abs() < 1e-4); // nearest surface point at z = 3
}

#[test]
fn ray_sphere_miss() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_grazing_offset_within_radius() {
    // Ray passes 0.05 from the center of a 0.1-radius marker: still a hit
    let ray = Ray::new(Vec3::new(0.05, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
    assert!(ray_sphere(&ray, Vec3::ZERO, 0.1).is_some());
    // 0.15 away: miss
    let ray = Ray::new(Vec3::new(0.15, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
    assert!(ray_sphere(&ray, Vec3::ZERO, 0.1).is_none());
}

#[test]
fn ray_plane_y_hit() {
    let ray = Ray::new(Vec3::new(1.0, 5.0, 2.0), Vec3::new(0.0, -1.0, 0.0));
    let hit = ray_plane_y(&ray, 0.5);
    assert!(hit.is_some());
    let hit = hit.unwrap();
    assert!((hit - Vec3::new(1.0, 0.5, 2.0)).length() < 1e-5);
}

#[test]
fn ray_plane_y_parallel_is_none() {
    let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    assert!(ray_plane_y(&ray, 0.5).is_none());
}

#[test]
fn ray_plane_y_behind_origin_is_none() {
    // Plane above the origin, ray pointing down
    let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
    assert!(ray_plane_y(&ray, 2.0).is_none());
}

#[test]
fn ray_plane_y_oblique_hit_has_exact_height() {
    let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(1.0, -1.0, 1.0));
    let hit = ray_plane_y(&ray, 1.0).unwrap();
    assert!((hit.y - 1.0).abs() < 1e-5);
    assert!((hit.x - 3.0).abs() < 1e-4);
    assert!((hit.z - 3.0).abs() < 1e-4);
}
