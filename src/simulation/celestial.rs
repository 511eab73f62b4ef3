//! # Celestial Bodies
//!
//! Hierarchical orbit and spin transforms for planets, moons and their rings.
//!
//! Every body orbits its parent in a tilted plane and spins around its own
//! tilted axis. Children orbit in the parent's tilted frame but do not inherit
//! its spin.

use std::f32::consts::{FRAC_PI_2, TAU};

use cgmath::{Matrix4, Rad, SquareMatrix, Vector2, Vector3, Zero};

/// How a body moves around its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfiguration {
    /// Distance from the parent's origin
    pub radius: f32,
    /// Tilt of the orbital plane around the Z axis
    pub inclination: Rad<f32>,
    /// Angular speed in radians per second
    pub speed: f32,
}

impl Default for OrbitConfiguration {
    fn default() -> Self {
        Self {
            radius: 0.0,
            inclination: Rad(0.0),
            speed: 0.0,
        }
    }
}

/// How a body rotates around its own axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfiguration {
    /// Tilt of the spin axis around the Z axis
    pub axial_tilt: Rad<f32>,
    /// Angular speed in radians per second
    pub speed: f32,
}

impl Default for SpinConfiguration {
    fn default() -> Self {
        Self {
            axial_tilt: Rad(0.0),
            speed: 0.0,
        }
    }
}

/// Matrices an external renderer needs to draw one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransforms {
    /// Parent frame followed by the orbit: places the body's centre
    pub world: Matrix4<f32>,
    /// Scale, orbit compensation, axial tilt and spin in the body's frame
    pub model: Matrix4<f32>,
    /// Transform for a ring mesh lying in the XY plane, if the body has one
    pub ring: Option<Matrix4<f32>>,
    /// Frame handed down to the body's children
    pub children_parent: Matrix4<f32>,
}

impl BodyTransforms {
    /// Full transform for the body mesh, `world * model`.
    pub fn body(&self) -> Matrix4<f32> {
        self.world * self.model
    }
}

/// A body together with the transforms computed for it in one frame.
#[derive(Debug, Clone, Copy)]
pub struct PlacedBody<'a> {
    pub name: &'a str,
    pub depth: usize,
    pub transforms: BodyTransforms,
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    name: String,
    scale: Vector3<f32>,
    orbit: OrbitConfiguration,
    orbit_angle: f32,
    spin: SpinConfiguration,
    spin_angle: f32,
    ring_scale: Option<Vector2<f32>>,
    children: Vec<CelestialBody>,
}

impl CelestialBody {
    /// Create a body that sits still at its parent's origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            orbit: OrbitConfiguration::default(),
            orbit_angle: 0.0,
            spin: SpinConfiguration::default(),
            spin_angle: 0.0,
            ring_scale: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set orbit and restart it from angle zero
    pub fn set_orbit(&mut self, configuration: OrbitConfiguration) {
        self.orbit = configuration;
        self.orbit_angle = 0.0;
    }

    /// Set spin and restart it from angle zero
    pub fn set_spin(&mut self, configuration: SpinConfiguration) {
        self.spin = configuration;
        self.spin_angle = 0.0;
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
    }

    /// Attach a ring, scaled by `scale` in its own plane
    pub fn set_ring(&mut self, scale: Vector2<f32>) {
        self.ring_scale = Some(scale);
    }

    pub fn with_orbit(mut self, configuration: OrbitConfiguration) -> Self {
        self.set_orbit(configuration);
        self
    }

    pub fn with_spin(mut self, configuration: SpinConfiguration) -> Self {
        self.set_spin(configuration);
        self
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_ring(mut self, scale: Vector2<f32>) -> Self {
        self.ring_scale = Some(scale);
        self
    }

    pub fn add_child(&mut self, child: CelestialBody) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: CelestialBody) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[CelestialBody] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [CelestialBody] {
        &mut self.children
    }

    pub fn orbit_angle(&self) -> Rad<f32> {
        Rad(self.orbit_angle)
    }

    pub fn spin_angle(&self) -> Rad<f32> {
        Rad(self.spin_angle)
    }

    /// Advance this body's spin and orbit by `delta_time` seconds.
    ///
    /// Angles are kept in `[0, 2π)`.
    pub fn advance(&mut self, delta_time: f32) {
        self.spin_angle = (self.spin_angle + self.spin.speed * delta_time).rem_euclid(TAU);
        self.orbit_angle = (self.orbit_angle + self.orbit.speed * delta_time).rem_euclid(TAU);
    }

    /// Advance this body and every descendant.
    pub fn advance_all(&mut self, delta_time: f32) {
        self.advance(delta_time);
        for child in &mut self.children {
            child.advance_all(delta_time);
        }
    }

    /// Compose this body's transforms below `parent_transform`.
    pub fn transforms(&self, parent_transform: Matrix4<f32>) -> BodyTransforms {
        let orbit_tilt = Matrix4::from_angle_z(self.orbit.inclination);
        let orbit_rotation = Matrix4::from_angle_y(Rad(self.orbit_angle));
        let orbit_translation = Matrix4::from_translation(Vector3::unit_x() * self.orbit.radius);

        let axis_tilt = Matrix4::from_angle_z(self.spin.axial_tilt);
        let axis_rotation = Matrix4::from_angle_y(Rad(self.spin_angle));
        let scale = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        // Rotations are orthonormal, so the inverse is the opposite angle
        let orbit_compensation = Matrix4::from_angle_y(Rad(-self.orbit_angle));

        let world = parent_transform * orbit_tilt * orbit_rotation * orbit_translation;
        let model = scale * orbit_compensation * axis_tilt * axis_rotation;

        let ring = self.ring_scale.map(|ring| {
            world * Matrix4::from_angle_x(Rad(FRAC_PI_2)) * Matrix4::from_nonuniform_scale(ring.x, ring.y, 1.0)
        });

        BodyTransforms {
            world,
            model,
            ring,
            children_parent: world * axis_tilt,
        }
    }

    /// Transforms for this body and all descendants, parents before children.
    pub fn collect_transforms(&self, parent_transform: Matrix4<f32>) -> Vec<PlacedBody<'_>> {
        let mut placed = Vec::new();
        self.collect_into(parent_transform, 0, &mut placed);
        placed
    }

    fn collect_into<'a>(
        &'a self,
        parent_transform: Matrix4<f32>,
        depth: usize,
        placed: &mut Vec<PlacedBody<'a>>,
    ) {
        let transforms = self.transforms(parent_transform);
        placed.push(PlacedBody {
            name: &self.name,
            depth,
            transforms,
        });
        for child in &self.children {
            child.collect_into(transforms.children_parent, depth + 1, placed);
        }
    }

    /// Advance the whole tree and return its transforms from the identity root.
    pub fn step(&mut self, delta_time: f32) -> Vec<PlacedBody<'_>> {
        self.advance_all(delta_time);
        self.collect_transforms(Matrix4::identity())
    }

    /// Centre of this body in world space for a given parent frame.
    pub fn world_position(&self, parent_transform: Matrix4<f32>) -> Vector3<f32> {
        let centre = self.transforms(parent_transform).world * Vector3::zero().extend(1.0);
        centre.truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};
    use std::f32::consts::PI;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    fn apply(m: Matrix4<f32>, v: Vector3<f32>, w: f32) -> Vector3<f32> {
        (m * v.extend(w)).truncate()
    }

    #[test]
    fn test_static_body_is_scale_only() {
        let body = CelestialBody::new("sun").with_scale(Vector3::new(2.0, 2.0, 2.0));
        let t = body.transforms(Matrix4::identity());
        assert_eq!(t.world, Matrix4::identity());
        assert_eq!(t.model, Matrix4::from_scale(2.0));
        assert!(t.ring.is_none());
    }

    #[test]
    fn test_orbit_places_body() {
        let mut body = CelestialBody::new("earth").with_orbit(OrbitConfiguration {
            radius: 2.0,
            inclination: Rad(0.0),
            speed: PI / 2.0,
        });
        assert!(close(body.world_position(Matrix4::identity()), Vector3::new(2.0, 0.0, 0.0)));

        body.advance(1.0);
        assert!(close(body.world_position(Matrix4::identity()), Vector3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn test_orbit_does_not_turn_body() {
        let mut body = CelestialBody::new("moon").with_orbit(OrbitConfiguration {
            radius: 3.0,
            inclination: Rad(0.0),
            speed: 0.7,
        });
        body.advance(2.3);
        let t = body.transforms(Matrix4::identity());
        assert!(close(apply(t.body(), Vector3::unit_x(), 0.0), Vector3::unit_x()));
        assert!(close(apply(t.body(), Vector3::unit_z(), 0.0), Vector3::unit_z()));
    }

    #[test]
    fn test_spin_and_tilt() {
        let mut body = CelestialBody::new("mars").with_spin(SpinConfiguration {
            axial_tilt: Rad(PI / 2.0),
            speed: PI,
        });
        body.advance(0.5);
        assert!((body.spin_angle().0 - PI / 2.0).abs() < 1e-6);

        let t = body.transforms(Matrix4::identity());
        // Spin axis (local Y) is tilted onto -X
        assert!(close(apply(t.body(), Vector3::unit_y(), 0.0), -Vector3::unit_x()));
        // Children inherit the tilt but not the spin
        assert!(close(apply(t.children_parent, Vector3::unit_y(), 0.0), -Vector3::unit_x()));
        assert!(close(apply(t.children_parent, Vector3::unit_z(), 0.0), Vector3::unit_z()));
    }

    #[test]
    fn test_angles_wrap() {
        let mut body = CelestialBody::new("fast").with_spin(SpinConfiguration {
            axial_tilt: Rad(0.0),
            speed: 3.0 * TAU,
        });
        body.advance(1.25);
        let angle = body.spin_angle().0;
        assert!((0.0..TAU).contains(&angle));
        assert!((angle - 0.75 * TAU).abs() < 1e-3);
    }

    #[test]
    fn test_ring_lies_in_orbital_plane() {
        let body = CelestialBody::new("saturn").with_ring(Vector2::new(2.0, 3.0));
        let ring = body.transforms(Matrix4::identity()).ring.unwrap();
        assert!(close(apply(ring, Vector3::unit_x(), 1.0), Vector3::new(2.0, 0.0, 0.0)));
        assert!(close(apply(ring, Vector3::unit_y(), 1.0), Vector3::new(0.0, 0.0, 3.0)));
        // The ring mesh faces -Z, which ends up pointing up
        assert!(close(apply(ring, -Vector3::unit_z(), 0.0), Vector3::unit_y()));
    }

    #[test]
    fn test_hierarchy_composition() {
        let moon = CelestialBody::new("moon").with_orbit(OrbitConfiguration {
            radius: 1.0,
            inclination: Rad(0.0),
            speed: 0.0,
        });
        let earth = CelestialBody::new("earth")
            .with_orbit(OrbitConfiguration {
                radius: 5.0,
                inclination: Rad(0.0),
                speed: 0.0,
            })
            .with_child(moon);
        let mut sun = CelestialBody::new("sun").with_child(earth);

        let placed = sun.step(0.0);
        let names: Vec<_> = placed.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["sun", "earth", "moon"]);
        assert_eq!(placed[2].depth, 2);

        let moon_centre = (placed[2].transforms.world * Vector4::new(0.0, 0.0, 0.0, 1.0)).truncate();
        assert!(close(moon_centre, Vector3::new(6.0, 0.0, 0.0)));
    }

    #[test]
    fn test_inclined_orbit() {
        let body = CelestialBody::new("pluto").with_orbit(OrbitConfiguration {
            radius: 1.0,
            inclination: Rad(PI / 2.0),
            speed: 0.0,
        });
        // Tilting the orbital plane a quarter turn around Z lifts +X onto +Y
        assert!(close(body.world_position(Matrix4::identity()), Vector3::unit_y()));
    }

    #[test]
    fn test_setters_reset_angles() {
        let mut body = CelestialBody::new("venus").with_orbit(OrbitConfiguration {
            radius: 1.0,
            inclination: Rad(0.0),
            speed: 1.0,
        });
        body.advance(1.0);
        assert!(body.orbit_angle().0 > 0.0);
        body.set_orbit(OrbitConfiguration::default());
        assert_eq!(body.orbit_angle(), Rad(0.0));
    }
}
