//! # Shape Statistics Demo
//!
//! Generates the meshes of a small solar-system scene, checks them, prints
//! their sizes and uploads them to a GPU when one is available. It then runs
//! a few frames of the orbit model and of a Catmull-Rom path to show the
//! transforms an external renderer would receive.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example shape_stats
//! ```

use anyhow::{Context, Result};
use tessella::prelude::*;

/// Every mesh the scene needs, with the parameters it is generated from
fn scene_shapes() -> Vec<(&'static str, Shape)> {
    vec![
        (
            "water",
            QuadParams {
                width: 100.0,
                height: 100.0,
                horizontal_split_count: 200,
                vertical_split_count: 200,
            }
            .into(),
        ),
        (
            "skybox",
            SphereParams {
                radius: 200.0,
                longitude_split_count: 100,
                latitude_split_count: 100,
            }
            .into(),
        ),
        (
            "planet",
            SphereParams {
                radius: 0.25,
                longitude_split_count: 40,
                latitude_split_count: 40,
            }
            .into(),
        ),
        (
            "control point",
            SphereParams {
                radius: 0.1,
                longitude_split_count: 10,
                latitude_split_count: 10,
            }
            .into(),
        ),
        ("planet ring", CircleRingParams::default().into()),
        ("torus", TorusParams::default().into()),
    ]
}

fn request_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok()?;

        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Tessella Demo Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .ok()
    })
}

fn solar_system() -> CelestialBody {
    let moon = CelestialBody::new("moon")
        .with_scale(Vector3::new(0.3, 0.3, 0.3))
        .with_orbit(OrbitConfiguration {
            radius: 1.5,
            inclination: Rad(-0.2),
            speed: 2.5,
        })
        .with_spin(SpinConfiguration {
            axial_tilt: Rad(0.0),
            speed: 0.5,
        });

    let earth = CelestialBody::new("earth")
        .with_scale(Vector3::new(0.6, 0.6, 0.6))
        .with_orbit(OrbitConfiguration {
            radius: 6.0,
            inclination: Rad(0.1),
            speed: 0.4,
        })
        .with_spin(SpinConfiguration {
            axial_tilt: Rad(0.41),
            speed: 3.0,
        })
        .with_child(moon);

    let saturn = CelestialBody::new("saturn")
        .with_orbit(OrbitConfiguration {
            radius: 12.0,
            inclination: Rad(0.05),
            speed: 0.15,
        })
        .with_spin(SpinConfiguration {
            axial_tilt: Rad(0.47),
            speed: 2.0,
        })
        .with_ring(Vector2::new(1.8, 1.8));

    CelestialBody::new("sun")
        .with_scale(Vector3::new(2.0, 2.0, 2.0))
        .with_spin(SpinConfiguration {
            axial_tilt: Rad(0.0),
            speed: 0.2,
        })
        .with_child(earth)
        .with_child(saturn)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut meshes = Vec::new();
    for (label, shape) in scene_shapes() {
        let mesh = shape
            .generate()
            .with_context(|| format!("generating {label} ({})", shape.name()))?;
        mesh.validate()
            .with_context(|| format!("validating {label}"))?;
        log::info!(
            "{label:>14}: {:>7} vertices {:>7} triangles  [{}]",
            mesh.vertex_count(),
            mesh.triangle_count(),
            shape.name()
        );
        meshes.push((label, mesh));
    }

    let layout = VertexLayout::new(&AttributeBindings::default())?;
    log::info!(
        "vertex stride {} bytes, {} attributes",
        layout.buffer_layout().array_stride,
        layout.attributes().len()
    );

    match request_device() {
        Some((device, _queue)) => {
            let uploaded: Vec<GpuMesh> = meshes
                .iter()
                .map(|(label, mesh)| GpuMesh::upload(&device, mesh, label))
                .collect();
            let bytes: u64 = uploaded
                .iter()
                .map(|gpu| gpu.vertex_buffer.size() + gpu.index_buffer.size())
                .sum();
            log::info!("uploaded {} meshes, {bytes} bytes of buffers", uploaded.len());
        }
        None => log::warn!("no GPU adapter available, skipping upload"),
    }

    let mut sun = solar_system();
    let frame_time = 1.0 / 60.0;
    for frame in 0..3 {
        for body in sun.step(frame_time) {
            let centre = body.transforms.world * Vector3::zero().extend(1.0);
            log::info!(
                "frame {frame} {:indent$}{:<8} at ({:>7.3}, {:>7.3}, {:>7.3}){}",
                "",
                body.name,
                centre.x,
                centre.y,
                centre.z,
                if body.transforms.ring.is_some() { " + ring" } else { "" },
                indent = body.depth * 2
            );
        }
    }

    let control_points = vec![
        Vector3::new(-3.0, 0.0, -2.0),
        Vector3::new(0.0, 1.0, -3.0),
        Vector3::new(3.0, 0.5, -1.0),
        Vector3::new(2.0, -0.5, 2.0),
        Vector3::new(-1.0, 0.0, 3.0),
    ];
    let mut path = PathFollower::new(control_points, Interpolation::default(), 1.0)?;
    for _ in 0..8 {
        let p = path.advance(0.4);
        log::info!(
            "path segment {} t={:.2}: ({:.3}, {:.3}, {:.3})",
            path.segment(),
            path.progress(),
            p.x,
            p.y,
            p.z
        );
    }

    Ok(())
}
