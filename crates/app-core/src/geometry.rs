//! CPU-side mesh and line data consumed by both renderers.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::{AXES_LENGTH, AXIS_COLORS};

/// Vertex layout for the lit mesh pipeline.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Per-instance data for the mesh pipeline: world offset, uniform scale,
/// flat color.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct MeshInstance {
    pub offset: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
}

/// Vertex layout for the unlit line pipeline.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Indexed cube mesh centered at the origin with flat face normals.
pub fn cube_mesh(half: f32) -> (Vec<MeshVertex>, Vec<u16>) {
    // (normal, four corners in that face's plane)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-half, -half, half],
                [half, -half, half],
                [half, half, half],
                [-half, half, half],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [half, -half, -half],
                [-half, -half, -half],
                [-half, half, -half],
                [half, half, -half],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [half, -half, half],
                [half, -half, -half],
                [half, half, -half],
                [half, half, half],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-half, -half, -half],
                [-half, -half, half],
                [-half, half, half],
                [-half, half, -half],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-half, half, half],
                [half, half, half],
                [half, half, -half],
                [-half, half, -half],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-half, -half, -half],
                [half, -half, -half],
                [half, -half, half],
                [-half, -half, half],
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let base = vertices.len() as u16;
        for position in corners {
            vertices.push(MeshVertex { position, normal });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}

/// Indexed UV sphere centered at the origin.
pub fn sphere_mesh(radius: f32, sectors: u32, stacks: u32) -> (Vec<MeshVertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    for stack in 0..=stacks {
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        let (sp, cp) = phi.sin_cos();
        for sector in 0..=sectors {
            let theta = std::f32::consts::TAU * sector as f32 / sectors as f32;
            let (st, ct) = theta.sin_cos();
            let normal = [sp * ct, cp, sp * st];
            vertices.push(MeshVertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
            });
        }
    }

    let ring = sectors + 1;
    let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
    for stack in 0..stacks {
        for sector in 0..sectors {
            let a = (stack * ring + sector) as u16;
            let b = a + ring as u16;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}

/// Three colored axis lines anchored at `origin` (the camera-target gizmo).
pub fn axes_lines(origin: Vec3) -> [LineVertex; 6] {
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];
    let mut out = [LineVertex {
        position: [0.0; 3],
        color: [0.0; 3],
    }; 6];
    for (i, axis) in axes.iter().enumerate() {
        let color = AXIS_COLORS[i];
        out[i * 2] = LineVertex {
            position: origin.to_array(),
            color,
        };
        out[i * 2 + 1] = LineVertex {
            position: (origin + *axis * AXES_LENGTH).to_array(),
            color,
        };
    }
    out
}

/// Two line vertices for the marker-to-marker segment.
pub fn segment_lines(a: Vec3, b: Vec3, color: [f32; 3]) -> [LineVertex; 2] {
    [
        LineVertex {
            position: a.to_array(),
            color,
        },
        LineVertex {
            position: b.to_array(),
            color,
        },
    ]
}
