//! CPU-side mesh data and primitive generators

/// Indexed triangle mesh
///
/// Plain CPU-side geometry. A rendering backend uploads this into its own
/// buffers; the engine core only tracks it by name through the
/// [`MeshLibrary`](crate::assets::MeshLibrary).
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,

    /// Per-vertex normals, parallel to `positions`
    pub normals: Vec<[f32; 3]>,

    /// Triangle indices into the vertex arrays
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Create a unit cube centered at the origin
    ///
    /// 24 vertices (4 per face) so each face gets hard normals.
    pub fn cube() -> Self {
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            // (normal, tangent u, tangent v) per face
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (face, (normal, u, v)) in faces.iter().enumerate() {
            let base = (face * 4) as u32;
            for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
                positions.push([
                    normal[0] * 0.5 + u[0] * su + v[0] * sv,
                    normal[1] * 0.5 + u[1] * su + v[1] * sv,
                    normal[2] * 0.5 + u[2] * su + v[2] * sv,
                ]);
                normals.push(*normal);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Create a UV sphere centered at the origin
    pub fn sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut indices = Vec::new();

        for ring in 0..=rings {
            let phi = std::f32::consts::PI * ring as f32 / rings as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for segment in 0..=segments {
                let theta = std::f32::consts::TAU * segment as f32 / segments as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();

                let normal = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
                normals.push(normal);
                positions.push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
            }
        }

        let stride = segments + 1;
        for ring in 0..rings {
            for segment in 0..segments {
                let a = ring * stride + segment;
                let b = a + stride;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }
}
