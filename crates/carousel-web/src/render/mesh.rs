#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CubeVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

/// Unit cube centred on the origin, two triangles per face, outward normals.
pub(crate) fn unit_cube() -> Vec<CubeVertex> {
    // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let corners: [(f32, f32); 6] = [
        (-0.5, -0.5),
        (0.5, -0.5),
        (0.5, 0.5),
        (-0.5, -0.5),
        (0.5, 0.5),
        (-0.5, 0.5),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in faces {
        for (a, b) in corners {
            let position = [
                n[0] * 0.5 + u[0] * a + v[0] * b,
                n[1] * 0.5 + u[1] * a + v[1] * b,
                n[2] * 0.5 + u[2] * a + v[2] * b,
            ];
            out.push(CubeVertex {
                position,
                normal: n,
            });
        }
    }
    out
}
