use std::mem;

use lightbox::data_structures::{
    instance::InstanceRaw,
    mesh::{QUAD_INDEX_COUNT, QUAD_INDICES, QUAD_VERTEX_COUNT, QUAD_VERTICES, QuadVertex, Vertex},
};

#[test]
fn quad_has_four_vertices_and_six_indices() {
    assert_eq!(QUAD_VERTICES.len(), 4);
    assert_eq!(QUAD_VERTEX_COUNT, 4);
    assert_eq!(QUAD_INDICES.len(), 6);
    assert_eq!(QUAD_INDEX_COUNT, 6);
}

#[test]
fn quad_indices_reference_existing_vertices() {
    assert!(
        QUAD_INDICES
            .iter()
            .all(|&i| (i as usize) < QUAD_VERTICES.len())
    );
}

#[test]
fn quad_triangles_share_the_diagonal() {
    let (first, second) = QUAD_INDICES.split_at(3);
    assert_eq!(first, &[0, 1, 2]);
    assert_eq!(second, &[0, 2, 3]);
}

#[test]
fn quad_is_a_unit_square_around_the_origin() {
    for vertex in QUAD_VERTICES {
        assert_eq!(vertex.position[0].abs(), 0.5);
        assert_eq!(vertex.position[1].abs(), 0.5);
        assert_eq!(vertex.position[2], 0.0);
        assert!(vertex.uv.iter().all(|c| *c == 0.0 || *c == 1.0));
    }
}

#[test]
fn vertex_layouts_match_struct_sizes() {
    assert_eq!(mem::size_of::<QuadVertex>(), 8 * mem::size_of::<f32>());
    assert_eq!(QuadVertex::desc().array_stride, mem::size_of::<QuadVertex>() as u64);
    assert_eq!(QuadVertex::desc().attributes.len(), 3);

    assert_eq!(mem::size_of::<InstanceRaw>(), 17 * mem::size_of::<f32>());
    assert_eq!(InstanceRaw::desc().array_stride, mem::size_of::<InstanceRaw>() as u64);
    assert_eq!(InstanceRaw::desc().step_mode, wgpu::VertexStepMode::Instance);
}
