//! Decoding of the car model into a single flattened mesh.

use crate::error::ModelError;
use crate::geometry::{MeshData, Vertex};
use glam::{Mat3, Mat4, Vec3};

/// Parse a self-contained glTF or GLB file and flatten the default scene.
///
/// Every triangle primitive is baked with its node's world transform and
/// coloured with its material's base colour. Missing normals are generated.
pub fn decode_gltf(bytes: &[u8]) -> Result<MeshData, ModelError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ModelError::NoScene)?;

    let mut out = MeshData::default();
    for node in scene.nodes() {
        visit_node(&node, Mat4::IDENTITY, &buffers, &mut out)?;
    }
    if out.indices.is_empty() {
        return Err(ModelError::Empty);
    }
    log::info!(
        "[model] decoded {} vertices, {} triangles",
        out.vertices.len(),
        out.triangle_count()
    );
    Ok(out)
}

fn visit_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut MeshData,
) -> Result<(), ModelError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!("[model] skipping non-triangle primitive in {:?}", mesh.name());
                continue;
            }
            let part = read_primitive(&primitive, world, buffers).ok_or_else(|| {
                ModelError::MissingPositions {
                    mesh: mesh.name().unwrap_or("<unnamed>").to_string(),
                }
            })?;
            out.append(&part);
        }
    }
    for child in node.children() {
        visit_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn read_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
) -> Option<MeshData> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
    let [r, g, b, _] = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    let color = [r, g, b];
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
    let has_normals = normals.as_ref().is_some_and(|n| n.len() == positions.len());

    let mut mesh = MeshData::default();
    for (i, p) in positions.iter().enumerate() {
        let position = world.transform_point3(Vec3::from(*p));
        let normal = match &normals {
            Some(n) if has_normals => (normal_matrix * Vec3::from(n[i])).normalize_or_zero(),
            _ => Vec3::ZERO,
        };
        mesh.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        });
    }
    mesh.indices = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    if !has_normals {
        mesh.recompute_normals();
    }
    Some(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_GLTF: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [ { "nodes": [0] } ],
        "nodes": [ { "mesh": 0, "translation": [0.0, 0.0, 2.0] } ],
        "materials": [ { "pbrMetallicRoughness": { "baseColorFactor": [0.8, 0.1, 0.1, 1.0] } } ],
        "meshes": [ { "name": "body", "primitives": [ { "attributes": { "POSITION": 0 }, "material": 0 } ] } ],
        "accessors": [ {
            "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
        } ],
        "bufferViews": [ { "buffer": 0, "byteLength": 36 } ],
        "buffers": [ {
            "byteLength": 36,
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
        } ]
    }"#;

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            decode_gltf(b"definitely not a model"),
            Err(ModelError::Gltf(_))
        ));
    }

    #[test]
    fn flattens_node_transform_and_material() {
        let mesh = decode_gltf(TRIANGLE_GLTF.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        for v in &mesh.vertices {
            assert!((v.position[2] - 2.0).abs() < 1e-6);
            assert_eq!(v.color, [0.8, 0.1, 0.1]);
            // generated normal faces +Z for a CCW triangle in the XY plane
            assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-5);
        }
    }
}
