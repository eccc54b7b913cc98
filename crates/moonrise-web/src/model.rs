//! Mesh extraction from the astronaut glTF binary.
//!
//! Node transforms are folded into the vertex data so the renderer can
//! drive the whole model with the single scroll-derived matrix.

use crate::assets::DecodedImage;
use crate::render::ModelMeshData;
use glam::{Mat3, Mat4, Vec3};
use moonrise_core::{AssetError, SceneVertex};

pub fn extract_meshes(url: &str, bytes: &[u8]) -> Result<Vec<ModelMeshData>, AssetError> {
    let (document, buffers, images) =
        gltf::import_slice(bytes).map_err(|e| AssetError::ModelParse {
            url: url.to_string(),
            detail: e.to_string(),
        })?;

    let mut meshes = Vec::new();
    for scene in document.scenes() {
        for node in scene.nodes() {
            process_node(&node, Mat4::IDENTITY, &buffers, &images, &mut meshes);
        }
    }
    if meshes.is_empty() {
        return Err(AssetError::EmptyModel {
            url: url.to_string(),
        });
    }
    log::info!("model {}: {} primitives", url, meshes.len());
    Ok(meshes)
}

fn process_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
    out: &mut Vec<ModelMeshData>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if let Some(data) = extract_primitive(&primitive, world, buffers, images) {
                out.push(data);
            }
        }
    }
    for child in node.children() {
        process_node(&child, world, buffers, images, out);
    }
}

fn extract_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
) -> Option<ModelMeshData> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(iter) => iter.collect(),
        None => vec![[0.0, 0.0, 1.0]; positions.len()],
    };
    let uvs: Vec<[f32; 2]> = match reader.read_tex_coords(0) {
        Some(iter) => iter.into_f32().collect(),
        None => vec![[0.0, 0.0]; positions.len()],
    };
    let indices: Vec<u32> = match reader.read_indices() {
        Some(iter) => iter.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    // normals need the inverse-transpose when the node carries scale
    let normal_mat = Mat3::from_mat4(world).inverse().transpose();
    let vertices = positions
        .iter()
        .zip(normals.iter())
        .zip(uvs.iter())
        .map(|((p, n), uv)| {
            let pos = world.transform_point3(Vec3::from(*p));
            let nrm = (normal_mat * Vec3::from(*n)).normalize_or_zero();
            SceneVertex {
                position: pos.to_array(),
                normal: nrm.to_array(),
                uv: *uv,
            }
        })
        .collect();

    let material = primitive.material();
    let pbr = material.pbr_metallic_roughness();
    let texture = pbr
        .base_color_texture()
        .and_then(|info| images.get(info.texture().source().index()))
        .and_then(image_to_rgba);

    Some(ModelMeshData {
        vertices,
        indices,
        base_color: pbr.base_color_factor(),
        texture,
    })
}

fn image_to_rgba(data: &gltf::image::Data) -> Option<DecodedImage> {
    use gltf::image::Format;
    let pixels = match data.format {
        Format::R8G8B8A8 => data.pixels.clone(),
        Format::R8G8B8 => data
            .pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 0xff])
            .collect(),
        other => {
            log::warn!("unsupported model texture format {:?}, using base color", other);
            return None;
        }
    };
    Some(DecodedImage {
        width: data.width,
        height: data.height,
        pixels,
    })
}
