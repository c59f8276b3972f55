use thiserror::Error;

/// Reasons a model file could not be turned into a mesh.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("glTF file has no scene")]
    NoScene,
    #[error("mesh {mesh:?} has a primitive without readable positions (Draco-compressed?)")]
    MissingPositions { mesh: String },
    #[error("model contains no triangles")]
    Empty,
}
