use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::enums::FigurePart;
use crate::error::{OverlayError, Result};

/// Opaque handle to a mesh owned by the host's mesh loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

#[derive(Debug, Error)]
#[error("{0}")]
pub struct MeshLoadError(pub String);

/// Mesh-loading collaborator provided by the host.
pub trait MeshLoader {
    fn load_mesh(&mut self, path: &Path) -> std::result::Result<MeshHandle, MeshLoadError>;
}

/// A mesh paired with its fixed display color.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureActor {
    pub part: FigurePart,
    pub mesh: MeshHandle,
    pub color: [f32; 3],
}

/// The static figure meshes, loaded once and shared by every overlay.
#[derive(Clone, Debug)]
pub struct FigureAssets {
    actors: Vec<FigureActor>,
}

impl FigureAssets {
    /// Load every [`FigurePart`] mesh from `model_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::AssetLoadFailure`] for the first mesh that
    /// fails to load
    pub fn load(loader: &mut impl MeshLoader, model_dir: &Path) -> Result<Self> {
        let actors = FigurePart::ALL
            .iter()
            .map(|part| -> Result<FigureActor> {
                let path: PathBuf = model_dir.join(part.mesh_file());
                let mesh = loader
                    .load_mesh(&path)
                    .map_err(|err| OverlayError::AssetLoadFailure {
                        path: path.clone(),
                        reason: err.to_string(),
                    })?;
                debug!(part = ?part, path = %path.display(), "Loaded figure mesh");
                Ok(FigureActor {
                    part: *part,
                    mesh,
                    color: part.color(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(count = actors.len(), "Figure assets loaded");
        Ok(Self { actors })
    }

    pub fn actors(&self) -> &[FigureActor] {
        &self.actors
    }

    pub fn actor(&self, part: FigurePart) -> Option<&FigureActor> {
        self.actors.iter().find(|actor| actor.part == part)
    }
}
