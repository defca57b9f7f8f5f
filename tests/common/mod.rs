#![allow(dead_code)]

use orientation_figure::{
    FigureAssets, MemoryHost, MemoryMeshLoader, OverlayConfig, SliceOrientation,
    ViewSyncController,
};
use std::path::Path;
use std::rc::Rc;

/// Host with the given views, all reporting the identity orientation.
pub fn identity_host(names: &[&str]) -> MemoryHost {
    let mut host = MemoryHost::new();
    for name in names {
        host.add_view(name, Some(SliceOrientation::identity()));
    }
    host
}

pub fn figure_assets() -> Rc<FigureAssets> {
    let assets = FigureAssets::load(&mut MemoryMeshLoader::new(), Path::new("models"))
        .expect("in-memory meshes should load");
    Rc::new(assets)
}

pub fn controller(config: OverlayConfig) -> ViewSyncController {
    ViewSyncController::new(config, figure_assets())
}

pub fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Rotation about the X axis.
pub fn rotation_x(angle: f64) -> SliceOrientation {
    let (s, c) = angle.sin_cos();
    SliceOrientation::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

/// Rotation about the Z axis.
pub fn rotation_z(angle: f64) -> SliceOrientation {
    let (s, c) = angle.sin_cos();
    SliceOrientation::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}
