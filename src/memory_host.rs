//! In-process reference collaborators.
//!
//! [`MemoryHost`] and [`MemoryMeshLoader`] stand in for a real workstation in
//! the demo binary and the tests. They are not meant to back a deployed
//! overlay; build with `default-features = false` to leave them out.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::enums::Orientation;
use crate::figure::{MeshHandle, MeshLoadError, MeshLoader};
use crate::host::{RenderSurfaceHandle, SliceViewHost};
use crate::orientation::SliceOrientation;
use crate::overlay::OverlayRenderTarget;
use crate::view_sync::ViewSyncController;

/// State of one slice view in a [`MemoryHost`].
#[derive(Clone, Debug)]
pub struct MemoryView {
    pub surface: Option<RenderSurfaceHandle>,
    pub orientation: Option<SliceOrientation>,
    pub subscribed: bool,
    /// Overlay currently composed into the view.
    pub overlay: Option<OverlayRenderTarget>,
    pub redraw_requests: usize,
}

/// In-process host with a fixed set of views, used by the demo binary and
/// the tests. Modification notifications are queued and delivered by
/// [`MemoryHost::dispatch`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    views: BTreeMap<String, MemoryView>,
    pending: VecDeque<String>,
    next_surface: u64,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three standard views Red, Yellow and Green with their preset
    /// orientations.
    pub fn with_standard_views() -> Self {
        let mut host = Self::new();
        for orientation in [Orientation::Axial, Orientation::Sagittal, Orientation::Coronal] {
            host.add_view(
                orientation.default_view_name(),
                Some(SliceOrientation::from_preset(orientation)),
            );
        }
        host
    }

    /// Add a view. Like a real layout change, this emits no notification.
    pub fn add_view(&mut self, name: &str, orientation: Option<SliceOrientation>) {
        let surface = RenderSurfaceHandle(self.next_surface);
        self.next_surface += 1;
        self.views.insert(
            name.to_string(),
            MemoryView {
                surface: Some(surface),
                orientation,
                subscribed: false,
                overlay: None,
                redraw_requests: 0,
            },
        );
    }

    pub fn remove_view(&mut self, name: &str) -> Option<MemoryView> {
        self.views.remove(name)
    }

    /// Reslice a view, notifying the overlay if it subscribed.
    pub fn set_orientation(&mut self, name: &str, orientation: Option<SliceOrientation>) {
        if let Some(view) = self.views.get_mut(name) {
            view.orientation = orientation;
            if view.subscribed {
                self.pending.push_back(name.to_string());
            }
        }
    }

    /// Make the view's surface unresolvable.
    pub fn invalidate_surface(&mut self, name: &str) {
        if let Some(view) = self.views.get_mut(name) {
            view.surface = None;
        }
    }

    pub fn view(&self, name: &str) -> Option<&MemoryView> {
        self.views.get(name)
    }

    pub fn pending_notifications(&self) -> usize {
        self.pending.len()
    }

    /// Deliver queued notifications in order; returns how many were delivered.
    pub fn dispatch(&mut self, controller: &mut ViewSyncController) -> usize {
        let mut delivered = 0;
        while let Some(view_id) = self.pending.pop_front() {
            controller.on_view_changed(self, &view_id);
            delivered += 1;
        }
        delivered
    }

    fn view_by_surface(&mut self, surface: RenderSurfaceHandle) -> Option<&mut MemoryView> {
        self.views
            .values_mut()
            .find(|view| view.surface == Some(surface))
    }
}

impl SliceViewHost for MemoryHost {
    fn list_view_names(&self) -> Vec<String> {
        self.views.keys().cloned().collect()
    }

    fn render_surface(&self, view_id: &str) -> Option<RenderSurfaceHandle> {
        self.views.get(view_id).and_then(|view| view.surface)
    }

    fn slice_orientation(&self, view_id: &str) -> Option<SliceOrientation> {
        self.views
            .get(view_id)
            .and_then(|view| view.orientation.clone())
    }

    fn subscribe(&mut self, view_id: &str) {
        if let Some(view) = self.views.get_mut(view_id) {
            view.subscribed = true;
        }
    }

    fn present_overlay(&mut self, surface: RenderSurfaceHandle, target: &OverlayRenderTarget) {
        if let Some(view) = self.view_by_surface(surface) {
            view.overlay = Some(target.clone());
        }
    }

    fn withdraw_overlay(&mut self, surface: RenderSurfaceHandle) {
        if let Some(view) = self.view_by_surface(surface) {
            view.overlay = None;
        }
    }

    fn request_redraw(&mut self, view_id: &str) {
        if let Some(view) = self.views.get_mut(view_id) {
            view.redraw_requests += 1;
        }
    }
}

/// Mesh loader that hands out sequential handles without reading files.
#[derive(Debug, Default)]
pub struct MemoryMeshLoader {
    failing: BTreeSet<String>,
    loaded: Vec<PathBuf>,
}

impl MemoryMeshLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loading of the given file name fail.
    pub fn failing(mut self, file_name: &str) -> Self {
        self.failing.insert(file_name.to_string());
        self
    }

    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}

impl MeshLoader for MemoryMeshLoader {
    fn load_mesh(&mut self, path: &Path) -> Result<MeshHandle, MeshLoadError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if self.failing.contains(file_name) {
            return Err(MeshLoadError(format!("cannot read {file_name}")));
        }
        self.loaded.push(path.to_path_buf());
        Ok(MeshHandle(self.loaded.len() as u64))
    }
}
