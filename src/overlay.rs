use crate::enums::FigurePart;
use crate::host::RenderSurfaceHandle;
use crate::orientation::CameraPlacement;

/// Camera of an overlay render target, always aimed at the figure origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: [f64; 3],
    pub focal_point: [f64; 3],
    pub view_up: [f64; 3],
}

impl From<CameraPlacement> for Camera {
    fn from(placement: CameraPlacement) -> Self {
        Self {
            position: placement.position,
            focal_point: [0.0; 3],
            view_up: placement.view_up,
        }
    }
}

/// Normalized sub-rectangle of a view's drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self {
            left: 0.0,
            bottom: 0.0,
            right: 1.0,
            top: 1.0,
        }
    }
}

/// Secondary viewport composited onto a slice view.
///
/// Which figure actors are attached is recorded here, never on the shared
/// actors, so attaching in one view cannot affect another.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayRenderTarget {
    viewport: ViewportRect,
    camera: Option<Camera>,
    attached: Vec<FigurePart>,
    composed_into: Option<RenderSurfaceHandle>,
}

impl OverlayRenderTarget {
    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn clear_camera(&mut self) {
        self.camera = None;
    }

    pub fn attached_actors(&self) -> &[FigurePart] {
        &self.attached
    }

    pub fn is_attached(&self, part: FigurePart) -> bool {
        self.attached.contains(&part)
    }

    /// Returns `true` if the actor was not attached before.
    pub fn attach(&mut self, part: FigurePart) -> bool {
        if self.is_attached(part) {
            return false;
        }
        self.attached.push(part);
        true
    }

    /// Detach every actor; returns `true` if anything was attached.
    pub fn detach_all(&mut self) -> bool {
        let changed = !self.attached.is_empty();
        self.attached.clear();
        changed
    }

    /// Surface this target is currently composed into, if any.
    pub fn composed_into(&self) -> Option<RenderSurfaceHandle> {
        self.composed_into
    }

    pub fn is_composed(&self) -> bool {
        self.composed_into.is_some()
    }

    pub(crate) fn set_composed_into(&mut self, surface: Option<RenderSurfaceHandle>) {
        self.composed_into = surface;
    }
}

/// Per-view overlay bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewOverlayState {
    view_id: String,
    target: OverlayRenderTarget,
    visible: bool,
    // last surface the host resolved for this view; not owned
    surface: Option<RenderSurfaceHandle>,
}

impl ViewOverlayState {
    pub fn new(view_id: impl Into<String>) -> Self {
        Self {
            view_id: view_id.into(),
            target: OverlayRenderTarget::default(),
            visible: false,
            surface: None,
        }
    }

    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    pub fn target(&self) -> &OverlayRenderTarget {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut OverlayRenderTarget {
        &mut self.target
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn surface(&self) -> Option<RenderSurfaceHandle> {
        self.surface
    }

    pub(crate) fn set_surface(&mut self, surface: RenderSurfaceHandle) {
        self.surface = Some(surface);
    }
}
