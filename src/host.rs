use crate::orientation::SliceOrientation;
use crate::overlay::OverlayRenderTarget;

/// Opaque handle to the drawing surface of a slice view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderSurfaceHandle(pub u64);

/// Capabilities the host workstation provides to the overlay.
///
/// All calls happen on the host's UI thread.
pub trait SliceViewHost {
    /// Current slice view names, in no particular order.
    fn list_view_names(&self) -> Vec<String>;

    fn render_surface(&self, view_id: &str) -> Option<RenderSurfaceHandle>;

    /// Current image-to-patient rotation, `None` while the view shows no data.
    fn slice_orientation(&self, view_id: &str) -> Option<SliceOrientation>;

    /// Ask the host to deliver modifications of `view_id` to
    /// [`crate::ViewSyncController::on_view_changed`].
    fn subscribe(&mut self, view_id: &str);

    /// Compose `target` into the surface's render pipeline, replacing any
    /// earlier composition of the same overlay.
    fn present_overlay(&mut self, surface: RenderSurfaceHandle, target: &OverlayRenderTarget);

    fn withdraw_overlay(&mut self, surface: RenderSurfaceHandle);

    /// Best-effort repaint request; the host may coalesce them.
    fn request_redraw(&mut self, view_id: &str);
}
