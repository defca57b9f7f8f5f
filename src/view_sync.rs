use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::config::{OverlayConfig, positive};
use crate::error::{OverlayError, Result};
use crate::figure::{FigureAssets, MeshLoader};
use crate::host::SliceViewHost;
use crate::orientation::{OrientationSolver, SliceOrientation};
use crate::overlay::{Camera, ViewOverlayState};

/// What a single [`ViewSyncController::render`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The figure is composed into the view with a fresh camera.
    Shown,
    /// The overlay is detached and out of the view's pipeline.
    Hidden,
    /// The view has no orientation data yet; retried on the next change.
    Skipped,
}

/// Keeps one figure overlay per live slice view in sync with the view's
/// orientation and with the global display settings.
///
/// The host is passed into every call; the controller never keeps a
/// reference to it.
pub struct ViewSyncController {
    views: BTreeMap<String, ViewOverlayState>,
    config: OverlayConfig,
    camera_distance: f64,
    assets: Option<Rc<FigureAssets>>,
}

impl ViewSyncController {
    pub fn new(config: OverlayConfig, assets: Rc<FigureAssets>) -> Self {
        Self::with_assets(config, Some(assets))
    }

    /// Controller whose figure could not be loaded. Showing the figure has no
    /// visible effect.
    pub fn without_assets(config: OverlayConfig) -> Self {
        Self::with_assets(config, None)
    }

    /// Load the figure meshes from the configured model directory.
    ///
    /// A load failure is reported once and disables the figure.
    pub fn load(config: OverlayConfig, loader: &mut impl MeshLoader) -> Self {
        match FigureAssets::load(loader, &config.model_dir) {
            Ok(assets) => Self::new(config, Rc::new(assets)),
            Err(err) => {
                warn!(error = %err, "Orientation figure disabled");
                Self::without_assets(config)
            }
        }
    }

    fn with_assets(config: OverlayConfig, assets: Option<Rc<FigureAssets>>) -> Self {
        let camera_distance = config.camera_distance();
        Self {
            views: BTreeMap::new(),
            config,
            camera_distance,
            assets,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn camera_distance(&self) -> f64 {
        self.camera_distance
    }

    pub fn is_figure_available(&self) -> bool {
        self.assets.is_some()
    }

    /// Zoom and viewport controls only apply while the figure is shown.
    pub fn controls_enabled(&self) -> bool {
        self.config.show_figure
    }

    pub fn tracked_views(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    pub fn view_state(&self, view_id: &str) -> Option<&ViewOverlayState> {
        self.views.get(view_id)
    }

    /// Track every host view not seen before and subscribe to its changes.
    ///
    /// Views missing from the host are dropped when
    /// `prune_vanished_views` is set. Returns the number of new views.
    pub fn discover_views(&mut self, host: &mut dyn SliceViewHost) -> usize {
        let current: BTreeSet<String> = host.list_view_names().into_iter().collect();

        let mut added = 0;
        for name in &current {
            if self.views.contains_key(name) {
                continue;
            }
            host.subscribe(name);
            self.views
                .insert(name.clone(), ViewOverlayState::new(name.as_str()));
            debug!(view = %name, "Tracking slice view");
            added += 1;
        }

        if self.config.prune_vanished_views {
            self.views.retain(|name, _| {
                let present = current.contains(name);
                if !present {
                    debug!(view = %name, "Slice view vanished");
                }
                present
            });
        }

        added
    }

    /// Host notification that `view_id`'s slice logic was modified.
    pub fn on_view_changed(&mut self, host: &mut dyn SliceViewHost, view_id: &str) {
        let added = self.discover_views(host);
        if added > 0 {
            info!(added, "New slice views discovered");
        }
        if !self.views.contains_key(view_id) {
            debug!(view = %view_id, "Change notification for untracked view");
        }
        self.render_all(host);
    }

    /// Bring one view's overlay up to date with the current settings.
    ///
    /// # Errors
    ///
    /// Only unexpected conditions are errors: the view is not tracked or its
    /// render surface cannot be resolved. Missing orientation data yields
    /// [`RenderOutcome::Skipped`] and takes any stale overlay off the view.
    pub fn render(
        &mut self,
        host: &mut dyn SliceViewHost,
        view_id: &str,
    ) -> Result<RenderOutcome> {
        let state = self
            .views
            .get_mut(view_id)
            .ok_or_else(|| OverlayError::UnknownView {
                view: view_id.to_string(),
            })?;

        let assets = match self.assets.as_deref() {
            Some(assets) if self.config.show_figure => assets,
            _ => return Ok(Self::hide(host, state)),
        };

        let orientation = match Self::current_orientation(host, view_id) {
            Ok(orientation) => orientation,
            Err(err) => {
                debug!(error = %err, "Skipping render");
                state.target_mut().clear_camera();
                Self::withdraw(host, state);
                return Ok(RenderOutcome::Skipped);
            }
        };
        let surface = host
            .render_surface(view_id)
            .ok_or_else(|| OverlayError::UnresolvedSurface {
                view: view_id.to_string(),
            })?;

        let placement = OrientationSolver::compute_camera(&orientation, self.camera_distance);
        state.set_surface(surface);

        let target = state.target_mut();
        target.set_viewport(self.config.viewport.rect());
        for actor in assets.actors() {
            target.attach(actor.part);
        }
        target.set_camera(Camera::from(placement));
        if let Some(previous) = target.composed_into()
            && previous != surface
        {
            host.withdraw_overlay(previous);
        }
        host.present_overlay(surface, target);
        target.set_composed_into(Some(surface));

        state.set_visible(true);
        host.request_redraw(view_id);
        Ok(RenderOutcome::Shown)
    }

    fn current_orientation(
        host: &dyn SliceViewHost,
        view_id: &str,
    ) -> Result<SliceOrientation> {
        host.slice_orientation(view_id)
            .ok_or_else(|| OverlayError::MissingOrientationData {
                view: view_id.to_string(),
            })
    }

    fn hide(host: &mut dyn SliceViewHost, state: &mut ViewOverlayState) -> RenderOutcome {
        Self::withdraw(host, state);
        RenderOutcome::Hidden
    }

    /// Detach the figure and take the overlay out of the view's pipeline,
    /// requesting a redraw only if that changed anything.
    fn withdraw(host: &mut dyn SliceViewHost, state: &mut ViewOverlayState) {
        let target = state.target_mut();
        let mut changed = target.detach_all();
        if let Some(surface) = target.composed_into() {
            host.withdraw_overlay(surface);
            target.set_composed_into(None);
            changed = true;
        }
        state.set_visible(false);

        if changed {
            host.request_redraw(state.view_id());
        }
    }

    /// Render every tracked view. An unexpected failure aborts the pass.
    ///
    /// Returns the views left unrendered by an aborted pass, starting with
    /// the one that failed; empty when the pass completed.
    pub fn render_all(&mut self, host: &mut dyn SliceViewHost) -> Vec<String> {
        let names: Vec<String> = self.views.keys().cloned().collect();
        for (index, name) in names.iter().enumerate() {
            if let Err(err) = self.render(host, name) {
                let skipped = &names[index + 1..];
                error!(
                    view = %name,
                    error = %err,
                    skipped = ?skipped,
                    "Render pass aborted"
                );
                return names[index..].to_vec();
            }
        }
        Vec::new()
    }

    /// Apply a global settings change to all views, discovering them first
    /// if none are tracked yet.
    fn sync(&mut self, host: &mut dyn SliceViewHost) {
        if self.views.is_empty() {
            self.discover_views(host);
        }
        self.render_all(host);
    }

    pub fn set_show_figure(&mut self, host: &mut dyn SliceViewHost, show: bool) {
        self.config.show_figure = show;
        info!(show, "Orientation figure toggled");
        self.sync(host);
    }

    /// Set the zoom slider level; the camera distance becomes
    /// `level * zoom_multiplier`.
    pub fn set_zoom(&mut self, host: &mut dyn SliceViewHost, level: f64) -> Result<()> {
        positive("zoom", level)?;
        self.config.zoom = level;
        self.camera_distance = self.config.camera_distance();
        self.sync(host);
        Ok(())
    }

    pub fn set_zoom_distance(&mut self, host: &mut dyn SliceViewHost, distance: f64) -> Result<()> {
        positive("zoom distance", distance)?;
        self.config.zoom = distance / self.config.zoom_multiplier;
        self.camera_distance = distance;
        self.sync(host);
        Ok(())
    }

    /// Width of the overlay as a fraction of the view width.
    pub fn set_viewport_width_fraction(
        &mut self,
        host: &mut dyn SliceViewHost,
        fraction: f64,
    ) -> Result<()> {
        self.config.viewport.set_width_fraction(fraction)?;
        self.sync(host);
        Ok(())
    }

    pub fn set_viewport_height_fraction(
        &mut self,
        host: &mut dyn SliceViewHost,
        fraction: f64,
    ) -> Result<()> {
        self.config.viewport.set_height_fraction(fraction)?;
        self.sync(host);
        Ok(())
    }
}
