//! # Orientation figure library
//!
//! This crate draws a small 3D human figure in the corner of every 2D slice
//! view of a medical-imaging workstation, oriented like the slice, so the
//! mapping of the displayed plane to patient anatomy is visible at a glance.
//!
//! The host workstation is reached through the [`SliceViewHost`] trait. It
//! lists the slice views, reports each view's image-to-patient rotation and
//! notifies the overlay when a view is resliced. For every view the
//! [`ViewSyncController`] keeps an overlay render target whose camera is
//! derived by the [`OrientationSolver`]:
//!  - the camera sits behind the figure along the slice normal
//!  - its up vector is the slice's vertical axis in patient space
//!
//! The figure meshes (body, shorts and two shoes) are loaded once through a
//! host-provided [`MeshLoader`] and shared by all views. Slice orientations
//! can also be read from the Image Orientation (Patient) attribute of a DICOM
//! image with the [`OrientationLoader`].
//!
//! # Examples
//!
//! ## Showing the figure in the standard views
//!
//! ```
//! # use orientation_figure::{MemoryHost, MemoryMeshLoader, OverlayConfig, ViewSyncController};
//! let mut host = MemoryHost::with_standard_views();
//! let mut controller =
//!     ViewSyncController::load(OverlayConfig::default(), &mut MemoryMeshLoader::new());
//! controller.set_show_figure(&mut host, true);
//!
//! let red = controller.view_state("Red").expect("Red view should be tracked");
//! let camera = red.target().camera().expect("camera should be set");
//! assert_eq!(camera.view_up, [0.0, 1.0, 0.0]);
//! ```

pub mod config;
pub mod enums;
pub mod error;
pub mod figure;
pub mod host;
#[cfg(feature = "memory-host")]
pub mod memory_host;
pub mod orientation;
pub mod orientation_loader;
pub mod overlay;
pub mod view_sync;

pub use config::{OverlayConfig, ViewportGeometry};
pub use enums::{FigurePart, Orientation};
pub use error::{OverlayError, Result};
pub use figure::{FigureActor, FigureAssets, MeshHandle, MeshLoadError, MeshLoader};
pub use host::{RenderSurfaceHandle, SliceViewHost};
#[cfg(feature = "memory-host")]
pub use memory_host::{MemoryHost, MemoryMeshLoader, MemoryView};
pub use orientation::{CameraPlacement, OrientationSolver, SliceOrientation};
pub use orientation_loader::{OrientationLoader, OrientationLoaderError};
pub use overlay::{Camera, OverlayRenderTarget, ViewOverlayState, ViewportRect};
pub use view_sync::{RenderOutcome, ViewSyncController};
