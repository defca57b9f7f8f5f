use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orientation_figure::{
    MemoryHost, MemoryMeshLoader, OrientationLoader, OverlayConfig, SliceViewHost,
    ViewSyncController,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orientation-figure", about = "Orientation figure overlay demo")]
#[command(version)]
struct Cli {
    /// Overlay settings (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// DICOM file whose orientation is applied to the Red view
    #[arg(long)]
    dicom: Option<PathBuf>,

    /// Override the zoom level
    #[arg(long)]
    zoom: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => OverlayConfig::load(path)
            .with_context(|| format!("Invalid config {}", path.display()))?,
        None => OverlayConfig::default(),
    };

    let mut host = MemoryHost::with_standard_views();
    let mut controller = ViewSyncController::load(config, &mut MemoryMeshLoader::new());
    controller.set_show_figure(&mut host, true);

    if let Some(zoom) = cli.zoom {
        controller.set_zoom(&mut host, zoom)?;
    }
    if let Some(path) = &cli.dicom {
        let orientation = OrientationLoader::load_from_file_path(path)
            .with_context(|| format!("No orientation in {}", path.display()))?;
        host.set_orientation("Red", Some(orientation));
        host.dispatch(&mut controller);
    }

    for name in host.list_view_names() {
        let Some(camera) = controller
            .view_state(&name)
            .and_then(|state| state.target().camera())
        else {
            println!("{name}: no camera");
            continue;
        };
        println!(
            "{name}: position {:?} view up {:?}",
            camera.position, camera.view_up
        );
    }
    Ok(())
}
