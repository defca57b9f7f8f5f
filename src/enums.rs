/// Standard slice orientations offered by the host's slice views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Axial,
    Coronal,
    Sagittal,
}

impl Orientation {
    /// Rows of the slice-to-patient (RAS) rotation for this preset.
    ///
    /// Columns are the patient-space directions of the slice X, Y and normal
    /// axes.
    pub fn rotation_rows(&self) -> [[f64; 3]; 3] {
        match self {
            // X -> patient left, Y -> anterior, normal -> superior
            Orientation::Axial => [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            // X -> patient left, Y -> superior, normal -> anterior
            Orientation::Coronal => [[-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]],
            // X -> posterior, Y -> superior, normal -> right
            Orientation::Sagittal => [[0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        }
    }

    /// Name of the default slice view showing this orientation.
    pub fn default_view_name(&self) -> &'static str {
        match self {
            Orientation::Axial => "Red",
            Orientation::Coronal => "Green",
            Orientation::Sagittal => "Yellow",
        }
    }

    pub fn from_view_name(name: &str) -> Option<Self> {
        match name {
            "Red" => Some(Orientation::Axial),
            "Green" => Some(Orientation::Coronal),
            "Yellow" => Some(Orientation::Sagittal),
            _ => None,
        }
    }
}

/// The meshes making up the orientation figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FigurePart {
    Body,
    Shorts,
    LeftShoe,
    RightShoe,
}

impl FigurePart {
    pub const ALL: [FigurePart; 4] = [
        FigurePart::Body,
        FigurePart::Shorts,
        FigurePart::LeftShoe,
        FigurePart::RightShoe,
    ];

    pub fn mesh_file(&self) -> &'static str {
        match self {
            FigurePart::Body => "slicer-human-model.stl",
            FigurePart::Shorts => "shorts-model.stl",
            FigurePart::LeftShoe => "left-shoe.stl",
            FigurePart::RightShoe => "right-shoe.stl",
        }
    }

    /// Fixed RGB color of the part.
    pub fn color(&self) -> [f32; 3] {
        match self {
            FigurePart::Body => [0.93, 0.81, 0.80],
            FigurePart::Shorts => [0.0, 0.0, 1.0],
            FigurePart::LeftShoe => [1.0, 0.0, 0.0],
            FigurePart::RightShoe => [0.0, 1.0, 0.0],
        }
    }
}
