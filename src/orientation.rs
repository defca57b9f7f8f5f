use ndarray::{Array2, arr1, arr2, s};

use crate::enums::Orientation;

/// 3x3 image-to-patient rotation of a slice view.
///
/// The columns are the patient-space directions of the slice X, Y and normal
/// axes. The matrix is always 3x3; orthonormality is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceOrientation {
    matrix: Array2<f64>,
}

impl Default for SliceOrientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl SliceOrientation {
    pub fn identity() -> Self {
        Self {
            matrix: Array2::eye(3),
        }
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self {
            matrix: arr2(&rows),
        }
    }

    /// Build from the patient-space directions of the slice axes.
    pub fn from_columns(x_axis: [f64; 3], y_axis: [f64; 3], normal: [f64; 3]) -> Self {
        let mut matrix = Array2::zeros((3, 3));
        for (col, axis) in [x_axis, y_axis, normal].iter().enumerate() {
            for (row, value) in axis.iter().enumerate() {
                matrix[[row, col]] = *value;
            }
        }
        Self { matrix }
    }

    pub fn from_preset(orientation: Orientation) -> Self {
        Self::from_rows(orientation.rotation_rows())
    }

    /// Take the rotation part of a homogeneous slice transform such as a 4x4
    /// XY-to-RAS matrix. Returns `None` when the transform is smaller than 3x3.
    pub fn from_transform(transform: &Array2<f64>) -> Option<Self> {
        let (rows, cols) = transform.dim();
        if rows < 3 || cols < 3 {
            return None;
        }
        Some(Self {
            matrix: transform.slice(s![..3, ..3]).to_owned(),
        })
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// `self · other`
    pub fn compose(&self, other: &SliceOrientation) -> SliceOrientation {
        SliceOrientation {
            matrix: self.matrix.dot(&other.matrix),
        }
    }

    /// Map a slice-local vector into patient space.
    pub fn transform(&self, local: [f64; 3]) -> [f64; 3] {
        let v = self.matrix.dot(&arr1(&local));
        [v[0], v[1], v[2]]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPlacement {
    pub position: [f64; 3],
    pub view_up: [f64; 3],
}

pub struct OrientationSolver;

impl OrientationSolver {
    /// Place a camera so the figure appears oriented like the slice.
    ///
    /// The camera sits `distance` behind the figure along the slice normal,
    /// mirrored into patient space (`-(R · [0, 0, d])`), and its up vector is
    /// the slice Y axis (`R · [0, 1, 0]`). No normalization is applied.
    pub fn compute_camera(rotation: &SliceOrientation, distance: f64) -> CameraPlacement {
        let back = rotation.transform([0.0, 0.0, distance]);
        let view_up = rotation.transform([0.0, 1.0, 0.0]);

        CameraPlacement {
            position: [-back[0], -back[1], -back[2]],
            view_up,
        }
    }
}
