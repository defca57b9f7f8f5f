use crate::orientation::SliceOrientation;

use dicom::object::{InMemDicomObject, open_file};
use dicom_dictionary_std::tags;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrientationLoaderError {
    #[error("No DICOM file found")]
    NoDicomFile,

    #[error("Missing Image Orientation (Patient)")]
    MissingOrientation,

    #[error("Image Orientation (Patient) has {0} values, expected 6")]
    MalformedOrientation(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DICOM error: {0}")]
    Dicom(#[from] dicom::object::ReadError),
}

/// Derives slice orientations from DICOM images.
///
/// DICOM direction cosines are given in LPS; the resulting
/// [`SliceOrientation`] is in RAS, with the slice Y axis pointing up on
/// screen (opposite to the DICOM column direction).
pub struct OrientationLoader;

impl OrientationLoader {
    /// Read the Image Orientation (Patient) attribute of a DICOM object.
    ///
    /// # Errors
    ///
    /// Returns error if the attribute is absent or does not hold six values
    pub fn load_from_dicom_object(
        dicom_object: &InMemDicomObject,
    ) -> Result<SliceOrientation, OrientationLoaderError> {
        let cosines = dicom_object
            .element(tags::IMAGE_ORIENTATION_PATIENT)
            .ok()
            .and_then(|element| element.to_multi_float64().ok())
            .ok_or(OrientationLoaderError::MissingOrientation)?;

        Self::from_direction_cosines(&cosines)
    }

    pub fn load_from_file_path(
        path: impl AsRef<Path>,
    ) -> Result<SliceOrientation, OrientationLoaderError> {
        let object = open_file(path.as_ref())?;
        Self::load_from_dicom_object(&object)
    }

    /// Use the first ".dcm" file of a directory, in file name order.
    pub fn load_from_directory(
        path: impl AsRef<Path>,
    ) -> Result<SliceOrientation, OrientationLoaderError> {
        let mut paths: Vec<_> = fs::read_dir(path.as_ref())?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("dcm"))
            })
            .collect();
        paths.sort();

        let first = paths.first().ok_or(OrientationLoaderError::NoDicomFile)?;
        Self::load_from_file_path(first)
    }

    /// Build an orientation from the six LPS direction cosines (row
    /// direction followed by column direction).
    pub fn from_direction_cosines(
        cosines: &[f64],
    ) -> Result<SliceOrientation, OrientationLoaderError> {
        if cosines.len() != 6 {
            return Err(OrientationLoaderError::MalformedOrientation(cosines.len()));
        }
        let row = [cosines[0], cosines[1], cosines[2]];
        let column = [cosines[3], cosines[4], cosines[5]];
        let normal = Self::cross(row, column);

        let x_axis = Self::lps_to_ras(row);
        let [cx, cy, cz] = Self::lps_to_ras(column);
        let y_axis = [-cx, -cy, -cz];

        Ok(SliceOrientation::from_columns(
            x_axis,
            y_axis,
            Self::lps_to_ras(normal),
        ))
    }

    #[inline]
    fn lps_to_ras(v: [f64; 3]) -> [f64; 3] {
        [-v[0], -v[1], v[2]]
    }

    #[inline]
    fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [
            a[1].mul_add(b[2], -(a[2] * b[1])),
            a[2].mul_add(b[0], -(a[0] * b[2])),
            a[0].mul_add(b[1], -(a[1] * b[0])),
        ]
    }
}
