use geo::{point, Point};

use crate::{
    region::{check_dimension, AccessVertices, RegionError},
    roi::SharedRoi,
};

/// A vertex read from the ROI's coordinate buffers at the moment it is
/// queried. Positions cannot be changed through a view.
#[derive(Debug, Clone)]
pub struct VertexView {
    roi: SharedRoi,
    index: usize,
}

impl VertexView {
    pub(crate) fn new(roi: SharedRoi, index: usize) -> Self {
        Self { roi, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self, d: usize) -> Result<f64, RegionError> {
        check_dimension(d)?;

        let roi = self.roi.borrow();
        let coords = if d == 0 {
            roi.x_points()
        } else {
            roi.y_points()
        };

        coords.get(self.index).map(|&c| f64::from(c)).ok_or_else(|| {
            RegionError::InvalidArgument(format!("vertex {} no longer exists", self.index))
        })
    }

    pub fn point(&self) -> Result<Point, RegionError> {
        Ok(point! {x: self.position(0)?, y: self.position(1)?})
    }

    pub fn set_position(&self, _position: Point) -> Result<(), RegionError> {
        Err(RegionError::Unsupported("set_position"))
    }

    pub fn move_by(&self, _distance: Point) -> Result<(), RegionError> {
        Err(RegionError::Unsupported("move_by"))
    }
}

/// Bounds and vertex access shared by every vertex-based adapter. Nothing is
/// cached: each query rescans the ROI's current coordinates.
#[derive(Debug, Clone)]
pub struct RoiVertices {
    roi: SharedRoi,
}

impl RoiVertices {
    pub fn new(roi: SharedRoi) -> Self {
        Self { roi }
    }

    pub fn roi(&self) -> &SharedRoi {
        &self.roi
    }

    pub fn real_min(&self, d: usize) -> Result<f64, RegionError> {
        self.fold(d, f64::INFINITY, f64::min)
    }

    pub fn real_max(&self, d: usize) -> Result<f64, RegionError> {
        self.fold(d, f64::NEG_INFINITY, f64::max)
    }

    fn fold(&self, d: usize, init: f64, f: fn(f64, f64) -> f64) -> Result<f64, RegionError> {
        check_dimension(d)?;

        let roi = self.roi.borrow();
        let coords = if d == 0 {
            roi.x_points()
        } else {
            roi.y_points()
        };

        Ok(coords.iter().map(|&c| f64::from(c)).fold(init, f))
    }

    /// Looks up the current position of vertex `index` and asks the ROI to
    /// delete the vertex at that position. Only ROIs attached to a display
    /// accept deletions.
    pub fn remove_vertex(&self, index: usize) -> Result<(), RegionError> {
        let mut roi = self.roi.borrow_mut();

        if !roi.is_attached() {
            return Err(RegionError::Unsupported(
                "remove_vertex on a ROI without a display",
            ));
        }

        let (Some(&x), Some(&y)) = (roi.x_points().get(index), roi.y_points().get(index)) else {
            return Err(RegionError::InvalidArgument(format!(
                "vertex index {} out of range for {} vertices",
                index,
                roi.n_coordinates()
            )));
        };

        if !roi.delete_vertex_at(f64::from(x), f64::from(y)) {
            return Err(RegionError::Unsupported("remove_vertex"));
        }

        Ok(())
    }
}

impl AccessVertices for RoiVertices {
    fn num_vertices(&self) -> usize {
        self.roi.borrow().n_coordinates()
    }

    fn vertex(&self, index: usize) -> Result<VertexView, RegionError> {
        let count = self.num_vertices();

        if index >= count {
            return Err(RegionError::InvalidArgument(format!(
                "vertex index {} out of range for {} vertices",
                index, count
            )));
        }

        Ok(VertexView::new(self.roi.clone(), index))
    }
}
