use geo::Point;

use crate::{
    math,
    region::{
        vertex::{RoiVertices, VertexView},
        AccessRealRegion, AccessVertices, RegionError,
    },
    roi::{Roi, RoiKind, SharedRoi},
};

/// Two-endpoint segment view of a line ROI. Arrows are refused: they share a
/// line's endpoints but not its hit-test.
#[derive(Debug, Clone)]
pub struct LineRegion {
    vertices: RoiVertices,
}

impl LineRegion {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            vertices: RoiVertices::new(Roi::line(x1, y1, x2, y2).into_shared()),
        }
    }

    /// Stroke width is not checked here; the registry's line rule owns the
    /// width threshold.
    pub fn wrap(roi: SharedRoi) -> Result<Self, RegionError> {
        let kind = roi.borrow().kind();

        match kind {
            RoiKind::Line => Ok(Self {
                vertices: RoiVertices::new(roi),
            }),
            RoiKind::Arrow => Err(RegionError::InvalidRegion(
                "Arrow as a line, its hit-test differs".to_string(),
            )),
            _ => Err(RegionError::InvalidRegion(format!("{:?} as a line", kind))),
        }
    }

    pub fn endpoint_one(&self) -> VertexView {
        VertexView::new(self.vertices.roi().clone(), 0)
    }

    pub fn endpoint_two(&self) -> VertexView {
        VertexView::new(self.vertices.roi().clone(), 1)
    }

    pub fn roi(&self) -> SharedRoi {
        self.vertices.roi().clone()
    }
}

impl AccessVertices for LineRegion {
    fn num_vertices(&self) -> usize {
        self.vertices.num_vertices()
    }

    fn vertex(&self, index: usize) -> Result<VertexView, RegionError> {
        self.vertices.vertex(index)
    }
}

impl AccessRealRegion for LineRegion {
    fn real_min(&self, d: usize) -> Result<f64, RegionError> {
        self.vertices.real_min(d)
    }

    fn real_max(&self, d: usize) -> Result<f64, RegionError> {
        self.vertices.real_max(d)
    }

    fn test(&self, p: Point) -> bool {
        let roi = self.vertices.roi().borrow();
        math::chain_contains(roi.x_points(), roi.y_points(), p)
    }
}
