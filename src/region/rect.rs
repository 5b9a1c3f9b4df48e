use geo::Point;

use crate::{
    region::{check_dimension, rect_max, rect_min, AccessRealRegion, RegionError},
    roi::{Roi, RoiFamily, SharedRoi},
};

/// Axis-aligned box view. Bounds and hit-test are the ROI's own, so its
/// half-open coordinate convention carries over unchanged.
#[derive(Debug, Clone)]
pub struct BoxRegion {
    roi: SharedRoi,
}

impl BoxRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, RegionError> {
        Self::wrap(Roi::rectangle(x, y, width, height)?.into_shared())
    }

    pub fn wrap(roi: SharedRoi) -> Result<Self, RegionError> {
        {
            let r = roi.borrow();

            if r.family() != RoiFamily::AxisBox {
                return Err(RegionError::InvalidRegion(format!("{:?} as a box", r.kind())));
            }

            if r.corner_radius() != 0.0 {
                return Err(RegionError::InvalidRegion(format!(
                    "rounded rectangle (corner radius {}) as a box",
                    r.corner_radius()
                )));
            }
        }

        Ok(Self { roi })
    }

    pub fn center(&self) -> Point {
        self.roi.borrow().bounds().center().into()
    }

    pub fn side_length(&self, d: usize) -> Result<f64, RegionError> {
        check_dimension(d)?;

        let bounds = self.roi.borrow().bounds();
        Ok(if d == 0 {
            bounds.width()
        } else {
            bounds.height()
        })
    }

    pub fn roi(&self) -> SharedRoi {
        self.roi.clone()
    }
}

impl AccessRealRegion for BoxRegion {
    fn real_min(&self, d: usize) -> Result<f64, RegionError> {
        rect_min(self.roi.borrow().bounds(), d)
    }

    fn real_max(&self, d: usize) -> Result<f64, RegionError> {
        rect_max(self.roi.borrow().bounds(), d)
    }

    fn test(&self, p: Point) -> bool {
        self.roi.borrow().contains_point(p)
    }
}
