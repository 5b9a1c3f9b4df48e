use geo::Point;

use crate::{
    region::{rect_max, rect_min, AccessRealRegion, RegionError},
    roi::{RoiKind, SharedRoi},
};

/// Region predicate over a composite ROI. Bounds come from the ROI's
/// integer-quantized box, so `real_max` may exceed the true extent by up to
/// one unit.
#[derive(Debug, Clone)]
pub struct CompoundRegion {
    roi: SharedRoi,
}

impl CompoundRegion {
    pub fn wrap(roi: SharedRoi) -> Result<Self, RegionError> {
        let kind = roi.borrow().kind();

        if kind != RoiKind::Composite {
            return Err(RegionError::InvalidRegion(format!(
                "{:?} as a compound shape",
                kind
            )));
        }

        Ok(Self { roi })
    }

    pub fn roi(&self) -> SharedRoi {
        self.roi.clone()
    }
}

impl AccessRealRegion for CompoundRegion {
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
