#![allow(dead_code)]

use legacy_roi::{
    region::AccessRealRegion,
    roi::{Roi, RoiKind, SharedRoi},
};

pub const RING_XS: [f32; 5] = [100.5, 100.5, 150.0, 199.0, 199.0];
pub const RING_YS: [f32; 5] = [100.0, 200.0, 250.25, 200.0, 100.0];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ring_roi(kind: RoiKind) -> SharedRoi {
    Roi::vertices(kind, &RING_XS, &RING_YS)
        .unwrap()
        .into_shared()
}

pub fn attached(roi: &SharedRoi) -> &SharedRoi {
    roi.borrow_mut().attach();
    roi
}

/// Asserts `[min x, min y, max x, max y]`.
pub fn assert_bounds(region: &impl AccessRealRegion, expected: [f64; 4]) {
    let actual = [
        region.real_min(0).unwrap(),
        region.real_min(1).unwrap(),
        region.real_max(0).unwrap(),
        region.real_max(1).unwrap(),
    ];
    dbg!(actual);
    assert_eq!(actual, expected);
}
