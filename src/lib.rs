//! Live geometric views over legacy regions of interest.
//!
//! A [`roi::Roi`] is edited imperatively by its owner. The adapters in
//! [`region`] expose it as a real-valued region without copying it, and the
//! [`convert::ConverterRegistry`] picks which adapter, if any, may represent a
//! given ROI.

pub mod convert;
pub mod math;
pub mod region;
pub mod roi;
