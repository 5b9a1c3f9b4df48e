use enum_dispatch::enum_dispatch;
use geo::{Point, Rect};
use thiserror::Error;

use crate::{
    convert::RegionInterface,
    region::{
        compound::CompoundRegion, line::LineRegion, poly::VertexRegion, rect::BoxRegion,
        vertex::VertexView,
    },
    roi::SharedRoi,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("cannot wrap {0}")]
    InvalidRegion(String),
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// A real-valued two-dimensional region predicate with per-dimension bounds.
#[enum_dispatch]
pub trait AccessRealRegion {
    fn real_min(&self, d: usize) -> Result<f64, RegionError>;
    fn real_max(&self, d: usize) -> Result<f64, RegionError>;
    fn test(&self, p: Point) -> bool;
}

pub trait AccessVertices {
    fn num_vertices(&self) -> usize;
    fn vertex(&self, index: usize) -> Result<VertexView, RegionError>;
}

#[enum_dispatch(AccessRealRegion)]
#[derive(Debug, Clone)]
pub enum RealRegion {
    Vertices(VertexRegion),
    Line(LineRegion),
    Box(BoxRegion),
    Compound(CompoundRegion),
}

impl RealRegion {
    pub fn interface(&self) -> RegionInterface {
        match self {
            RealRegion::Vertices(region) if region.is_closed() => RegionInterface::Polygon,
            RealRegion::Vertices(..) => RegionInterface::Polyline,
            RealRegion::Line(..) => RegionInterface::Line,
            RealRegion::Box(..) => RegionInterface::Box,
            RealRegion::Compound(..) => RegionInterface::Mask,
        }
    }

    pub fn as_vertices(&self) -> Option<&dyn AccessVertices> {
        match self {
            RealRegion::Vertices(region) => Some(region),
            RealRegion::Line(line) => Some(line),
            RealRegion::Box(..) | RealRegion::Compound(..) => None,
        }
    }

    pub fn roi(&self) -> SharedRoi {
        match self {
            RealRegion::Vertices(region) => region.roi(),
            RealRegion::Line(line) => line.roi(),
            RealRegion::Box(rect) => rect.roi(),
            RealRegion::Compound(compound) => compound.roi(),
        }
    }
}

pub(crate) fn check_dimension(d: usize) -> Result<(), RegionError> {
    if d > 1 {
        return Err(RegionError::InvalidArgument(format!("invalid dimension {}", d)));
    }

    Ok(())
}

pub(crate) fn rect_min(rect: Rect, d: usize) -> Result<f64, RegionError> {
    check_dimension(d)?;
    Ok(if d == 0 { rect.min().x } else { rect.min().y })
}

pub(crate) fn rect_max(rect: Rect, d: usize) -> Result<f64, RegionError> {
    check_dimension(d)?;
    Ok(if d == 0 { rect.max().x } else { rect.max().y })
}
