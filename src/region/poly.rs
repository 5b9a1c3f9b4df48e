use contracts::debug_ensures;
use geo::Point;

use crate::{
    math,
    region::{
        vertex::{RoiVertices, VertexView},
        AccessRealRegion, AccessVertices, RegionError,
    },
    roi::{Roi, RoiFamily, RoiKind, SharedRoi},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub editable: bool,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    AddVertex,
    RemoveVertex,
}

/// Polygon (closed) or polyline (open) view of a ring or chain ROI.
#[derive(Debug, Clone)]
pub struct VertexRegion {
    vertices: RoiVertices,
    capabilities: Capabilities,
}

impl VertexRegion {
    pub fn new_polygon(xs: &[f32], ys: &[f32]) -> Result<Self, RegionError> {
        Self::polygon(Roi::vertices(RoiKind::Polygon, xs, ys)?.into_shared())
    }

    pub fn new_polyline(xs: &[f32], ys: &[f32]) -> Result<Self, RegionError> {
        Self::polyline(Roi::vertices(RoiKind::Polyline, xs, ys)?.into_shared())
    }

    pub fn polygon(roi: SharedRoi) -> Result<Self, RegionError> {
        Self::wrap(
            roi,
            Capabilities {
                editable: true,
                closed: true,
            },
        )
    }

    pub fn unmodifiable_polygon(roi: SharedRoi) -> Result<Self, RegionError> {
        Self::wrap(
            roi,
            Capabilities {
                editable: false,
                closed: true,
            },
        )
    }

    /// Accepts any stroke width. Only the registry's polyline rule requires
    /// the configured width.
    pub fn polyline(roi: SharedRoi) -> Result<Self, RegionError> {
        Self::wrap(
            roi,
            Capabilities {
                editable: true,
                closed: false,
            },
        )
    }

    pub fn unmodifiable_polyline(roi: SharedRoi) -> Result<Self, RegionError> {
        Self::wrap(
            roi,
            Capabilities {
                editable: false,
                closed: false,
            },
        )
    }

    fn wrap(roi: SharedRoi, capabilities: Capabilities) -> Result<Self, RegionError> {
        Self::validate(&roi.borrow(), capabilities)?;

        Ok(Self {
            vertices: RoiVertices::new(roi),
            capabilities,
        })
    }

    fn validate(roi: &Roi, capabilities: Capabilities) -> Result<(), RegionError> {
        let (family, name) = if capabilities.closed {
            (RoiFamily::Ring, "polygon")
        } else {
            (RoiFamily::OpenChain, "polyline")
        };

        if roi.kind().family() != family {
            return Err(RegionError::InvalidRegion(format!(
                "{:?} as a {}",
                roi.kind(),
                name
            )));
        }

        if capabilities.editable && !roi.kind().is_primary() {
            return Err(RegionError::InvalidRegion(format!(
                "{:?} as an editable {}",
                roi.kind(),
                name
            )));
        }

        if roi.is_spline_fit() {
            return Err(RegionError::InvalidRegion(format!(
                "spline fitted {:?}",
                roi.kind()
            )));
        }

        Ok(())
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_editable(&self) -> bool {
        self.capabilities.editable
    }

    pub fn is_closed(&self) -> bool {
        self.capabilities.closed
    }

    pub fn roi(&self) -> SharedRoi {
        self.vertices.roi().clone()
    }

    fn check_mutation(&self, mutation: Mutation) -> Result<(), RegionError> {
        match mutation {
            // The backing ROI offers no way to insert a vertex.
            Mutation::AddVertex => Err(RegionError::Unsupported("add_vertex")),
            Mutation::RemoveVertex if !self.capabilities.editable => Err(
                RegionError::Unsupported("remove_vertex on an unmodifiable region"),
            ),
            Mutation::RemoveVertex => Ok(()),
        }
    }

    pub fn add_vertex(&mut self, _index: usize, _position: Point) -> Result<(), RegionError> {
        self.check_mutation(Mutation::AddVertex)
    }

    #[debug_ensures(ret.is_ok() -> self.num_vertices() + 1 == old(self.num_vertices()))]
    #[debug_ensures(ret.is_err() -> self.num_vertices() == old(self.num_vertices()))]
    pub fn remove_vertex(&mut self, index: usize) -> Result<(), RegionError> {
        self.check_mutation(Mutation::RemoveVertex)?;
        self.vertices.remove_vertex(index)
    }
}

impl AccessVertices for VertexRegion {
    fn num_vertices(&self) -> usize {
        self.vertices.num_vertices()
    }

    fn vertex(&self, index: usize) -> Result<VertexView, RegionError> {
        self.vertices.vertex(index)
    }
}

impl AccessRealRegion for VertexRegion {
    fn real_min(&self, d: usize) -> Result<f64, RegionError> {
        self.vertices.real_min(d)
    }

    fn real_max(&self, d: usize) -> Result<f64, RegionError> {
        self.vertices.real_max(d)
    }

    fn test(&self, p: Point) -> bool {
        let roi = self.vertices.roi().borrow();

        if self.capabilities.closed {
            math::pnpoly(roi.x_points(), roi.y_points(), p)
        } else {
            math::chain_contains(roi.x_points(), roi.y_points(), p)
        }
    }
}
