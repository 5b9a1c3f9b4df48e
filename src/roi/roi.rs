use std::{cell::RefCell, rc::Rc};

use geo::{coord, Point, Rect};

use crate::{
    math,
    region::RegionError,
    roi::shape::{AccessShape, CompositeShape, RectShape},
};

/// Live handle through which any number of adapters observe and mutate the
/// same ROI.
pub type SharedRoi = Rc<RefCell<Roi>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoiFamily {
    Ring,
    OpenChain,
    Segment,
    AxisBox,
    Combined,
}

impl RoiFamily {
    /// The sub-kind that is fully editable within this family.
    pub fn primary_kind(&self) -> RoiKind {
        match self {
            RoiFamily::Ring => RoiKind::Polygon,
            RoiFamily::OpenChain => RoiKind::Polyline,
            RoiFamily::Segment => RoiKind::Line,
            RoiFamily::AxisBox => RoiKind::Rectangle,
            RoiFamily::Combined => RoiKind::Composite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoiKind {
    Polygon,
    Freehand,
    Traced,
    Ellipse,
    RotatedRect,
    Polyline,
    Freeline,
    Angle,
    Line,
    Arrow,
    Rectangle,
    Composite,
}

impl RoiKind {
    pub fn family(&self) -> RoiFamily {
        match self {
            RoiKind::Polygon
            | RoiKind::Freehand
            | RoiKind::Traced
            | RoiKind::Ellipse
            | RoiKind::RotatedRect => RoiFamily::Ring,
            RoiKind::Polyline | RoiKind::Freeline | RoiKind::Angle => RoiFamily::OpenChain,
            RoiKind::Line | RoiKind::Arrow => RoiFamily::Segment,
            RoiKind::Rectangle => RoiFamily::AxisBox,
            RoiKind::Composite => RoiFamily::Combined,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.family().primary_kind() == *self
    }

    pub fn has_vertices(&self) -> bool {
        matches!(
            self.family(),
            RoiFamily::Ring | RoiFamily::OpenChain | RoiFamily::Segment
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RoiGeometry {
    Vertices { xs: Vec<f32>, ys: Vec<f32> },
    Rect(RectShape),
    Composite(CompositeShape),
}

/// An imperatively edited region of interest: vertex buffers, a rectangle or
/// a combined shape, plus the display flags that govern how it may be viewed.
#[derive(Debug, Clone, PartialEq)]
pub struct Roi {
    kind: RoiKind,
    geometry: RoiGeometry,
    spline_fit: bool,
    stroke_width: f32,
    corner_radius: f64,
    attached: bool,
}

impl Roi {
    fn from_geometry(kind: RoiKind, geometry: RoiGeometry) -> Self {
        Self {
            kind,
            geometry,
            spline_fit: false,
            stroke_width: 0.0,
            corner_radius: 0.0,
            attached: false,
        }
    }

    pub fn vertices(kind: RoiKind, xs: &[f32], ys: &[f32]) -> Result<Self, RegionError> {
        if xs.len() != ys.len() {
            return Err(RegionError::InvalidArgument(format!(
                "{} x coordinates but {} y coordinates",
                xs.len(),
                ys.len()
            )));
        }

        Self::vertices_with_count(kind, xs, ys, xs.len())
    }

    /// Takes the first `count` entries of each coordinate array.
    pub fn vertices_with_count(
        kind: RoiKind,
        xs: &[f32],
        ys: &[f32],
        count: usize,
    ) -> Result<Self, RegionError> {
        if count > xs.len() || count > ys.len() {
            return Err(RegionError::InvalidArgument(format!(
                "{} vertices requested from {} x and {} y coordinates",
                count,
                xs.len(),
                ys.len()
            )));
        }

        if !kind.has_vertices() {
            return Err(RegionError::InvalidRegion(format!(
                "{:?} is not described by vertices",
                kind
            )));
        }

        if kind.family() == RoiFamily::Segment && count != 2 {
            return Err(RegionError::InvalidArgument(format!(
                "{:?} needs 2 vertices, got {}",
                kind, count
            )));
        }

        Ok(Self::from_geometry(
            kind,
            RoiGeometry::Vertices {
                xs: xs[..count].to_vec(),
                ys: ys[..count].to_vec(),
            },
        ))
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::from_geometry(
            RoiKind::Line,
            RoiGeometry::Vertices {
                xs: vec![x1, x2],
                ys: vec![y1, y2],
            },
        )
    }

    pub fn arrow(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            kind: RoiKind::Arrow,
            ..Self::line(x1, y1, x2, y2)
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Result<Self, RegionError> {
        if width < 0.0 || height < 0.0 {
            return Err(RegionError::InvalidArgument(format!(
                "negative rectangle size {}x{}",
                width, height
            )));
        }

        Ok(Self::from_geometry(
            RoiKind::Rectangle,
            RoiGeometry::Rect(RectShape::new(x, y, width, height)),
        ))
    }

    pub fn composite(shape: impl Into<CompositeShape>) -> Self {
        Self::from_geometry(RoiKind::Composite, RoiGeometry::Composite(shape.into()))
    }

    pub fn into_shared(self) -> SharedRoi {
        Rc::new(RefCell::new(self))
    }

    pub fn kind(&self) -> RoiKind {
        self.kind
    }

    /// The region-family tag. A composite made of a single plain rectangle is
    /// reported as an axis-aligned box.
    pub fn family(&self) -> RoiFamily {
        match &self.geometry {
            RoiGeometry::Composite(shape) if shape.as_rect().is_some() => RoiFamily::AxisBox,
            _ => self.kind.family(),
        }
    }

    pub fn is_spline_fit(&self) -> bool {
        self.spline_fit
    }

    pub fn set_spline_fit(&mut self, spline_fit: bool) {
        self.spline_fit = spline_fit;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        self.stroke_width = stroke_width;
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn set_corner_radius(&mut self, corner_radius: f64) {
        self.corner_radius = corner_radius;
    }

    /// Whether the ROI is currently shown in a live display.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn n_coordinates(&self) -> usize {
        match &self.geometry {
            RoiGeometry::Vertices { xs, .. } => xs.len(),
            _ => 0,
        }
    }

    pub fn x_points(&self) -> &[f32] {
        match &self.geometry {
            RoiGeometry::Vertices { xs, .. } => xs,
            _ => &[],
        }
    }

    pub fn y_points(&self) -> &[f32] {
        match &self.geometry {
            RoiGeometry::Vertices { ys, .. } => ys,
            _ => &[],
        }
    }

    pub fn shape(&self) -> Option<&CompositeShape> {
        match &self.geometry {
            RoiGeometry::Composite(shape) => Some(shape),
            _ => None,
        }
    }

    /// Bounding box. Composite shapes report integer-quantized bounds.
    pub fn bounds(&self) -> Rect {
        match &self.geometry {
            RoiGeometry::Vertices { xs, ys } => {
                if xs.is_empty() {
                    return Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: 0.0, y: 0.0});
                }

                let (min_x, max_x) = min_max(xs);
                let (min_y, max_y) = min_max(ys);
                Rect::new(coord! {x: min_x, y: min_y}, coord! {x: max_x, y: max_y})
            }
            RoiGeometry::Rect(rect) => rect.rect(),
            RoiGeometry::Composite(shape) => shape.quantized_bounds(),
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        match &self.geometry {
            RoiGeometry::Vertices { xs, ys } => match self.kind.family() {
                RoiFamily::Ring => math::pnpoly(xs, ys, p),
                _ => math::chain_contains(xs, ys, p),
            },
            RoiGeometry::Rect(rect) => rounded_rect_contains(rect, self.corner_radius, p),
            RoiGeometry::Composite(shape) => shape.contains(p),
        }
    }

    /// Deletes the first ring or chain vertex located exactly at `(x, y)`.
    /// Does nothing unless the ROI is attached to a display. Returns whether
    /// a vertex was removed.
    pub fn delete_vertex_at(&mut self, x: f64, y: f64) -> bool {
        if !self.attached || !matches!(self.kind.family(), RoiFamily::Ring | RoiFamily::OpenChain)
        {
            return false;
        }

        let RoiGeometry::Vertices { xs, ys } = &mut self.geometry else {
            return false;
        };

        let Some(index) = xs
            .iter()
            .zip(ys.iter())
            .position(|(&vx, &vy)| f64::from(vx) == x && f64::from(vy) == y)
        else {
            return false;
        };

        xs.remove(index);
        ys.remove(index);
        log::trace!(
            "deleted vertex {} at ({}, {}) of {:?}",
            index,
            x,
            y,
            self.kind
        );
        true
    }

    /// Moves the whole ROI by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match &mut self.geometry {
            RoiGeometry::Vertices { xs, ys } => {
                xs.iter_mut().for_each(|x| *x = (f64::from(*x) + dx) as f32);
                ys.iter_mut().for_each(|y| *y = (f64::from(*y) + dy) as f32);
            }
            RoiGeometry::Rect(rect) => rect.translate(dx, dy),
            RoiGeometry::Composite(shape) => shape.translate(dx, dy),
        }
    }
}

fn min_max(values: &[f32]) -> (f64, f64) {
    values
        .iter()
        .map(|&v| f64::from(v))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}

fn rounded_rect_contains(rect: &RectShape, corner_radius: f64, p: Point) -> bool {
    if !rect.contains(p) {
        return false;
    }

    if corner_radius <= 0.0 {
        return true;
    }

    // Distance to the rectangle shrunk by the radius, which may come out
    // inverted by an ulp.
    let r = corner_radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let cx = p.x().max(rect.x + r).min(rect.x + rect.width - r);
    let cy = p.y().max(rect.y + r).min(rect.y + rect.height - r);
    let (dx, dy) = (p.x() - cx, p.y() - cy);
    dx * dx + dy * dy < r * r
}
