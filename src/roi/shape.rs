//! Combined shapes: primitive rectangles, ellipses and polygons joined by
//! boolean operations, as held by composite ROIs.

use enum_dispatch::enum_dispatch;
use geo::{coord, Point, Rect};

use crate::math;

#[enum_dispatch]
pub trait AccessShape {
    fn contains(&self, p: Point) -> bool;
    /// Real-valued bounding rectangle, `None` when the shape is empty.
    fn bounding_rect(&self) -> Option<Rect>;
    fn translate(&mut self, dx: f64, dy: f64);
}

#[enum_dispatch(AccessShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveShape {
    Rect(RectShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            coord! {x: self.x, y: self.y},
            coord! {x: self.x + self.width, y: self.y + self.height},
        )
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl AccessShape for RectShape {
    fn contains(&self, p: Point) -> bool {
        !self.is_empty()
            && p.x() >= self.x
            && p.y() >= self.y
            && p.x() < self.x + self.width
            && p.y() < self.y + self.height
    }

    fn bounding_rect(&self) -> Option<Rect> {
        (!self.is_empty()).then(|| self.rect())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Ellipse inscribed in the rectangle `(x, y, width, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl EllipseShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl AccessShape for EllipseShape {
    fn contains(&self, p: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }

        let nx = (p.x() - self.x) / self.width - 0.5;
        let ny = (p.y() - self.y) / self.height - 0.5;
        nx * nx + ny * ny < 0.25
    }

    fn bounding_rect(&self) -> Option<Rect> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        Some(Rect::new(
            coord! {x: self.x, y: self.y},
            coord! {x: self.x + self.width, y: self.y + self.height},
        ))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl PolygonShape {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }
}

impl AccessShape for PolygonShape {
    fn contains(&self, p: Point) -> bool {
        math::pnpoly(&self.xs, &self.ys, p)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        if self.xs.is_empty() || self.ys.is_empty() {
            return None;
        }

        let (min_x, max_x) = min_max(&self.xs);
        let (min_y, max_y) = min_max(&self.ys);
        Some(Rect::new(
            coord! {x: min_x, y: min_y},
            coord! {x: max_x, y: max_y},
        ))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.xs.iter_mut().for_each(|x| *x += dx);
        self.ys.iter_mut().for_each(|y| *y += dy);
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompositeShape {
    Primitive(PrimitiveShape),
    Union(Box<CompositeShape>, Box<CompositeShape>),
    Intersection(Box<CompositeShape>, Box<CompositeShape>),
    Difference(Box<CompositeShape>, Box<CompositeShape>),
    Xor(Box<CompositeShape>, Box<CompositeShape>),
}

impl CompositeShape {
    pub fn or(self, other: impl Into<CompositeShape>) -> Self {
        Self::Union(Box::new(self), Box::new(other.into()))
    }

    pub fn and(self, other: impl Into<CompositeShape>) -> Self {
        Self::Intersection(Box::new(self), Box::new(other.into()))
    }

    /// Subtracts `other` from this shape.
    pub fn not(self, other: impl Into<CompositeShape>) -> Self {
        Self::Difference(Box::new(self), Box::new(other.into()))
    }

    pub fn xor(self, other: impl Into<CompositeShape>) -> Self {
        Self::Xor(Box::new(self), Box::new(other.into()))
    }

    /// The lone rectangle this shape consists of, if that is all it is.
    pub fn as_rect(&self) -> Option<&RectShape> {
        match self {
            Self::Primitive(PrimitiveShape::Rect(rect)) => Some(rect),
            _ => None,
        }
    }

    /// Bounds snapped outward to the integer grid (floor of the minimum,
    /// ceiling of the maximum), so the maximum may exceed the real one by up
    /// to one unit. An empty shape reports the zero rectangle at the origin.
    pub fn quantized_bounds(&self) -> Rect {
        match self.bounding_rect() {
            Some(rect) => Rect::new(
                coord! {x: rect.min().x.floor(), y: rect.min().y.floor()},
                coord! {x: rect.max().x.ceil(), y: rect.max().y.ceil()},
            ),
            None => Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: 0.0, y: 0.0}),
        }
    }
}

impl AccessShape for CompositeShape {
    fn contains(&self, p: Point) -> bool {
        match self {
            Self::Primitive(shape) => shape.contains(p),
            Self::Union(a, b) => a.contains(p) || b.contains(p),
            Self::Intersection(a, b) => a.contains(p) && b.contains(p),
            Self::Difference(a, b) => a.contains(p) && !b.contains(p),
            Self::Xor(a, b) => a.contains(p) != b.contains(p),
        }
    }

    fn bounding_rect(&self) -> Option<Rect> {
        match self {
            Self::Primitive(shape) => shape.bounding_rect(),
            Self::Union(a, b) | Self::Xor(a, b) => merge(a.bounding_rect(), b.bounding_rect()),
            Self::Intersection(a, b) => overlap(a.bounding_rect(), b.bounding_rect()),
            Self::Difference(a, _) => a.bounding_rect(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Primitive(shape) => shape.translate(dx, dy),
            Self::Union(a, b)
            | Self::Intersection(a, b)
            | Self::Difference(a, b)
            | Self::Xor(a, b) => {
                a.translate(dx, dy);
                b.translate(dx, dy);
            }
        }
    }
}

fn merge(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    match (a, b) {
        (Some(a), Some(b)) => Some(Rect::new(
            coord! {x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y)},
            coord! {x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y)},
        )),
        (a, None) => a,
        (None, b) => b,
    }
}

fn overlap(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    let (a, b) = (a?, b?);
    let min = coord! {x: a.min().x.max(b.min().x), y: a.min().y.max(b.min().y)};
    let max = coord! {x: a.max().x.min(b.max().x), y: a.max().y.min(b.max().y)};

    if min.x > max.x || min.y > max.y {
        return None;
    }

    Some(Rect::new(min, max))
}

impl From<PrimitiveShape> for CompositeShape {
    fn from(primitive: PrimitiveShape) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<RectShape> for CompositeShape {
    fn from(rect: RectShape) -> Self {
        Self::Primitive(rect.into())
    }
}

impl From<EllipseShape> for CompositeShape {
    fn from(ellipse: EllipseShape) -> Self {
        Self::Primitive(ellipse.into())
    }
}

impl From<PolygonShape> for CompositeShape {
    fn from(polygon: PolygonShape) -> Self {
        Self::Primitive(polygon.into())
    }
}
