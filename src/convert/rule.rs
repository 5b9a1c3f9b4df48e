use std::fmt;

use crate::{
    convert::RegistryConfig,
    region::{
        compound::CompoundRegion, line::LineRegion, poly::VertexRegion, rect::BoxRegion,
        RealRegion, RegionError,
    },
    roi::{Roi, RoiFamily, RoiKind, SharedRoi},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    pub const HIGH: Priority = Priority(100);
    pub const DEFAULT: Priority = Priority(0);
    pub const LOW: Priority = Priority(-100);
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionInterface {
    /// Any real-valued region predicate.
    Mask,
    Polygon,
    Polyline,
    Line,
    Box,
}

impl RegionInterface {
    pub const ALL: [RegionInterface; 5] = [
        RegionInterface::Mask,
        RegionInterface::Polygon,
        RegionInterface::Polyline,
        RegionInterface::Line,
        RegionInterface::Box,
    ];

    /// Whether a region offering `self` can be used where `target` is asked
    /// for.
    pub fn satisfies(&self, target: RegionInterface) -> bool {
        target == RegionInterface::Mask || *self == target
    }
}

pub type RulePredicate = fn(&Roi, &RegistryConfig) -> bool;
pub type RuleFactory = fn(SharedRoi) -> Result<RealRegion, RegionError>;

#[derive(Clone, Copy)]
pub struct ConversionRule {
    pub name: &'static str,
    pub output: RegionInterface,
    pub priority: Priority,
    pub predicate: RulePredicate,
    pub factory: RuleFactory,
}

impl fmt::Debug for ConversionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRule")
            .field("name", &self.name)
            .field("output", &self.output)
            .field("priority", &self.priority)
            .finish()
    }
}

impl ConversionRule {
    pub fn new(
        name: &'static str,
        output: RegionInterface,
        predicate: RulePredicate,
        factory: RuleFactory,
    ) -> Self {
        Self {
            name,
            output,
            priority: Priority::DEFAULT,
            predicate,
            factory,
        }
    }

    pub fn with_priority(self, priority: Priority) -> Self {
        Self { priority, ..self }
    }

    pub fn matches(&self, roi: &Roi, config: &RegistryConfig) -> bool {
        (self.predicate)(roi, config)
    }

    pub fn produce(&self, roi: SharedRoi) -> Result<RealRegion, RegionError> {
        (self.factory)(roi)
    }
}

pub fn builtin_rules() -> [ConversionRule; 5] {
    [
        ConversionRule::new(
            "polygon",
            RegionInterface::Polygon,
            is_plain_polygon,
            make_polygon,
        ),
        ConversionRule::new(
            "polyline",
            RegionInterface::Polyline,
            is_plain_polyline,
            make_polyline,
        ),
        ConversionRule::new("line", RegionInterface::Line, is_thin_line, make_line),
        ConversionRule::new(
            "compound",
            RegionInterface::Mask,
            is_composite,
            make_compound,
        ),
        // Box-tagged ROIs may match one of the rules above, which must win.
        ConversionRule::new("box", RegionInterface::Box, is_sharp_box, make_box)
            .with_priority(Priority::LOW),
    ]
}

// Ellipses and rotated rectangles are ring ROIs too, but not plain polygons.
fn is_plain_polygon(roi: &Roi, _config: &RegistryConfig) -> bool {
    roi.family() == RoiFamily::Ring
        && !matches!(roi.kind(), RoiKind::Ellipse | RoiKind::RotatedRect)
        && !roi.is_spline_fit()
}

fn make_polygon(roi: SharedRoi) -> Result<RealRegion, RegionError> {
    let primary = roi.borrow().kind().is_primary();

    Ok(if primary {
        VertexRegion::polygon(roi)?
    } else {
        VertexRegion::unmodifiable_polygon(roi)?
    }
    .into())
}

fn is_plain_polyline(roi: &Roi, config: &RegistryConfig) -> bool {
    roi.family() == RoiFamily::OpenChain
        && roi.stroke_width() == config.polyline_width
        && !roi.is_spline_fit()
}

fn make_polyline(roi: SharedRoi) -> Result<RealRegion, RegionError> {
    let primary = roi.borrow().kind().is_primary();

    Ok(if primary {
        VertexRegion::polyline(roi)?
    } else {
        VertexRegion::unmodifiable_polyline(roi)?
    }
    .into())
}

fn is_thin_line(roi: &Roi, config: &RegistryConfig) -> bool {
    roi.kind() == RoiKind::Line && roi.stroke_width() <= config.max_line_width
}

fn make_line(roi: SharedRoi) -> Result<RealRegion, RegionError> {
    Ok(LineRegion::wrap(roi)?.into())
}

fn is_composite(roi: &Roi, _config: &RegistryConfig) -> bool {
    roi.kind() == RoiKind::Composite
}

fn make_compound(roi: SharedRoi) -> Result<RealRegion, RegionError> {
    Ok(CompoundRegion::wrap(roi)?.into())
}

fn is_sharp_box(roi: &Roi, _config: &RegistryConfig) -> bool {
    roi.family() == RoiFamily::AxisBox && roi.corner_radius() == 0.0
}

fn make_box(roi: SharedRoi) -> Result<RealRegion, RegionError> {
    Ok(BoxRegion::wrap(roi)?.into())
}
