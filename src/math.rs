use geo::{coord, Coord, Line, Point};
use itertools::Itertools;

/// Even-odd ("pnpoly") containment over a closed ring given as parallel
/// coordinate arrays. Points exactly on an edge land on either side depending
/// on the edge's orientation.
pub fn pnpoly<T: Copy + Into<f64>>(xs: &[T], ys: &[T], p: Point) -> bool {
    let n = xs.len().min(ys.len());

    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi): (f64, f64) = (xs[i].into(), ys[i].into());
        let (xj, yj): (f64, f64) = (xs[j].into(), ys[j].into());

        if (yi > p.y()) != (yj > p.y()) && p.x() < (xj - xi) * (p.y() - yi) / (yj - yi) + xi {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// Zero-tolerance hit-test against a finite segment, both endpoints included.
pub fn segment_contains(segment: Line, p: Point) -> bool {
    let delta = segment.delta();
    let offset = p.0 - segment.start;

    if delta.x == 0.0 && delta.y == 0.0 {
        return offset.x == 0.0 && offset.y == 0.0;
    }

    if delta.x * offset.y - delta.y * offset.x != 0.0 {
        return false;
    }

    let dot = delta.x * offset.x + delta.y * offset.y;
    dot >= 0.0 && dot <= delta.x * delta.x + delta.y * delta.y
}

/// Whether `p` lies exactly on one of the segments joining consecutive
/// vertices. The chain is open: no segment joins the last vertex to the first.
pub fn chain_contains<T: Copy + Into<f64>>(xs: &[T], ys: &[T], p: Point) -> bool {
    xs.iter()
        .zip(ys.iter())
        .map(|(&x, &y)| -> Coord { coord! {x: x.into(), y: y.into()} })
        .tuple_windows()
        .any(|(start, end)| segment_contains(Line::new(start, end), p))
}
