//! World-space viewport and its mapping onto a pixel canvas.
//!
//! World y grows upward; canvas y grows downward. One canvas pixel is one
//! braille dot in the terminal renderer, but nothing here depends on that.

use std::fmt;

pub const WORLD_MIN: f32 = -10.0;
pub const WORLD_MAX: f32 = 10.0;
/// Default margin in canvas pixels (braille dots: two columns, one row).
pub const WORLD_MARGIN: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    EmptyXRange { xmin: f32, xmax: f32 },
    EmptyYRange { ymin: f32, ymax: f32 },
    NegativeMargin(f32),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::EmptyXRange { xmin, xmax } => {
                write!(f, "world x range is empty: xmin {} >= xmax {}", xmin, xmax)
            }
            WorldError::EmptyYRange { ymin, ymax } => {
                write!(f, "world y range is empty: ymin {} >= ymax {}", ymin, ymax)
            }
            WorldError::NegativeMargin(m) => write!(f, "margin must be >= 0, got {}", m),
        }
    }
}

impl std::error::Error for WorldError {}

/// Fixed logical viewport shared read-only by everything drawn on a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    xmin: f32,
    xmax: f32,
    ymin: f32,
    ymax: f32,
    margin: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            xmin: WORLD_MIN,
            xmax: WORLD_MAX,
            ymin: WORLD_MIN,
            ymax: WORLD_MAX,
            margin: WORLD_MARGIN,
        }
    }
}

impl World {
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32, margin: f32) -> Result<Self, WorldError> {
        // Written as negations so NaN bounds are rejected too.
        if !(xmax > xmin) {
            return Err(WorldError::EmptyXRange { xmin, xmax });
        }
        if !(ymax > ymin) {
            return Err(WorldError::EmptyYRange { ymin, ymax });
        }
        if !(margin >= 0.0) {
            return Err(WorldError::NegativeMargin(margin));
        }
        Ok(Self { xmin, xmax, ymin, ymax, margin })
    }

    /// Map a world point onto a `width` x `height` canvas.
    ///
    /// No clamping: points outside the world land outside the inset
    /// rectangle, and callers keep their geometry in bounds.
    pub fn to_canvas(&self, p: Point, width: f32, height: f32) -> (f32, f32) {
        let inner_w = width - 2.0 * self.margin;
        let inner_h = height - 2.0 * self.margin;
        let x = self.margin + (p.x - self.xmin) / (self.xmax - self.xmin) * inner_w;
        let y = self.margin + (self.ymax - p.y) / (self.ymax - self.ymin) * inner_h;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn test_default_corners() {
        let world = World::default();
        let (w, h) = (200.0, 120.0);
        let m = WORLD_MARGIN;
        assert!(close(world.to_canvas(Point::new(-10.0, 10.0), w, h), (m, m)));
        assert!(close(world.to_canvas(Point::new(10.0, 10.0), w, h), (w - m, m)));
        assert!(close(world.to_canvas(Point::new(-10.0, -10.0), w, h), (m, h - m)));
        assert!(close(world.to_canvas(Point::new(10.0, -10.0), w, h), (w - m, h - m)));
    }

    #[test]
    fn test_default_matches_validated_constants() {
        assert_eq!(
            World::new(WORLD_MIN, WORLD_MAX, WORLD_MIN, WORLD_MAX, WORLD_MARGIN),
            Ok(World::default())
        );
    }

    #[test]
    fn test_origin_maps_to_center() {
        let world = World::default();
        assert!(close(world.to_canvas(Point::ORIGIN, 100.0, 80.0), (50.0, 40.0)));
    }

    #[test]
    fn test_up_is_up() {
        let world = World::default();
        let (_, low) = world.to_canvas(Point::new(0.0, -5.0), 100.0, 100.0);
        let (_, high) = world.to_canvas(Point::new(0.0, 5.0), 100.0, 100.0);
        assert!(high < low);
    }

    #[test]
    fn test_no_clamping() {
        let world = World::default();
        let (x, y) = world.to_canvas(Point::new(30.0, -30.0), 100.0, 100.0);
        assert!(x > 100.0);
        assert!(y > 100.0);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert_eq!(
            World::new(1.0, 1.0, 0.0, 1.0, 0.0),
            Err(WorldError::EmptyXRange { xmin: 1.0, xmax: 1.0 })
        );
        assert!(matches!(World::new(0.0, 1.0, 2.0, -2.0, 0.0), Err(WorldError::EmptyYRange { .. })));
        assert_eq!(World::new(0.0, 1.0, 0.0, 1.0, -1.0), Err(WorldError::NegativeMargin(-1.0)));
        assert!(World::new(f32::NAN, 1.0, 0.0, 1.0, 0.0).is_err());
    }

    fn world_strategy() -> impl Strategy<Value = World> {
        (-50.0f32..50.0, 0.5f32..50.0, -50.0f32..50.0, 0.5f32..50.0, 0.0f32..20.0)
            .prop_map(|(x0, dx, y0, dy, m)| World::new(x0, x0 + dx, y0, y0 + dy, m).unwrap())
    }

    proptest! {
        #[test]
        fn corners_map_to_inset_rectangle(world in world_strategy(), w in 50.0f32..800.0, h in 50.0f32..800.0) {
            let m = world.margin;
            let tol = 1e-2;
            let tl = world.to_canvas(Point::new(world.xmin, world.ymax), w, h);
            let br = world.to_canvas(Point::new(world.xmax, world.ymin), w, h);
            prop_assert!((tl.0 - m).abs() < tol && (tl.1 - m).abs() < tol);
            prop_assert!((br.0 - (w - m)).abs() < tol && (br.1 - (h - m)).abs() < tol);
        }

        #[test]
        fn mapping_is_affine_per_axis(
            world in world_strategy(),
            a in 0.0f32..1.0,
            b in 0.0f32..1.0,
            c in 0.0f32..1.0,
        ) {
            let (w, h) = (400.0, 300.0);
            let lerp = |lo: f32, hi: f32, t: f32| lo + (hi - lo) * t;
            let x1 = lerp(world.xmin, world.xmax, a);
            let x2 = lerp(world.xmin, world.xmax, b);
            let y = lerp(world.ymin, world.ymax, c);
            let mid = Point::new((x1 + x2) / 2.0, y);
            let p1 = world.to_canvas(Point::new(x1, y), w, h);
            let p2 = world.to_canvas(Point::new(x2, y), w, h);
            let pm = world.to_canvas(mid, w, h);
            // Midpoints are preserved and x never leaks into pixel y.
            prop_assert!((pm.0 - (p1.0 + p2.0) / 2.0).abs() < 1e-2);
            prop_assert!((p1.1 - p2.1).abs() < 1e-3);
            prop_assert!((pm.1 - p1.1).abs() < 1e-3);
        }
    }
}
