//! A concrete [`ObstructionOracle`] over simple world-space shapes.

use gridpath_core::Vec2;

use crate::config::GridConfig;
use crate::traits::ObstructionOracle;

/// A solid obstacle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned box; `min` and `max` are opposite corners.
    Rect { min: Vec2, max: Vec2 },
}

impl Shape {
    /// Whether a disk strictly overlaps this shape. Touching at a single
    /// boundary point does not count.
    pub fn overlaps_disk(&self, center: Vec2, radius: f32) -> bool {
        match *self {
            Shape::Circle {
                center: c,
                radius: r,
            } => {
                let reach = r + radius;
                (center - c).length_squared() < reach * reach
            }
            Shape::Rect { min, max } => {
                let lo = Vec2::new(min.x.min(max.x), min.y.min(max.y));
                let hi = Vec2::new(min.x.max(max.x), min.y.max(max.y));
                let closest = center.clamp(lo, hi);
                (center - closest).length_squared() < radius * radius
            }
        }
    }
}

/// A set of [`Shape`]s; a disk is blocked if it overlaps any of them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Obstacles {
    shapes: Vec<Shape>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// One square obstacle per `#` in a text map laid over `config`'s grid.
    ///
    /// The first line is the top row. Each character covers one cell of
    /// `config.node_diameter()`; any character other than `#` is open.
    pub fn from_ascii(map: &str, config: &GridConfig) -> Self {
        let d = config.node_diameter();
        let origin = config.bottom_left();
        let lines: Vec<&str> = map.lines().filter(|l| !l.trim().is_empty()).collect();
        let rows = lines.len();
        let mut shapes = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            let y = (rows - 1 - r) as f32;
            for (x, ch) in line.trim().chars().enumerate() {
                if ch != '#' {
                    continue;
                }
                let min = origin + Vec2::new(x as f32 * d, y * d);
                shapes.push(Shape::Rect {
                    min,
                    max: min + Vec2::splat(d),
                });
            }
        }
        Self { shapes }
    }
}

impl FromIterator<Shape> for Obstacles {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl ObstructionOracle for Obstacles {
    fn is_blocked(&self, center: Vec2, radius: f32) -> bool {
        self.shapes.iter().any(|s| s.overlaps_disk(center, radius))
    }
}
