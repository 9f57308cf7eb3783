//! Geometric primitives for radial layout and positioning.
//!
//! This module provides the geometric types used by the sunburst pipeline
//! to place nodes on a canvas and size the shapes drawn for them.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`AngularSpan`] - A half-open interval of angles `[start, end)` in radians
//!
//! # Coordinate System
//!
//! Canvas coordinates follow the screen convention used by draw.io and SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in radians from the +X axis. Because Y grows
//! downward, increasing angles sweep clockwise on screen.

use std::f64::consts::TAU;

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use sunburst_core::geometry::Point;
/// let center = Point::new(100.0, 100.0);
/// let east = Point::from_polar(center, 50.0, 0.0);
///
/// assert_eq!(east.x(), 150.0);
/// assert_eq!(east.y(), 100.0);
/// assert_eq!(center.distance_to(east), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts polar coordinates around `center` into a canvas point.
    ///
    /// # Arguments
    ///
    /// * `center` - The pole of the polar system
    /// * `radius` - Distance from `center`
    /// * `angle` - Angle in radians measured from the +X axis
    pub fn from_polar(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Point) -> f64 {
        let delta = self.sub_point(other);
        delta.x.hypot(delta.y)
    }

    /// Returns `true` if neither coordinate is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size with equal width and height
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Grows the bounds by `padding` on every side
    pub fn add_padding(self, padding: f64) -> Self {
        Self {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sunburst_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_center(Point::new(10.0, 10.0), Size::square(20.0));
    /// let b = Bounds::new_from_center(Point::new(50.0, 30.0), Size::square(20.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.max_x(), 60.0);
    /// assert_eq!(combined.height(), 40.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A half-open interval of angles `[start, end)` in radians.
///
/// Each node in a sunburst owns one span, handed down by its parent. A parent
/// partitions its span among its children with [`AngularSpan::take`].
///
/// # Examples
///
/// ```
/// # use std::f64::consts::{PI, TAU};
/// # use sunburst_core::geometry::AngularSpan;
/// let circle = AngularSpan::full_circle();
/// assert_eq!(circle.width(), TAU);
/// assert_eq!(circle.mid(), PI);
///
/// let quarter = AngularSpan::new(0.0, PI / 2.0);
/// assert_eq!(quarter.mid(), PI / 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSpan {
    start: f64,
    end: f64,
}

impl AngularSpan {
    /// Creates a span between two angles in radians
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The span `[0, 2π)`
    pub fn full_circle() -> Self {
        Self::new(0.0, TAU)
    }

    /// Start angle (inclusive)
    pub fn start(self) -> f64 {
        self.start
    }

    /// End angle (exclusive)
    pub fn end(self) -> f64 {
        self.end
    }

    /// Angular width `end - start`
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    /// Midpoint angle `start + width / 2`
    pub fn mid(self) -> f64 {
        self.start + self.width() / 2.0
    }

    /// Returns the sub-span beginning at `from` whose width is `fraction`
    /// of this span's width.
    ///
    /// Successive calls chained through each result's [`end`](Self::end)
    /// tile this span without gaps.
    pub fn take(self, from: f64, fraction: f64) -> Self {
        Self::new(from, from + self.width() * fraction)
    }
}

impl Default for AngularSpan {
    fn default() -> Self {
        Self::full_circle()
    }
}
