use serde::{Deserialize, Serialize};

use std::fmt;

/// An affine curve point or the point at infinity.
///
/// A plain coordinate carrier: construction does not check curve
/// membership, that is up to the caller (or `EllipticCurve::is_on_curve`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Point {
    x: i64,
    y: i64,
    infinity: bool,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            // stored coordinates of an infinity point carry no meaning
            self.infinity && other.infinity
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}

impl Eq for Point {}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.infinity {
            write!(f, "inf")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// The group identity element.
    pub fn infinity() -> Self {
        Self {
            x: 0,
            y: 0,
            infinity: true,
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn is_infinity(&self) -> bool {
        self.infinity
    }
}
