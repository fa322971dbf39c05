use crate::modular::{mul_mod, reduce};
use crate::point::Point;
use crate::CurveError;

use serde::{Deserialize, Serialize};

/// A short Weierstrass curve y^2 = x^3 + ax + b over the prime field F_p.
///
/// `p` is assumed prime and is not verified; a composite modulus leads to
/// undefined group-law behavior (typically a `NoInverseExists` error once a
/// non-invertible denominator shows up). All intermediate products are
/// widened to `i128`, so any `i64` modulus is supported without overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllipticCurve {
    a: i64,
    b: i64,
    p: i64,
}

impl EllipticCurve {
    /// Creates a curve instance, rejecting singular parameter choices
    /// where 4a^3 + 27b^2 = 0 mod p.
    pub fn new(a: i64, b: i64, p: i64) -> Result<Self, CurveError> {
        if p < 2 {
            return Err(CurveError::InvalidCurveParameters);
        }
        let a_red = reduce(a as i128, p);
        let b_red = reduce(b as i128, p);
        let a_cubed = mul_mod(mul_mod(a_red, a_red, p), a_red, p);
        let b_squared = mul_mod(b_red, b_red, p);
        // the whole sum is reduced, not just the last addend
        let discriminant = reduce(4 * a_cubed as i128 + 27 * b_squared as i128, p);
        if discriminant == 0 {
            return Err(CurveError::InvalidCurveParameters);
        }
        Ok(Self { a, b, p })
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    pub fn p(&self) -> i64 {
        self.p
    }

    /// Modular multiplicative inverse of `n` mod p via the extended
    /// Euclidean algorithm.
    ///
    /// Fails with `NoInverseExists` when gcd(p, n) > 1, which for a prime
    /// modulus only happens when n = 0 mod p. The result lies in [0, p - 1].
    pub fn mod_inv(&self, n: i64) -> Result<i64, CurveError> {
        // Bezout coefficient and remainder tracks; i128 keeps the
        // coefficient updates exact for moduli near i64::MAX
        let (mut t, mut newt): (i128, i128) = (0, 1);
        let (mut r, mut newr): (i128, i128) = (self.p as i128, reduce(n as i128, self.p) as i128);
        while newr != 0 {
            let quotient = r / newr;
            (t, newt) = (newt, t - quotient * newt);
            (r, newr) = (newr, r - quotient * newr);
        }
        if r > 1 {
            return Err(CurveError::NoInverseExists(n));
        }
        if t < 0 {
            t += self.p as i128;
        }
        Ok(t as i64)
    }

    /// The chord-and-tangent group law.
    ///
    /// Handles the identity, the inverse-point case (equal x, different y),
    /// doubling and general addition. Inputs are expected to lie on the
    /// curve with coordinates in [0, p - 1]; this is not checked.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        if lhs.is_infinity() {
            return Ok(*rhs);
        }
        if rhs.is_infinity() {
            return Ok(*lhs);
        }
        // vertical line: Q = -P, must be checked before the slope branches
        if lhs.x() == rhs.x() && lhs.y() != rhs.y() {
            return Ok(Point::infinity());
        }

        let m = if lhs == rhs {
            // 2-torsion: the tangent at y = 0 is vertical, so 2P = inf
            if lhs.y() == 0 {
                return Ok(Point::infinity());
            }
            let x_squared = mul_mod(lhs.x(), lhs.x(), self.p);
            let numerator = reduce(3 * x_squared as i128 + self.a as i128, self.p);
            let denominator = self.mod_inv(reduce(2 * lhs.y() as i128, self.p))?;
            mul_mod(numerator, denominator, self.p)
        } else {
            let numerator = reduce(rhs.y() as i128 - lhs.y() as i128, self.p);
            let denominator = self.mod_inv(reduce(rhs.x() as i128 - lhs.x() as i128, self.p))?;
            mul_mod(numerator, denominator, self.p)
        };

        let x3 = reduce(
            mul_mod(m, m, self.p) as i128 - lhs.x() as i128 - rhs.x() as i128,
            self.p,
        );
        let y3 = reduce(
            mul_mod(m, reduce(lhs.x() as i128 - x3 as i128, self.p), self.p) as i128
                - lhs.y() as i128,
            self.p,
        );
        Ok(Point::new(x3, y3))
    }

    /// Binary double-and-add scalar multiplication: O(log n) group
    /// operations.
    ///
    /// Negative scalars multiply the negated point by the magnitude, so
    /// `multiply(P, -n) == multiply(neg(P), n)`. A zero scalar yields the
    /// identity.
    pub fn multiply(&self, point: &Point, scalar: i64) -> Result<Point, CurveError> {
        let base = if scalar < 0 { self.neg(point) } else { *point };
        // unsigned magnitude, so i64::MIN needs no special casing
        let mut n = scalar.unsigned_abs();
        let mut result = Point::infinity();
        let mut doubling = base;
        while n > 0 {
            if n & 1 == 1 {
                result = self.add(&result, &doubling)?;
            }
            doubling = self.add(&doubling, &doubling)?;
            n >>= 1;
        }
        Ok(result)
    }

    /// The group inverse -P = (x, p - y); infinity negates to itself.
    pub fn neg(&self, point: &Point) -> Point {
        if point.is_infinity() {
            *point
        } else {
            Point::new(point.x(), reduce(-(point.y() as i128), self.p))
        }
    }

    /// Checks y^2 = x^3 + ax + b mod p. Infinity is on every curve.
    ///
    /// Opt-in only: `add` and `multiply` never call this on their inputs.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        if point.is_infinity() {
            return true;
        }
        let x = reduce(point.x() as i128, self.p);
        let y = reduce(point.y() as i128, self.p);
        let y_squared = mul_mod(y, y, self.p);
        let x_cubed = mul_mod(mul_mod(x, x, self.p), x, self.p);
        let ax = mul_mod(reduce(self.a as i128, self.p), x, self.p);
        y_squared == reduce(x_cubed as i128 + ax as i128 + self.b as i128, self.p)
    }
}
