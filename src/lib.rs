#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod curve;
mod modular;
pub mod point;

pub use curve::EllipticCurve;
pub use point::Point;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("invalid curve parameters, discriminant is zero mod p")]
    InvalidCurveParameters,
    #[error("no modular inverse exists for {0}")]
    NoInverseExists(i64),
}
