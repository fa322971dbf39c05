use tinycurve::{CurveError, EllipticCurve, Point};

fn main() -> Result<(), CurveError> {
    // y^2 = x^3 + 2x + 3 over F_97
    let curve = EllipticCurve::new(2, 3, 97)?;
    let point = Point::new(3, 6);

    let k = 2;
    let result = curve.multiply(&point, k)?;
    println!("{} * {} = {}", k, point, result);

    Ok(())
}
