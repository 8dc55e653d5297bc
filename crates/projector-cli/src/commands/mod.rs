pub mod config;
pub mod info;
pub mod lens;
pub mod padding;
pub mod replay;

use projector_core::geometry::{Point, Size};

/// Parse a `WIDTHxHEIGHT` argument such as `800x600`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    Ok(Size::new(parse_number(w)?, parse_number(h)?))
}

/// Parse an `X,Y` argument such as `120,45.5`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

fn parse_number(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s.trim()))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not finite", s.trim()));
    }
    Ok(value)
}
