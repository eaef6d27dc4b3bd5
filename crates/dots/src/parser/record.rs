use super::error::ErrorKind;
use super::{Edge, Point};

/// Interpret one line's fields as `x1,y1 x2,y2 color`.
///
/// Only the shape of the line is checked here; grid bounds and signs are left to the
/// validator. The color token is taken literally.
pub fn parse_record(fields: &[&str]) -> Result<Edge, ErrorKind> {
    let [start, end, color] = match fields {
        [a, b, c] => [*a, *b, *c],
        f if f.len() < 3 => return Err(ErrorKind::MalformedLine),
        _ => return Err(ErrorKind::ExtraField),
    };

    let start = parse_point(start).ok_or(ErrorKind::NonNumericCoordinate)?;
    let end = parse_point(end).ok_or(ErrorKind::NonNumericCoordinate)?;

    Ok(Edge {
        start,
        end,
        color: color.to_string(),
    })
}

/// Parse `x,y` into a point. Exactly two integer components are required.
fn parse_point(field: &str) -> Option<Point> {
    let mut parts = field.split(',');
    let x = parts.next()?.parse::<i32>().ok()?;
    let y = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Point { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let edge = parse_record(&["0,0", "1,1", "red"]).unwrap();
        assert_eq!(edge.start, Point { x: 0, y: 0 });
        assert_eq!(edge.end, Point { x: 1, y: 1 });
        assert_eq!(edge.color, "red");
    }

    #[test]
    fn test_negative_coordinates_parse() {
        // Sign checks belong to the validator
        let edge = parse_record(&["-1,0", "2,-2", "red"]).unwrap();
        assert_eq!(edge.start.x, -1);
        assert_eq!(edge.end.y, -2);
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(parse_record(&[""]), Err(ErrorKind::MalformedLine));
        assert_eq!(parse_record(&["0,0"]), Err(ErrorKind::MalformedLine));
        assert_eq!(parse_record(&["0,0", "1,1"]), Err(ErrorKind::MalformedLine));
    }

    #[test]
    fn test_too_many_fields() {
        assert_eq!(
            parse_record(&["0,0", "1,1", "red", "blue"]),
            Err(ErrorKind::ExtraField)
        );
        assert_eq!(
            parse_record(&["0,0", "", "1,1", "red"]),
            Err(ErrorKind::ExtraField)
        );
    }

    #[test]
    fn test_non_numeric_components() {
        for bad in ["a,0", "0,b", ",0", "0,", "1.5,2", "1", "1,2,3", "", "0x1,2"] {
            assert_eq!(
                parse_record(&[bad, "1,1", "red"]),
                Err(ErrorKind::NonNumericCoordinate),
                "start point {bad:?} should be rejected"
            );
            assert_eq!(
                parse_record(&["1,1", bad, "red"]),
                Err(ErrorKind::NonNumericCoordinate),
                "end point {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overflow_is_non_numeric() {
        assert_eq!(
            parse_record(&["99999999999,0", "1,1", "red"]),
            Err(ErrorKind::NonNumericCoordinate)
        );
    }

    #[test]
    fn test_color_is_not_validated() {
        let edge = parse_record(&["0,0", "1,1", "not-a-color!"]).unwrap();
        assert_eq!(edge.color, "not-a-color!");
        let edge = parse_record(&["0,0", "1,1", ""]).unwrap();
        assert_eq!(edge.color, "");
    }
}
