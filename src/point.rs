use crate::error::FormatError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A 2D integer coordinate. Used for grid cells, neighbour offsets and atlas cells alike.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, scale: i32) -> Point {
        Point::new(self.x * scale, self.y * scale)
    }
}

/// Renders the canonical `(x, y)` form.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses exactly the form written by `Display`. Anything else is rejected.
impl FromStr for Point {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split_once(", ")
            .ok_or_else(|| FormatError::MissingSeparator(s.to_owned()))?;
        let x = first
            .strip_prefix('(')
            .ok_or_else(|| FormatError::MissingOpenBracket(s.to_owned()))?;
        let y = second
            .strip_suffix(')')
            .ok_or_else(|| FormatError::MissingCloseBracket(s.to_owned()))?;

        Ok(Point::new(parse_canonical(x)?, parse_canonical(y)?))
    }
}

/// Parses an integer and requires that it is written the way `Display` would write it: no sign
/// prefix, no leading zeros, no whitespace.
pub(crate) fn parse_canonical<T>(text: &str) -> Result<T, FormatError>
where
    T: FromStr + ToString,
{
    match text.parse::<T>() {
        Ok(value) if value.to_string() == text => Ok(value),
        _ => Err(FormatError::InvalidInteger(text.to_owned())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_is_canonical() {
        assert_eq!(Point::new(2, 2).to_string(), "(2, 2)");
        assert_eq!(Point::new(-1, 14).to_string(), "(-1, 14)");
    }

    #[test]
    fn parses_canonical_form() {
        assert_eq!("(2, 2)".parse::<Point>(), Ok(Point::new(2, 2)));
        assert_eq!("(10, 14)".parse::<Point>(), Ok(Point::new(10, 14)));
        assert_eq!("(-1, -1)".parse::<Point>(), Ok(Point::new(-1, -1)));
    }

    #[test]
    fn rejects_missing_brackets() {
        assert_eq!(
            "2, 2)".parse::<Point>(),
            Err(FormatError::MissingOpenBracket("2, 2)".to_owned()))
        );
        assert_eq!(
            "(2, 2".parse::<Point>(),
            Err(FormatError::MissingCloseBracket("(2, 2".to_owned()))
        );
    }

    #[test]
    fn rejects_wrong_separator() {
        assert_eq!(
            "(2 2)".parse::<Point>(),
            Err(FormatError::MissingSeparator("(2 2)".to_owned()))
        );
        assert!("(2,2)".parse::<Point>().is_err());
    }

    #[test]
    fn rejects_non_canonical_integers() {
        for text in &["(a, 2)", "(2, 2.5)", "(+2, 2)", "(02, 2)", "( 2, 2)", "(2,  2)", "(2, 2, 2)"] {
            assert!(text.parse::<Point>().is_err(), "{} should not parse", text);
        }
    }

    #[test]
    fn arithmetic() {
        let p = Point::new(2, 2) + Point::new(3, 1) * 4;
        assert_eq!(p, Point::new(14, 6));
        assert_eq!(p - Point::new(14, 6), Point::default());
    }
}
