use crate::{error::Error, offset::NUM_NEIGHBOURS, permutation::PatternIndex, point::Point};

use std::convert::TryFrom;

/// Columns per row in the template.
pub const DEFAULT_COLUMNS: usize = 16;
/// Cell stride between two placements. Leaves a blank cell between neighbouring 3x3 markers.
pub const DEFAULT_SPACING: i32 = 4;
pub const DEFAULT_ORIGIN: Point = Point::new(2, 2);

/// `origin + spacing * (index mod columns, index div columns)`.
///
/// # Panics
///
/// `columns` must be nonzero and the placement must fit in `i32`. `GridLayout::new` checks both
/// for every pattern of the 8-neighbour ring, so prefer `GridLayout::placement_for`.
pub fn placement_for(index: PatternIndex, origin: Point, spacing: i32, columns: usize) -> Point {
    let column = (index.0 % columns) as i32;
    let row = (index.0 / columns) as i32;

    origin + Point::new(column, row) * spacing
}

/// Where each pattern's marker sits in the template and analysis grids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridLayout {
    pub origin: Point,
    pub spacing: i32,
    pub columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            origin: DEFAULT_ORIGIN,
            spacing: DEFAULT_SPACING,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl GridLayout {
    pub fn new(origin: Point, spacing: i32, columns: usize) -> Result<Self, Error> {
        if spacing <= 0 || columns == 0 {
            return Err(Error::InvalidLayout { spacing, columns });
        }
        if !placements_fit(origin, spacing, columns, 1 << NUM_NEIGHBOURS) {
            return Err(Error::LayoutOverflow { origin });
        }

        Ok(GridLayout {
            origin,
            spacing,
            columns,
        })
    }

    pub fn placement_for(&self, index: PatternIndex) -> Point {
        placement_for(index, self.origin, self.spacing, self.columns)
    }

    pub fn placements(&self, num_patterns: usize) -> impl Iterator<Item = (PatternIndex, Point)> + '_ {
        (0..num_patterns).map(move |i| (PatternIndex(i), self.placement_for(PatternIndex(i))))
    }

    /// The inverse of `placement_for`. Returns `None` for cells that no pattern is placed on.
    pub fn pattern_at(&self, position: Point) -> Option<PatternIndex> {
        let local = Point::new(
            position.x.checked_sub(self.origin.x)?,
            position.y.checked_sub(self.origin.y)?,
        );
        if local.x < 0 || local.y < 0 || local.x % self.spacing != 0 || local.y % self.spacing != 0 {
            return None;
        }
        let (column, row) = ((local.x / self.spacing) as usize, (local.y / self.spacing) as usize);
        if column >= self.columns {
            return None;
        }

        row.checked_mul(self.columns)
            .and_then(|first| first.checked_add(column))
            .map(PatternIndex)
    }
}

/// Whether every placement, and the neighbour ring around it, is representable.
fn placements_fit(origin: Point, spacing: i32, columns: usize, num_patterns: usize) -> bool {
    let last = num_patterns.saturating_sub(1);
    let far_edge = |start: i32, cells: usize| {
        i32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(spacing))
            .and_then(|offset| offset.checked_add(start))
            .and_then(|p| p.checked_add(1))
    };

    origin.x.checked_sub(1).is_some()
        && origin.y.checked_sub(1).is_some()
        && far_edge(origin.x, last.min(columns - 1)).is_some()
        && far_edge(origin.y, last / columns).is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn placement_matches_formula() {
        let origin = Point::new(2, 2);
        for i in 0..256 {
            let p = placement_for(PatternIndex(i), origin, 4, 16);
            assert_eq!(p.x, 2 + 4 * (i as i32 % 16));
            assert_eq!(p.y, 2 + 4 * (i as i32 / 16));
        }
    }

    #[test]
    fn default_layout_wraps_every_sixteen() {
        let layout = GridLayout::default();
        assert_eq!(layout.placement_for(PatternIndex(0)), Point::new(2, 2));
        assert_eq!(layout.placement_for(PatternIndex(15)), Point::new(62, 2));
        assert_eq!(layout.placement_for(PatternIndex(16)), Point::new(2, 6));
        assert_eq!(layout.placement_for(PatternIndex(255)), Point::new(62, 62));
    }

    #[test]
    fn pattern_at_inverts_placement() {
        let layout = GridLayout::default();
        for (index, placement) in layout.placements(256) {
            assert_eq!(layout.pattern_at(placement), Some(index));
        }
        assert_eq!(layout.pattern_at(Point::new(3, 2)), None);
        assert_eq!(layout.pattern_at(Point::new(1, 2)), None);
        assert_eq!(layout.pattern_at(Point::new(66, 2)), None);
    }

    #[test]
    fn rejects_degenerate_layouts() {
        assert!(GridLayout::new(DEFAULT_ORIGIN, 0, 16).is_err());
        assert!(GridLayout::new(DEFAULT_ORIGIN, -4, 16).is_err());
        assert!(GridLayout::new(DEFAULT_ORIGIN, 4, 0).is_err());
        assert_eq!(
            GridLayout::new(DEFAULT_ORIGIN, DEFAULT_SPACING, DEFAULT_COLUMNS).unwrap(),
            GridLayout::default()
        );
    }

    #[test]
    fn rejects_overflowing_origin() {
        for origin in &[
            Point::new(2_147_483_600, 2),
            Point::new(2, 2_147_483_600),
            Point::new(i32::MIN, 2),
            Point::new(2, i32::MIN),
        ] {
            match GridLayout::new(*origin, 4, 16) {
                Err(Error::LayoutOverflow { origin: o }) => assert_eq!(o, *origin),
                other => panic!("{} gave {:?}", origin, other),
            }
        }

        // The last placement of the widest row still needs one cell of ring on the right.
        let edge = i32::MAX - 4 * 15 - 1;
        let layout = GridLayout::new(Point::new(edge, 2), 4, 16).unwrap();
        assert_eq!(layout.placement_for(PatternIndex(255)).x, i32::MAX - 1);
        assert!(GridLayout::new(Point::new(edge + 1, 2), 4, 16).is_err());
    }

    #[test]
    fn huge_spacing_or_columns_are_checked() {
        assert!(GridLayout::new(DEFAULT_ORIGIN, i32::MAX, 16).is_err());
        // One row holding all patterns.
        let layout = GridLayout::new(DEFAULT_ORIGIN, 4, usize::MAX).unwrap();
        assert_eq!(layout.placement_for(PatternIndex(255)), Point::new(2 + 4 * 255, 2));
    }

    #[test]
    fn pattern_at_far_cells_is_none() {
        let layout = GridLayout::new(Point::new(10, 10), 4, 16).unwrap();
        assert_eq!(layout.pattern_at(Point::new(i32::MIN, i32::MIN)), None);
        assert_eq!(layout.pattern_at(Point::new(i32::MAX, 10)), None);
    }

    #[test]
    #[should_panic]
    fn placement_for_requires_columns() {
        placement_for(PatternIndex(3), DEFAULT_ORIGIN, 4, 0);
    }

    #[test]
    fn custom_columns() {
        let layout = GridLayout::new(Point::new(0, 0), 3, 4).unwrap();
        assert_eq!(layout.placement_for(PatternIndex(5)), Point::new(3, 3));
        assert_eq!(layout.pattern_at(Point::new(3, 3)), Some(PatternIndex(5)));
    }
}
