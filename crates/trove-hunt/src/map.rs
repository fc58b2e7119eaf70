use trove_core::{Grid, Point};

use crate::error::HuntError;

/// A hunt problem instance: a grid, a start, a goal, and the treasures
/// to collect along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntMap {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
    pub treasures: Vec<Point>,
}

impl HuntMap {
    /// Boundary validation, run before the solver touches the map:
    /// start, goal, and every treasure must be in bounds and walkable,
    /// and there must be at least one treasure.
    pub fn validate(&self) -> Result<(), HuntError> {
        self.grid.ensure_walkable(self.start)?;
        self.grid.ensure_walkable(self.goal)?;
        if self.treasures.is_empty() {
            return Err(HuntError::NoTreasures);
        }
        for &t in &self.treasures {
            self.grid.ensure_walkable(t)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::{InputError, Terrain};

    fn basic_map() -> HuntMap {
        HuntMap {
            grid: Grid::new(5, 5),
            start: Point::ZERO,
            goal: Point::new(4, 4),
            treasures: vec![Point::new(2, 2)],
        }
    }

    #[test]
    fn valid_map_passes() {
        assert_eq!(basic_map().validate(), Ok(()));
    }

    #[test]
    fn empty_treasures_rejected() {
        let mut m = basic_map();
        m.treasures.clear();
        assert_eq!(m.validate(), Err(HuntError::NoTreasures));
    }

    #[test]
    fn blocked_treasure_rejected() {
        let mut m = basic_map();
        m.grid.set(Point::new(2, 2), Terrain::Wall);
        assert_eq!(
            m.validate(),
            Err(HuntError::Input(InputError::Blocked(Point::new(2, 2))))
        );
    }

    #[test]
    fn out_of_bounds_goal_rejected() {
        let mut m = basic_map();
        m.goal = Point::new(40, 4);
        assert_eq!(
            m.validate(),
            Err(HuntError::Input(InputError::OutOfBounds(Point::new(40, 4))))
        );
    }
}
