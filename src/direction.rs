use crate::Error;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display, Formatter};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four directional keys.
///
/// The "no direction" sentinel is represented by `Option<Direction>::None`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub enum Direction {
    /// The up arrow.
    Up,
    /// The down arrow.
    Down,
    /// The left arrow.
    Left,
    /// The right arrow.
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the geometrically opposite direction.
    ///
    /// # Examples
    /// ```
    /// # use keypress::Direction;
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Up.opposite().opposite(), Direction::Up);
    /// ```
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the upper case name of the direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parses `up`, `UP` and `arrow_up` style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("arrow_"))
            .map_or(name, |_| &name[6..]);
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownDirection(s.to_string()))
    }
}

/// A closed set of keys that can be bound in a [`Registry`](crate::Registry).
///
/// `ALL` lists every key exactly once and `index` returns the position
/// of the key in `ALL`.
pub trait Key: Copy + Eq + Debug + 'static {
    /// Every key in the set.
    const ALL: &'static [Self];

    /// Returns the position of the key in [`ALL`](Key::ALL).
    fn index(self) -> usize;

    /// Returns the name used in listings and errors.
    fn name(self) -> &'static str;
}

impl Key for Direction {
    const ALL: &'static [Direction] = &Direction::ALL;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        self.as_str()
    }
}

/// `None` is the no-direction sentinel and gets a slot of its own.
impl Key for Option<Direction> {
    const ALL: &'static [Option<Direction>] = &[
        None,
        Some(Direction::Up),
        Some(Direction::Down),
        Some(Direction::Left),
        Some(Direction::Right),
    ];

    fn index(self) -> usize {
        self.map_or(0, |direction| direction as usize + 1)
    }

    fn name(self) -> &'static str {
        self.map_or("NONE", Direction::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("ARROW_LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" Right ".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(Error::UnknownDirection(_))
        ));
    }

    #[test]
    fn indices_match_all() {
        for (i, &key) in <Direction as Key>::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
        for (i, &key) in <Option<Direction> as Key>::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Key::name(Direction::Down), "DOWN");
        assert_eq!(Key::name(None::<Direction>), "NONE");
        assert_eq!(Key::name(Some(Direction::Right)), "RIGHT");
    }
}
