// Copyright 2023 drey7925
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0


use std::fmt::Debug;

use crate::track_element::TrackError;

/// Number of camera-relative facings a track piece can have.
pub const NUM_ORTHOGONAL_DIRECTIONS: usize = 4;

/// A camera-relative facing of a track piece, in clockwise quarter turns.
///
/// Always 0, 1, 2, or 3. Arithmetic on directions wraps modulo 4, which is
/// what lets a "down" piece be painted as the matching "up" piece turned
/// around, and a right-hand turn as the mirrored left-hand one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Direction(u8);

impl Direction {
    pub const NE: Direction = Direction(0);
    pub const SE: Direction = Direction(1);
    pub const SW: Direction = Direction(2);
    pub const NW: Direction = Direction(3);

    pub const ALL: [Direction; NUM_ORTHOGONAL_DIRECTIONS] =
        [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// Builds a direction, discarding everything but the low two bits.
    #[inline]
    pub const fn new(value: u8) -> Direction {
        Direction(value & 3)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Rotates by the given number of clockwise quarter turns (negative turns counterclockwise).
    #[inline]
    pub const fn rotate(&self, quarter_turns: i8) -> Direction {
        Direction((self.0 as i8).wrapping_add(quarter_turns) as u8 & 3)
    }

    /// The opposite facing, i.e. `(direction + 2) & 3`
    #[inline]
    pub const fn reverse(&self) -> Direction {
        self.rotate(2)
    }

    /// `(direction + 1) & 3`
    #[inline]
    pub const fn next(&self) -> Direction {
        self.rotate(1)
    }

    /// `(direction - 1) & 3`
    #[inline]
    pub const fn prev(&self) -> Direction {
        self.rotate(-1)
    }

    /// True for the two facings whose tunnels are pushed on the left edge of the tile.
    #[inline]
    pub const fn is_even(&self) -> bool {
        self.0 & 1 == 0
    }
}

impl Debug for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            0 => "NE",
            1 => "SE",
            2 => "SW",
            3 => "NW",
            _ => unreachable!(),
        };
        f.write_fmt(format_args!("dir:{}({})", self.0, name))
    }
}

impl TryFrom<u8> for Direction {
    type Error = TrackError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value as usize >= NUM_ORTHOGONAL_DIRECTIONS {
            return Err(TrackError::DirectionOutOfRange(value));
        }
        Ok(Direction(value))
    }
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(Direction::NW.next(), Direction::NE);
        assert_eq!(Direction::NE.prev(), Direction::NW);
        assert_eq!(Direction::SE.reverse(), Direction::NW);
        assert_eq!(Direction::SW.rotate(-6), Direction::NE);
        assert_eq!(Direction::new(7), Direction::NW);
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_eq!(d.next().prev(), d);
            assert_eq!(d.rotate(4), d);
        }
    }

    #[test]
    fn conversion_rejects_out_of_range() {
        assert_eq!(Direction::try_from(2).unwrap(), Direction::SW);
        assert!(matches!(
            Direction::try_from(4),
            Err(TrackError::DirectionOutOfRange(4))
        ));
    }
}
