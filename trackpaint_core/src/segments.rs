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

use bitvec::prelude as bv;
use bitvec::view::BitView;

use crate::direction::Direction;

/// One of the nine support segments of a tile.
///
/// The first eight form a ring around the tile edge, starting at the top corner
/// and running clockwise; `Centre` sits in the middle and never rotates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum PaintSegment {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
    Centre = 8,
}

impl PaintSegment {
    pub const ALL: [PaintSegment; 9] = [
        PaintSegment::Top,
        PaintSegment::TopRight,
        PaintSegment::Right,
        PaintSegment::BottomRight,
        PaintSegment::Bottom,
        PaintSegment::BottomLeft,
        PaintSegment::Left,
        PaintSegment::TopLeft,
        PaintSegment::Centre,
    ];

    pub const fn from_index(index: usize) -> Option<PaintSegment> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn bit(&self) -> u16 {
        1 << (*self as u8)
    }
}

const RING_MASK: u16 = 0xFF;
const CENTRE_MASK: u16 = 1 << 8;

/// A set of [PaintSegment]s, as a 9-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segments(u16);

impl Segments {
    pub const NONE: Segments = Segments(0);
    pub const ALL: Segments = Segments(RING_MASK | CENTRE_MASK);

    pub const fn from_bits(bits: u16) -> Segments {
        Segments(bits & Self::ALL.0)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Builds a set from a list of segments. Usable in `const` tables.
    pub const fn of(segments: &[PaintSegment]) -> Segments {
        let mut bits = 0;
        let mut i = 0;
        while i < segments.len() {
            bits |= segments[i].bit();
            i += 1;
        }
        Segments(bits)
    }

    pub const fn union(&self, other: Segments) -> Segments {
        Segments(self.0 | other.0)
    }

    pub const fn contains(&self, segment: PaintSegment) -> bool {
        self.0 & segment.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Rotates a set described in the direction-0 frame into `direction`.
    ///
    /// The eight ring segments shift by two positions per quarter turn; the
    /// centre segment stays where it is.
    #[inline]
    pub const fn rotate(&self, direction: Direction) -> Segments {
        let ring = self.0 & RING_MASK;
        let shift = direction.value() as u32 * 2;
        let rotated = ((ring << shift) | (ring >> ((8 - shift) % 8))) & RING_MASK;
        Segments(rotated | (self.0 & CENTRE_MASK))
    }

    pub fn iter(&self) -> impl Iterator<Item = PaintSegment> + '_ {
        self.0
            .view_bits::<bv::Lsb0>()
            .iter_ones()
            .filter_map(PaintSegment::from_index)
    }
}

impl Debug for Segments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<PaintSegment> for Segments {
    fn from_iter<T: IntoIterator<Item = PaintSegment>>(iter: T) -> Self {
        Segments(iter.into_iter().fold(0, |acc, s| acc | s.bit()))
    }
}

/// Free-function form of [Segments::rotate], as painters usually call it.
#[inline]
pub const fn rotate_segments(segments: Segments, direction: Direction) -> Segments {
    segments.rotate(direction)
}

#[cfg(test)]
mod tests {
    use super::PaintSegment::*;
    use super::*;

    #[test]
    fn rotation_keeps_centre() {
        let segments = Segments::of(&[Top, Centre, BottomRight]);
        assert_eq!(
            segments.rotate(Direction::SE),
            Segments::of(&[Right, Centre, BottomLeft])
        );
        assert_eq!(
            segments.rotate(Direction::NW),
            Segments::of(&[Left, Centre, TopRight])
        );
        for d in Direction::ALL {
            assert_eq!(Segments::ALL.rotate(d), Segments::ALL);
            assert_eq!(Segments::NONE.rotate(d), Segments::NONE);
            assert!(segments.rotate(d).contains(Centre));
        }
    }

    #[test]
    fn full_turn_is_identity() {
        let segments = Segments::of(&[Left, TopLeft, Top]);
        let mut rotated = segments;
        for _ in 0..4 {
            rotated = rotated.rotate(Direction::SE);
        }
        assert_eq!(rotated, segments);
    }

    #[test]
    fn iterates_in_ring_order() {
        let segments = Segments::of(&[Centre, Left, Top]);
        let listed: Vec<_> = segments.iter().collect();
        assert_eq!(listed, vec![Top, Left, Centre]);
        assert_eq!(listed.into_iter().collect::<Segments>(), segments);
    }
}
