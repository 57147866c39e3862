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


//! Sprite indices and the static per-piece sprite tables.
//!
//! Every piece draws from a contiguous block of images (a [SpriteGroup]). The
//! blocks are laid out back to back starting at [SPR_G2_HYBRID_BEGIN], in the
//! order the sprite sheet stores them.

use trackpaint_core::{
    coordinates::{BoundBoxXYZ, CoordsXYZ},
    direction::{Direction, NUM_ORTHOGONAL_DIRECTIONS},
    image::ImageIndex,
    session::{PaintHandle, PaintSession},
    track_element::TrackElement,
};

/// First image of the hybrid coaster block in the sprite sheet.
pub const SPR_G2_HYBRID_BEGIN: ImageIndex = 31_068;

/// A contiguous run of `count` images starting at `base`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpriteGroup {
    pub base: ImageIndex,
    pub count: u32,
}

impl SpriteGroup {
    pub const fn starting_at(base: ImageIndex, count: u32) -> SpriteGroup {
        SpriteGroup { base, count }
    }

    /// The group laid out directly after this one
    pub const fn next(&self, count: u32) -> SpriteGroup {
        SpriteGroup {
            base: self.base + self.count,
            count,
        }
    }

    /// One past the last image of the group
    pub const fn end(&self) -> ImageIndex {
        self.base + self.count
    }

    #[inline]
    pub const fn image(&self, offset: u16) -> ImageIndex {
        self.base + offset as ImageIndex
    }

    pub const fn contains_offset(&self, offset: u16) -> bool {
        (offset as u32) < self.count
    }
}

pub const FLAT: SpriteGroup = SpriteGroup::starting_at(SPR_G2_HYBRID_BEGIN, 4);
pub const FLAT_LIFT: SpriteGroup = FLAT.next(4);
pub const STATION: SpriteGroup = FLAT_LIFT.next(8);
pub const BRAKES: SpriteGroup = STATION.next(4);
pub const BLOCK_BRAKES: SpriteGroup = BRAKES.next(8);
pub const BOOSTER: SpriteGroup = BLOCK_BRAKES.next(4);
pub const SLOPE: SpriteGroup = BOOSTER.next(42);
pub const SLOPE_LIFT: SpriteGroup = SLOPE.next(42);
pub const VERTICAL: SpriteGroup = SLOPE_LIFT.next(12);
pub const TURN_SMALL: SpriteGroup = VERTICAL.next(12);
pub const TURN_SMALL_BANKED: SpriteGroup = TURN_SMALL.next(14);
pub const TURN_SMALL_GENTLE: SpriteGroup = TURN_SMALL_BANKED.next(24);
pub const TURN_MEDIUM: SpriteGroup = TURN_SMALL_GENTLE.next(20);
pub const TURN_MEDIUM_BANKED: SpriteGroup = TURN_MEDIUM.next(22);
pub const TURN_MEDIUM_GENTLE: SpriteGroup = TURN_MEDIUM_BANKED.next(40);
pub const S_BEND: SpriteGroup = TURN_MEDIUM_GENTLE.next(32);
pub const BANK: SpriteGroup = S_BEND.next(18);
pub const BANK_SLOPE: SpriteGroup = BANK.next(36);
pub const HELIX_SMALL: SpriteGroup = BANK_SLOPE.next(56);
pub const EIGHTH_TO_DIAG: SpriteGroup = HELIX_SMALL.next(32);
pub const EIGHTH_BANK_TO_DIAG: SpriteGroup = EIGHTH_TO_DIAG.next(36);
pub const DIAG_FLAT: SpriteGroup = EIGHTH_BANK_TO_DIAG.next(4);
pub const DIAG_FLAT_LIFT: SpriteGroup = DIAG_FLAT.next(4);
pub const DIAG_SLOPE: SpriteGroup = DIAG_FLAT_LIFT.next(24);
pub const DIAG_SLOPE_LIFT: SpriteGroup = DIAG_SLOPE.next(24);
pub const DIAG_BANK: SpriteGroup = DIAG_SLOPE_LIFT.next(18);
pub const BARREL_ROLL: SpriteGroup = DIAG_BANK.next(48);

/// One past the last hybrid coaster image
pub const SPR_G2_HYBRID_END: ImageIndex = BARREL_ROLL.end();

#[cfg(test)]
pub(crate) const ALL_GROUPS: [SpriteGroup; 27] = [
    FLAT,
    FLAT_LIFT,
    STATION,
    BRAKES,
    BLOCK_BRAKES,
    BOOSTER,
    SLOPE,
    SLOPE_LIFT,
    VERTICAL,
    TURN_SMALL,
    TURN_SMALL_BANKED,
    TURN_SMALL_GENTLE,
    TURN_MEDIUM,
    TURN_MEDIUM_BANKED,
    TURN_MEDIUM_GENTLE,
    S_BEND,
    BANK,
    BANK_SLOPE,
    HELIX_SMALL,
    EIGHTH_TO_DIAG,
    EIGHTH_BANK_TO_DIAG,
    DIAG_FLAT,
    DIAG_FLAT_LIFT,
    DIAG_SLOPE,
    DIAG_SLOPE_LIFT,
    DIAG_BANK,
    BARREL_ROLL,
];

/// One sprite of a piece, described in the direction-0 frame relative to the
/// piece's base height. The paint engine swaps the ground axes for odd
/// directions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrackSprite {
    pub offset: u16,
    pub origin: CoordsXYZ,
    pub bound_box: BoundBoxXYZ,
}

/// Sprites indexed by `[direction][track sequence]`. An empty slice means the
/// tile draws no track sprite.
pub type SpriteTable<const N: usize> = [[&'static [TrackSprite]; N]; NUM_ORTHOGONAL_DIRECTIONS];

macro_rules! sprite {
    ($offset:expr, ($x:expr, $y:expr, $z:expr), ($lx:expr, $ly:expr, $lz:expr)) => {
        $crate::track::sprites::TrackSprite {
            offset: $offset,
            origin: trackpaint_core::coordinates::CoordsXYZ::new(0, 0, 0),
            bound_box: trackpaint_core::coordinates::BoundBoxXYZ::new(
                trackpaint_core::coordinates::CoordsXYZ::new($x, $y, $z),
                trackpaint_core::coordinates::CoordsXYZ::new($lx, $ly, $lz),
            ),
        }
    };
    ($offset:expr, ($x:expr, $y:expr, $z:expr), ($lx:expr, $ly:expr, $lz:expr), origin: ($ox:expr, $oy:expr, $oz:expr)) => {
        $crate::track::sprites::TrackSprite {
            offset: $offset,
            origin: trackpaint_core::coordinates::CoordsXYZ::new($ox, $oy, $oz),
            bound_box: trackpaint_core::coordinates::BoundBoxXYZ::new(
                trackpaint_core::coordinates::CoordsXYZ::new($x, $y, $z),
                trackpaint_core::coordinates::CoordsXYZ::new($lx, $ly, $lz),
            ),
        }
    };
}
pub(crate) use sprite;

/// Picks the chain lift variant of a group when the element has a chain.
#[inline]
pub(crate) fn chain_group(
    track_element: &TrackElement,
    plain: SpriteGroup,
    lift: SpriteGroup,
) -> SpriteGroup {
    if track_element.has_chain() {
        lift
    } else {
        plain
    }
}

/// Adds every sprite listed for `(direction, sequence)` as a parent image,
/// coloured with the session's track template.
///
/// Returns the handle of the first sprite the engine accepted. Sequences past
/// the end of the table draw nothing.
pub(crate) fn paint_sprites<const N: usize>(
    session: &mut dyn PaintSession,
    group: SpriteGroup,
    table: &SpriteTable<N>,
    sequence: u8,
    direction: Direction,
    height: i32,
) -> Option<PaintHandle> {
    let sprites = table[direction.index()].get(sequence as usize)?;
    let template = session.track_colours();
    let mut first = None;
    for sprite in sprites.iter() {
        let handle = session.add_image_as_parent_rotated(
            direction,
            template.with_index(group.image(sprite.offset)),
            sprite.origin.with_z_offset(height),
            sprite.bound_box.with_z_offset(height),
        );
        first = first.or(handle);
    }
    first
}

/// True if every offset in `table` lands inside `group`.
#[cfg(test)]
pub(crate) fn table_fits<const N: usize>(table: &SpriteTable<N>, group: SpriteGroup) -> bool {
    table
        .iter()
        .flat_map(|by_sequence| by_sequence.iter())
        .flat_map(|sprites| sprites.iter())
        .all(|sprite| group.contains_offset(sprite.offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_contiguous() {
        for pair in ALL_GROUPS.windows(2) {
            assert_eq!(pair[0].end(), pair[1].base, "{:?} -> {:?}", pair[0], pair[1]);
        }
        assert_eq!(ALL_GROUPS[0].base, SPR_G2_HYBRID_BEGIN);
        assert_eq!(ALL_GROUPS[ALL_GROUPS.len() - 1].end(), SPR_G2_HYBRID_END);
    }

    #[test]
    fn lift_groups_mirror_plain_groups() {
        assert_eq!(FLAT.count, FLAT_LIFT.count);
        assert_eq!(SLOPE.count, SLOPE_LIFT.count);
        assert_eq!(DIAG_FLAT.count, DIAG_FLAT_LIFT.count);
        assert_eq!(DIAG_SLOPE.count, DIAG_SLOPE_LIFT.count);
    }

    #[test]
    fn group_offsets() {
        assert_eq!(SLOPE.image(0), SLOPE.base);
        assert!(SLOPE.contains_offset(41));
        assert!(!SLOPE.contains_offset(42));
    }
}
