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


//! Small half-banked helices: two banked quarter turns stacked so the track
//! climbs one height step per half.

use trackpaint_core::{
    constants::{DEFAULT_GENERAL_SUPPORT_HEIGHT, HEIGHT_STEP, SUPPORT_HEIGHT_UNSET},
    direction::Direction,
    ride::Ride,
    segments::{PaintSegment as Seg, Segments},
    session::PaintSession,
    supports::WoodenSupportSubType as Sub,
    track_element::TrackElement,
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, paint_sprites, sprite, SpriteTable},
    util::{remap, wooden_a_supports_flat, MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, TUNNEL_GROUP},
};

static LEFT_HALF_BANKED_HELIX_UP_SMALL_SPRITES: SpriteTable<8> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(2, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(3, (6, 0, 0), (20, 32, 3))],
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
        &[sprite!(5, (16, 16, 0), (16, 16, 3))],
        &[],
        &[
            sprite!(6, (6, 0, 0), (20, 32, 3)),
            sprite!(7, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(8, (0, 6, 0), (32, 20, 3)),
            sprite!(9, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(10, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(11, (6, 0, 0), (20, 32, 3))],
        &[sprite!(12, (0, 6, 0), (32, 20, 3))],
        &[sprite!(13, (16, 0, 0), (16, 16, 3))],
        &[],
        &[
            sprite!(14, (6, 0, 0), (20, 32, 3)),
            sprite!(15, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[sprite!(16, (0, 6, 0), (32, 20, 3))],
        &[sprite!(17, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(18, (6, 0, 0), (20, 32, 3))],
        &[sprite!(19, (0, 6, 0), (32, 20, 3))],
        &[sprite!(20, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(21, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(22, (0, 6, 0), (32, 20, 3))],
        &[sprite!(23, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(24, (6, 0, 0), (20, 32, 3))],
        &[sprite!(25, (0, 6, 0), (32, 20, 3))],
        &[sprite!(26, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(27, (6, 0, 0), (20, 32, 3))],
    ],
];

static RIGHT_HALF_BANKED_HELIX_UP_SMALL_SPRITES: SpriteTable<8> = [
    [
        &[sprite!(28, (0, 6, 0), (32, 20, 3))],
        &[sprite!(29, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(30, (6, 0, 0), (20, 32, 3))],
        &[sprite!(31, (0, 6, 0), (32, 20, 3))],
        &[sprite!(32, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(33, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(34, (0, 6, 0), (32, 20, 3))],
        &[sprite!(35, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(36, (6, 0, 0), (20, 32, 3))],
        &[sprite!(37, (0, 6, 0), (32, 20, 3))],
        &[sprite!(38, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(39, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[
            sprite!(40, (0, 6, 0), (32, 20, 3)),
            sprite!(41, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(42, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(43, (6, 0, 0), (20, 32, 3))],
        &[sprite!(44, (0, 6, 0), (32, 20, 3))],
        &[sprite!(45, (0, 16, 0), (16, 16, 3))],
        &[],
        &[
            sprite!(46, (6, 0, 0), (20, 32, 3)),
            sprite!(47, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(48, (0, 6, 0), (32, 20, 3)),
            sprite!(49, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(50, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(51, (6, 0, 0), (20, 32, 3))],
        &[sprite!(52, (0, 6, 0), (32, 20, 3))],
        &[sprite!(53, (16, 16, 0), (16, 16, 3))],
        &[],
        &[
            sprite!(54, (6, 0, 0), (20, 32, 3)),
            sprite!(55, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

/// Clearance left above the low side of a banked helix tile
const HELIX_RAISED_HEIGHT: u16 = 48;
const HELIX_RAISED_SLOPE: u8 = 0x20;

#[derive(Clone, Copy)]
enum Edge {
    Left,
    Right,
}

/// Supports and clearances of one helix tile, in the direction-0 frame.
struct HelixTile {
    support: Option<Sub>,
    raised: Segments,
    blocked: Segments,
}

struct HelixTunnel {
    sequence: u8,
    direction: u8,
    edge: Edge,
    dz: i32,
}

struct Helix {
    sprites: &'static SpriteTable<8>,
    tiles: [HelixTile; 8],
    tunnels: [HelixTunnel; 8],
}

const fn tile(support: Option<Sub>, raised: &[Seg], blocked: &[Seg]) -> HelixTile {
    HelixTile {
        support,
        raised: Segments::of(raised),
        blocked: Segments::of(blocked),
    }
}

const fn tunnel(sequence: u8, direction: u8, edge: Edge, dz: i32) -> HelixTunnel {
    HelixTunnel {
        sequence,
        direction,
        edge,
        dz,
    }
}

#[rustfmt::skip]
static LEFT_HELIX: Helix = {
    use Seg::*;
    Helix {
        sprites: &LEFT_HALF_BANKED_HELIX_UP_SMALL_SPRITES,
        tiles: [
            tile(Some(Sub::Corner3), &[Left, Right, Bottom, BottomRight], &[Top, Centre, TopLeft, TopRight, BottomLeft]),
            tile(Some(Sub::Corner1), &[], &[]),
            tile(None, &[], &[Left, Centre, TopLeft, BottomLeft]),
            tile(Some(Sub::Corner3), &[Top, Left, Right, TopRight], &[Bottom, Centre, TopLeft, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner2), &[Top, Right, Bottom, TopRight], &[Left, Centre, TopLeft, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner0), &[], &[]),
            tile(None, &[], &[Bottom, Centre, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner2), &[Top, Left, Bottom, TopLeft], &[Right, Centre, TopRight, BottomLeft, BottomRight]),
        ],
        tunnels: [
            tunnel(0, 0, Edge::Left, 0),
            tunnel(0, 3, Edge::Right, 0),
            tunnel(3, 2, Edge::Right, HEIGHT_STEP),
            tunnel(3, 3, Edge::Left, HEIGHT_STEP),
            tunnel(4, 0, Edge::Right, 0),
            tunnel(4, 1, Edge::Left, 0),
            tunnel(7, 0, Edge::Left, HEIGHT_STEP),
            tunnel(7, 3, Edge::Right, HEIGHT_STEP),
        ],
    }
};

#[rustfmt::skip]
static RIGHT_HELIX: Helix = {
    use Seg::*;
    Helix {
        sprites: &RIGHT_HALF_BANKED_HELIX_UP_SMALL_SPRITES,
        tiles: [
            tile(Some(Sub::Corner2), &[Top, Left, Bottom, TopLeft], &[Right, Centre, TopRight, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner0), &[], &[]),
            tile(None, &[], &[Bottom, Centre, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner2), &[Top, Right, Bottom, TopRight], &[Left, Centre, TopLeft, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner3), &[Top, Left, Right, TopRight], &[Bottom, Centre, TopLeft, BottomLeft, BottomRight]),
            tile(Some(Sub::Corner1), &[], &[]),
            tile(None, &[], &[Left, Centre, TopLeft, BottomLeft]),
            tile(Some(Sub::Corner3), &[Left, Right, Bottom, BottomRight], &[Top, Centre, TopLeft, TopRight, BottomLeft]),
        ],
        tunnels: [
            tunnel(0, 0, Edge::Left, 0),
            tunnel(0, 3, Edge::Right, 0),
            tunnel(3, 0, Edge::Right, HEIGHT_STEP),
            tunnel(3, 1, Edge::Left, HEIGHT_STEP),
            tunnel(4, 2, Edge::Right, 0),
            tunnel(4, 3, Edge::Left, 0),
            tunnel(7, 0, Edge::Left, HEIGHT_STEP),
            tunnel(7, 3, Edge::Right, HEIGHT_STEP),
        ],
    }
};

fn paint_helix(
    session: &mut dyn PaintSession,
    ride: &Ride,
    helix: &Helix,
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    let Some(tile) = helix.tiles.get(track_sequence as usize) else {
        return;
    };
    paint_sprites(
        session,
        sprites::HELIX_SMALL,
        helix.sprites,
        track_sequence,
        direction,
        height,
    );
    if let Some(sub_type) = tile.support {
        wooden_a_supports_flat(session, ride, sub_type, direction, height);
    }
    for entry in helix
        .tunnels
        .iter()
        .filter(|t| t.sequence == track_sequence && t.direction == direction.value())
    {
        match entry.edge {
            Edge::Left => {
                session.push_tunnel_left(height + entry.dz, TUNNEL_GROUP, TunnelSubType::Flat)
            }
            Edge::Right => {
                session.push_tunnel_right(height + entry.dz, TUNNEL_GROUP, TunnelSubType::Flat)
            }
        }
    }
    if !tile.raised.is_empty() {
        session.set_segment_support_height(
            tile.raised.rotate(direction),
            HELIX_RAISED_HEIGHT,
            HELIX_RAISED_SLOPE,
        );
    }
    if !tile.blocked.is_empty() {
        session.set_segment_support_height(tile.blocked.rotate(direction), SUPPORT_HEIGHT_UNSET, 0);
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn left_half_banked_helix_up_small(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_helix(session, ride, &LEFT_HELIX, track_sequence, direction, height);
}

pub(crate) fn right_half_banked_helix_up_small(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_helix(session, ride, &RIGHT_HELIX, track_sequence, direction, height);
}

/// Both halves of a down helix are the first half of the opposite up helix,
/// so the second half folds back onto sequences 0..4 one quarter turn round.
fn fold_down_helix(track_sequence: u8, direction: Direction, turn: i8) -> (u8, Direction) {
    if track_sequence >= 4 {
        (track_sequence - 4, direction.rotate(turn))
    } else {
        (track_sequence, direction)
    }
}

pub(crate) fn left_half_banked_helix_down_small(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    let (sequence, direction) = fold_down_helix(track_sequence, direction, -1);
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, sequence) {
        right_half_banked_helix_up_small(
            session,
            ride,
            sequence,
            direction.next(),
            height,
            track_element,
        );
    }
}

pub(crate) fn right_half_banked_helix_down_small(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    let (sequence, direction) = fold_down_helix(track_sequence, direction, 1);
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, sequence) {
        left_half_banked_helix_up_small(
            session,
            ride,
            sequence,
            direction.prev(),
            height,
            track_element,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        assert!(table_fits(LEFT_HELIX.sprites, sprites::HELIX_SMALL));
        assert!(table_fits(RIGHT_HELIX.sprites, sprites::HELIX_SMALL));
    }

    #[test]
    fn raised_and_blocked_segments_never_overlap() {
        for helix in [&LEFT_HELIX, &RIGHT_HELIX] {
            for tile in helix.tiles.iter() {
                assert_eq!(tile.raised.bits() & tile.blocked.bits(), 0);
            }
        }
    }

    #[test]
    fn down_helix_folds_second_half() {
        assert_eq!(fold_down_helix(5, Direction::NE, -1), (1, Direction::NW));
        assert_eq!(fold_down_helix(2, Direction::SE, -1), (2, Direction::SE));
        assert_eq!(fold_down_helix(7, Direction::NW, 1), (3, Direction::NE));
    }
}
