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


//! Flat, banked and gently sloped quarter turns plus the S-bends.
//!
//! Right-hand turns that share sprites with the left-hand ones are drawn by
//! walking the left turn backwards: the sequence goes through a remap table and
//! the direction turns one step anticlockwise.

use trackpaint_core::{
    constants::{DEFAULT_GENERAL_SUPPORT_HEIGHT, HEIGHT_STEP},
    direction::Direction,
    ride::Ride,
    segments::Segments,
    session::PaintSession,
    supports::{WoodenSupportSubType as Sub, WoodenSupportTransitionType},
    track_element::TrackElement,
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, paint_sprites, sprite, SpriteGroup, SpriteTable},
    util::{
        block_all_segments, block_segments, left_turn_tunnels, remap, right_turn_tunnels, segs,
        wooden_a_supports, wooden_a_supports_flat, MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT,
        MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, TUNNEL_GROUP,
    },
};

static LEFT_QUARTER_TURN_3_SPRITES: SpriteTable<4> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[sprite!(1, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(2, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(3, (0, 6, 0), (32, 20, 3))],
        &[sprite!(4, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(5, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(6, (0, 6, 0), (32, 20, 3))],
        &[sprite!(7, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(8, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(9, (0, 6, 0), (32, 20, 3))],
        &[sprite!(10, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(11, (6, 0, 0), (20, 32, 3))],
    ],
];

static LEFT_BANKED_QUARTER_TURN_3_SPRITES: SpriteTable<4> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(2, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(3, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
        &[sprite!(5, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(6, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(7, (0, 6, 0), (32, 20, 3))],
        &[sprite!(8, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(9, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(10, (0, 6, 0), (32, 20, 3))],
        &[sprite!(11, (16, 16, 0), (16, 16, 3))],
        &[],
        &[
            sprite!(12, (6, 0, 0), (20, 32, 3)),
            sprite!(13, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

static LEFT_QUARTER_TURN_3_UP_25_SPRITES: SpriteTable<4> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[sprite!(1, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(2, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(3, (0, 6, 0), (32, 20, 3))],
        &[sprite!(4, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(5, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(6, (0, 6, 0), (32, 20, 3))],
        &[sprite!(7, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(8, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(9, (0, 6, 0), (32, 20, 3))],
        &[sprite!(10, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(11, (6, 0, 0), (20, 32, 3))],
    ],
];

static RIGHT_QUARTER_TURN_3_UP_25_SPRITES: SpriteTable<4> = [
    [
        &[sprite!(12, (0, 6, 0), (32, 20, 3))],
        &[sprite!(13, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(14, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(15, (0, 6, 0), (32, 20, 3))],
        &[sprite!(16, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(17, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(18, (0, 6, 0), (32, 20, 3))],
        &[sprite!(19, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(20, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(21, (0, 6, 0), (32, 20, 3))],
        &[sprite!(22, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(23, (6, 0, 0), (20, 32, 3))],
    ],
];

static LEFT_QUARTER_TURN_5_SPRITES: SpriteTable<7> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(1, (0, 0, 0), (32, 16, 3))],
        &[sprite!(2, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(3, (16, 0, 0), (16, 32, 3))],
        &[sprite!(4, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(5, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(6, (0, 16, 0), (32, 16, 3))],
        &[sprite!(7, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(8, (0, 0, 0), (16, 32, 3))],
        &[sprite!(9, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(10, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(11, (0, 16, 0), (32, 16, 3))],
        &[sprite!(12, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(13, (0, 0, 0), (16, 32, 3))],
        &[sprite!(14, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(15, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(16, (0, 0, 0), (32, 16, 3))],
        &[sprite!(17, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(18, (16, 0, 0), (16, 32, 3))],
        &[sprite!(19, (6, 0, 0), (20, 32, 3))],
    ],
];

static LEFT_BANKED_QUARTER_TURN_5_SPRITES: SpriteTable<7> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 27, 0), (32, 1, 26)),
        ],
        &[],
        &[sprite!(2, (0, 0, 0), (32, 16, 3))],
        &[sprite!(3, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(4, (16, 0, 0), (16, 32, 3))],
        &[sprite!(5, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(6, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(7, (0, 16, 0), (32, 16, 3))],
        &[sprite!(8, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(9, (0, 0, 0), (16, 32, 3))],
        &[sprite!(10, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(11, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(12, (0, 16, 0), (32, 16, 3))],
        &[sprite!(13, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(14, (0, 0, 0), (16, 32, 3))],
        &[sprite!(15, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(16, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(17, (0, 0, 0), (32, 16, 3))],
        &[sprite!(18, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(19, (16, 0, 0), (16, 32, 3))],
        &[
            sprite!(20, (6, 0, 0), (20, 32, 3)),
            sprite!(21, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

static LEFT_QUARTER_TURN_5_UP_25_SPRITES: SpriteTable<7> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(1, (0, 0, 0), (32, 16, 3))],
        &[sprite!(2, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(3, (16, 0, 0), (16, 32, 3))],
        &[sprite!(4, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(5, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(6, (0, 16, 0), (32, 16, 3))],
        &[sprite!(7, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(8, (0, 0, 0), (16, 32, 3))],
        &[sprite!(9, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(10, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(11, (0, 16, 0), (32, 16, 3))],
        &[sprite!(12, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(13, (0, 0, 0), (16, 32, 3))],
        &[sprite!(14, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(15, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(16, (0, 0, 0), (32, 16, 3))],
        &[sprite!(17, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(18, (16, 0, 0), (16, 32, 3))],
        &[sprite!(19, (6, 0, 0), (20, 32, 3))],
    ],
];

static RIGHT_QUARTER_TURN_5_UP_25_SPRITES: SpriteTable<7> = [
    [
        &[sprite!(20, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(21, (0, 16, 0), (32, 16, 3))],
        &[sprite!(22, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(23, (0, 0, 0), (16, 32, 3))],
        &[sprite!(24, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(25, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(26, (0, 0, 0), (32, 16, 3))],
        &[sprite!(27, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(28, (16, 0, 0), (16, 32, 3))],
        &[sprite!(29, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(30, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(31, (0, 0, 0), (32, 16, 3))],
        &[sprite!(32, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(33, (16, 0, 0), (16, 32, 3))],
        &[sprite!(34, (6, 0, 0), (20, 32, 3))],
    ],
    [
        &[sprite!(35, (0, 6, 0), (32, 20, 3))],
        &[],
        &[sprite!(36, (0, 16, 0), (32, 16, 3))],
        &[sprite!(37, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(38, (0, 0, 0), (16, 32, 3))],
        &[sprite!(39, (6, 0, 0), (20, 32, 3))],
    ],
];

static S_BEND_LEFT_SPRITES: SpriteTable<4> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[sprite!(1, (0, 0, 0), (32, 26, 3))],
        &[sprite!(2, (0, 6, 0), (32, 26, 3))],
        &[sprite!(3, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
        &[sprite!(5, (0, 6, 0), (32, 26, 3))],
        &[sprite!(6, (0, 0, 0), (32, 26, 3))],
        &[sprite!(7, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(8, (0, 6, 0), (32, 20, 3))],
        &[sprite!(9, (0, 6, 0), (32, 26, 3))],
        &[sprite!(10, (0, 0, 0), (32, 26, 3))],
        &[sprite!(11, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(12, (0, 6, 0), (32, 20, 3))],
        &[sprite!(13, (0, 0, 0), (32, 26, 3))],
        &[sprite!(14, (0, 6, 0), (32, 26, 3))],
        &[sprite!(15, (0, 6, 0), (32, 20, 3))],
    ],
];

static S_BEND_RIGHT_SPRITES: SpriteTable<4> = [
    [
        &[sprite!(16, (0, 6, 0), (32, 20, 3))],
        &[sprite!(17, (0, 6, 0), (32, 26, 3))],
        &[sprite!(18, (0, 0, 0), (32, 26, 3))],
        &[sprite!(19, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(20, (0, 6, 0), (32, 20, 3))],
        &[sprite!(21, (0, 0, 0), (32, 26, 3))],
        &[sprite!(22, (0, 6, 0), (32, 26, 3))],
        &[sprite!(23, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(24, (0, 6, 0), (32, 20, 3))],
        &[sprite!(25, (0, 0, 0), (32, 26, 3))],
        &[sprite!(26, (0, 6, 0), (32, 26, 3))],
        &[sprite!(27, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(28, (0, 6, 0), (32, 20, 3))],
        &[sprite!(29, (0, 6, 0), (32, 26, 3))],
        &[sprite!(30, (0, 0, 0), (32, 26, 3))],
        &[sprite!(31, (0, 6, 0), (32, 20, 3))],
    ],
];

fn paint_left_quarter_turn_3(
    session: &mut dyn PaintSession,
    ride: &Ride,
    group: SpriteGroup,
    table: &SpriteTable<4>,
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    paint_sprites(session, group, table, track_sequence, direction, height);
    match track_sequence {
        0 | 3 => {
            wooden_a_supports_flat(session, ride, Sub::Corner3, direction, height);
            block_all_segments(session);
        }
        1 => {
            wooden_a_supports_flat(session, ride, Sub::Corner1, direction, height);
        }
        2 => block_segments(session, segs::QT3_LEFT_INNER, direction),
        _ => return,
    }
    left_turn_tunnels(
        session,
        direction,
        track_sequence,
        3,
        (height, TunnelSubType::Flat),
        (height, TunnelSubType::Flat),
    );
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn left_quarter_turn_3(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_left_quarter_turn_3(
        session,
        ride,
        sprites::TURN_SMALL,
        &LEFT_QUARTER_TURN_3_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn right_quarter_turn_3(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, track_sequence) {
        left_quarter_turn_3(session, ride, sequence, direction.prev(), height, track_element);
    }
}

pub(crate) fn left_banked_quarter_turn_3(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_left_quarter_turn_3(
        session,
        ride,
        sprites::TURN_SMALL_BANKED,
        &LEFT_BANKED_QUARTER_TURN_3_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn right_banked_quarter_turn_3(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, track_sequence) {
        left_banked_quarter_turn_3(session, ride, sequence, direction.prev(), height, track_element);
    }
}

fn paint_left_quarter_turn_5(
    session: &mut dyn PaintSession,
    ride: &Ride,
    group: SpriteGroup,
    table: &SpriteTable<7>,
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    paint_sprites(session, group, table, track_sequence, direction, height);
    match track_sequence {
        0 => {
            wooden_a_supports_flat(session, ride, Sub::NeSw, direction, height);
            block_all_segments(session);
        }
        1 | 4 => block_segments(session, segs::QT5_LEFT_EDGE, direction),
        2 => {
            wooden_a_supports_flat(session, ride, Sub::Corner3, direction, height);
            block_segments(session, segs::QT5_LEFT_ENTRY, direction);
        }
        3 => {
            wooden_a_supports_flat(session, ride, Sub::Corner1, direction, height);
            block_segments(session, segs::QT5_LEFT_MIDDLE, direction);
        }
        5 => {
            wooden_a_supports_flat(session, ride, Sub::Corner3, direction, height);
            block_segments(session, segs::QT5_LEFT_EXIT, direction);
        }
        6 => {
            wooden_a_supports_flat(session, ride, Sub::NwSe, direction, height);
            block_all_segments(session);
        }
        _ => return,
    }
    left_turn_tunnels(
        session,
        direction,
        track_sequence,
        6,
        (height, TunnelSubType::Flat),
        (height, TunnelSubType::Flat),
    );
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn left_quarter_turn_5(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_left_quarter_turn_5(
        session,
        ride,
        sprites::TURN_MEDIUM,
        &LEFT_QUARTER_TURN_5_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn right_quarter_turn_5(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, track_sequence) {
        left_quarter_turn_5(session, ride, sequence, direction.prev(), height, track_element);
    }
}

pub(crate) fn banked_left_quarter_turn_5(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_left_quarter_turn_5(
        session,
        ride,
        sprites::TURN_MEDIUM_BANKED,
        &LEFT_BANKED_QUARTER_TURN_5_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn banked_right_quarter_turn_5(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, track_sequence) {
        banked_left_quarter_turn_5(session, ride, sequence, direction.prev(), height, track_element);
    }
}

/// Shared body of the two S-bends. `middle` holds the support corner and
/// blocked segments of the two inner tiles.
fn paint_s_bend(
    session: &mut dyn PaintSession,
    ride: &Ride,
    table: &SpriteTable<4>,
    middle: [(Sub, Segments); 2],
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    paint_sprites(session, sprites::S_BEND, table, track_sequence, direction, height);
    match track_sequence {
        0 => {
            wooden_a_supports_flat(session, ride, Sub::NeSw, direction, height);
            if direction.value() == 0 || direction.value() == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_all_segments(session);
        }
        1 | 2 => {
            let (sub_type, segments) = middle[track_sequence as usize - 1];
            wooden_a_supports_flat(session, ride, sub_type, direction, height);
            block_segments(session, segments, direction);
        }
        3 => {
            wooden_a_supports_flat(session, ride, Sub::NeSw, direction, height);
            match direction.value() {
                1 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                2 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_all_segments(session);
        }
        _ => return,
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn s_bend_left(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_s_bend(
        session,
        ride,
        &S_BEND_LEFT_SPRITES,
        [
            (Sub::Corner3, segs::S_BEND_UPPER),
            (Sub::Corner1, segs::S_BEND_LOWER),
        ],
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn s_bend_right(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_s_bend(
        session,
        ride,
        &S_BEND_RIGHT_SPRITES,
        [
            (Sub::Corner2, segs::S_BEND_LOWER),
            (Sub::Corner0, segs::S_BEND_UPPER),
        ],
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn left_quarter_turn_3_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_sprites(
        session,
        sprites::TURN_SMALL_GENTLE,
        &LEFT_QUARTER_TURN_3_UP_25_SPRITES,
        track_sequence,
        direction,
        height,
    );
    let clearance = match track_sequence {
        0 | 3 => {
            wooden_a_supports_flat(session, ride, Sub::Corner3, direction, height);
            block_all_segments(session);
            72
        }
        1 => {
            wooden_a_supports_flat(session, ride, Sub::Corner1, direction, height);
            56
        }
        2 => {
            block_segments(session, segs::QT3_LEFT_INNER, direction);
            56
        }
        _ => return,
    };
    left_turn_tunnels(
        session,
        direction,
        track_sequence,
        3,
        (height - HEIGHT_STEP, TunnelSubType::SlopeStart),
        (height + HEIGHT_STEP, TunnelSubType::SlopeEnd),
    );
    session.set_general_support_height(height + clearance);
}

pub(crate) fn right_quarter_turn_3_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_sprites(
        session,
        sprites::TURN_SMALL_GENTLE,
        &RIGHT_QUARTER_TURN_3_UP_25_SPRITES,
        track_sequence,
        direction,
        height,
    );
    let clearance = match track_sequence {
        0 | 3 => {
            wooden_a_supports_flat(session, ride, Sub::Corner2, direction, height);
            block_all_segments(session);
            72
        }
        1 => {
            wooden_a_supports_flat(session, ride, Sub::Corner0, direction, height);
            56
        }
        2 => {
            block_segments(session, segs::QT3_RIGHT_INNER, direction);
            56
        }
        _ => return,
    };
    right_turn_tunnels(
        session,
        direction,
        track_sequence,
        3,
        (height - HEIGHT_STEP, TunnelSubType::SlopeStart),
        (height + HEIGHT_STEP, TunnelSubType::SlopeEnd),
    );
    session.set_general_support_height(height + clearance);
}

pub(crate) fn left_quarter_turn_3_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, track_sequence) {
        right_quarter_turn_3_up_25(session, ride, sequence, direction.next(), height, track_element);
    }
}

pub(crate) fn right_quarter_turn_3_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, track_sequence) {
        left_quarter_turn_3_up_25(session, ride, sequence, direction.prev(), height, track_element);
    }
}

pub(crate) fn left_quarter_turn_5_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_sprites(
        session,
        sprites::TURN_MEDIUM_GENTLE,
        &LEFT_QUARTER_TURN_5_UP_25_SPRITES,
        track_sequence,
        direction,
        height,
    );
    let clearance = match track_sequence {
        0 => {
            wooden_a_supports(
                session,
                ride,
                Sub::NeSw,
                direction,
                height,
                WoodenSupportTransitionType::Up25,
            );
            block_all_segments(session);
            72
        }
        1 | 4 => {
            block_segments(session, segs::QT5_LEFT_EDGE, direction);
            72
        }
        2 => {
            wooden_a_supports_flat(session, ride, Sub::Corner3, direction, height);
            block_segments(session, segs::QT5_LEFT_ENTRY, direction);
            72
        }
        3 => {
            wooden_a_supports_flat(session, ride, Sub::Corner1, direction, height);
            block_segments(session, segs::QT5_LEFT_MIDDLE, direction);
            64
        }
        5 => {
            wooden_a_supports_flat(session, ride, Sub::Corner3, direction, height);
            block_segments(session, segs::QT5_LEFT_EXIT, direction);
            72
        }
        6 => {
            wooden_a_supports(
                session,
                ride,
                Sub::NwSe,
                direction,
                height,
                WoodenSupportTransitionType::Up25,
            );
            block_all_segments(session);
            72
        }
        _ => return,
    };
    left_turn_tunnels(
        session,
        direction,
        track_sequence,
        6,
        (height - HEIGHT_STEP, TunnelSubType::SlopeStart),
        (height + HEIGHT_STEP, TunnelSubType::SlopeEnd),
    );
    session.set_general_support_height(height + clearance);
}

pub(crate) fn right_quarter_turn_5_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_sprites(
        session,
        sprites::TURN_MEDIUM_GENTLE,
        &RIGHT_QUARTER_TURN_5_UP_25_SPRITES,
        track_sequence,
        direction,
        height,
    );
    let clearance = match track_sequence {
        0 => {
            wooden_a_supports(
                session,
                ride,
                Sub::NeSw,
                direction,
                height,
                WoodenSupportTransitionType::Up25,
            );
            block_all_segments(session);
            72
        }
        1 | 4 => {
            block_segments(session, segs::QT5_RIGHT_EDGE, direction);
            72
        }
        2 => {
            wooden_a_supports_flat(session, ride, Sub::Corner2, direction, height);
            block_segments(session, segs::QT5_RIGHT_ENTRY, direction);
            72
        }
        3 => {
            wooden_a_supports_flat(session, ride, Sub::Corner0, direction, height);
            block_segments(session, segs::QT5_RIGHT_MIDDLE, direction);
            64
        }
        5 => {
            wooden_a_supports_flat(session, ride, Sub::Corner2, direction, height);
            block_segments(session, segs::QT5_RIGHT_EXIT, direction);
            72
        }
        6 => {
            wooden_a_supports(
                session,
                ride,
                Sub::NwSe,
                direction,
                height,
                WoodenSupportTransitionType::Up25,
            );
            block_all_segments(session);
            72
        }
        _ => return,
    };
    right_turn_tunnels(
        session,
        direction,
        track_sequence,
        6,
        (height - HEIGHT_STEP, TunnelSubType::SlopeStart),
        (height + HEIGHT_STEP, TunnelSubType::SlopeEnd),
    );
    session.set_general_support_height(height + clearance);
}

pub(crate) fn left_quarter_turn_5_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, track_sequence) {
        right_quarter_turn_5_up_25(session, ride, sequence, direction.next(), height, track_element);
    }
}

pub(crate) fn right_quarter_turn_5_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, track_sequence) {
        left_quarter_turn_5_up_25(session, ride, sequence, direction.prev(), height, track_element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        assert!(table_fits(&LEFT_QUARTER_TURN_3_SPRITES, sprites::TURN_SMALL));
        assert!(table_fits(&LEFT_BANKED_QUARTER_TURN_3_SPRITES, sprites::TURN_SMALL_BANKED));
        assert!(table_fits(&LEFT_QUARTER_TURN_3_UP_25_SPRITES, sprites::TURN_SMALL_GENTLE));
        assert!(table_fits(&RIGHT_QUARTER_TURN_3_UP_25_SPRITES, sprites::TURN_SMALL_GENTLE));
        assert!(table_fits(&LEFT_QUARTER_TURN_5_SPRITES, sprites::TURN_MEDIUM));
        assert!(table_fits(&LEFT_BANKED_QUARTER_TURN_5_SPRITES, sprites::TURN_MEDIUM_BANKED));
        assert!(table_fits(&LEFT_QUARTER_TURN_5_UP_25_SPRITES, sprites::TURN_MEDIUM_GENTLE));
        assert!(table_fits(&RIGHT_QUARTER_TURN_5_UP_25_SPRITES, sprites::TURN_MEDIUM_GENTLE));
        assert!(table_fits(&S_BEND_LEFT_SPRITES, sprites::S_BEND));
        assert!(table_fits(&S_BEND_RIGHT_SPRITES, sprites::S_BEND));
    }

    #[test]
    fn corner_filler_tiles_draw_no_sprite() {
        for direction in Direction::ALL {
            assert!(LEFT_QUARTER_TURN_3_SPRITES[direction.index()][2].is_empty());
            assert!(LEFT_QUARTER_TURN_5_SPRITES[direction.index()][1].is_empty());
            assert!(LEFT_QUARTER_TURN_5_SPRITES[direction.index()][4].is_empty());
        }
    }
}
