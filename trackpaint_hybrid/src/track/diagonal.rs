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


//! Eighth turns onto and off the diagonal, and the diagonal pieces
//! themselves.
//!
//! A diagonal piece covers four tiles but only one of them carries the track
//! sprite for a given direction; the other three just hold supports and
//! clearances. Down pieces walk the matching up piece from its far end, so
//! both the direction and the sequence are reversed.

use trackpaint_core::{
    constants::DEFAULT_GENERAL_SUPPORT_HEIGHT,
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    supports::WoodenSupportSubType as Sub,
    track_element::TrackElement,
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, chain_group, paint_sprites, sprite, SpriteGroup, SpriteTable},
    util::{
        block_all_segments, remap, wooden_a_supports_flat, MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL,
        MAP_REVERSED_DIAGONAL, TUNNEL_GROUP,
    },
};

static LEFT_EIGHTH_TO_DIAG_SPRITES: SpriteTable<5> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[sprite!(1, (0, 0, 0), (32, 16, 3))],
        &[sprite!(2, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(3, (16, 16, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
        &[sprite!(5, (0, 16, 0), (32, 16, 3))],
        &[sprite!(6, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(7, (16, 0, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(8, (0, 6, 0), (32, 20, 3))],
        &[sprite!(9, (0, 16, 0), (32, 16, 3))],
        &[sprite!(10, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(11, (0, 0, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(12, (0, 6, 0), (32, 20, 3))],
        &[sprite!(13, (0, 0, 0), (32, 16, 3))],
        &[sprite!(14, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(15, (0, 16, 0), (16, 16, 3))],
    ],
];

static RIGHT_EIGHTH_TO_DIAG_SPRITES: SpriteTable<5> = [
    [
        &[sprite!(16, (0, 6, 0), (32, 20, 3))],
        &[sprite!(17, (0, 16, 0), (32, 16, 3))],
        &[sprite!(18, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(19, (16, 0, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(20, (0, 6, 0), (32, 20, 3))],
        &[sprite!(21, (0, 0, 0), (32, 16, 3))],
        &[sprite!(22, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(23, (16, 16, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(24, (0, 6, 0), (32, 20, 3))],
        &[sprite!(25, (0, 0, 0), (32, 16, 3))],
        &[sprite!(26, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(27, (0, 16, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(28, (0, 6, 0), (32, 20, 3))],
        &[sprite!(29, (0, 16, 0), (32, 16, 3))],
        &[sprite!(30, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(31, (0, 0, 0), (16, 16, 3))],
    ],
];

static LEFT_EIGHTH_BANK_TO_DIAG_SPRITES: SpriteTable<5> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(2, (0, 0, 0), (32, 16, 3))],
        &[sprite!(3, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(4, (16, 16, 0), (16, 16, 3))],
    ],
    [
        &[
            sprite!(5, (0, 6, 0), (32, 20, 3)),
            sprite!(6, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(7, (0, 16, 0), (32, 16, 3))],
        &[sprite!(8, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(9, (16, 0, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(10, (0, 6, 0), (32, 20, 3))],
        &[sprite!(11, (0, 16, 0), (32, 16, 3))],
        &[sprite!(12, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(13, (0, 0, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(14, (0, 6, 0), (32, 20, 3))],
        &[sprite!(15, (0, 0, 0), (32, 16, 3))],
        &[sprite!(16, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(17, (0, 16, 0), (16, 16, 3))],
    ],
];

static RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES: SpriteTable<5> = [
    [
        &[sprite!(18, (0, 6, 0), (32, 20, 3))],
        &[sprite!(19, (0, 16, 0), (32, 16, 3))],
        &[sprite!(20, (0, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(21, (16, 0, 0), (16, 16, 3))],
    ],
    [
        &[sprite!(22, (0, 6, 0), (32, 20, 3))],
        &[sprite!(23, (0, 0, 0), (32, 16, 3))],
        &[sprite!(24, (16, 0, 0), (16, 16, 3))],
        &[],
        &[sprite!(25, (16, 16, 0), (16, 16, 3))],
    ],
    [
        &[
            sprite!(26, (0, 6, 0), (32, 20, 3)),
            sprite!(27, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(28, (0, 0, 0), (32, 16, 3))],
        &[sprite!(29, (16, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(30, (0, 16, 0), (16, 16, 3))],
    ],
    [
        &[
            sprite!(31, (0, 6, 0), (32, 20, 3)),
            sprite!(32, (0, 27, 0), (32, 1, 26)),
        ],
        &[sprite!(33, (0, 16, 0), (32, 16, 3))],
        &[sprite!(34, (0, 16, 0), (16, 16, 3))],
        &[],
        &[sprite!(35, (0, 0, 0), (16, 16, 3))],
    ],
];

static DIAG_FLAT_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(0, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(1, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(2, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(3, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_UP_25_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(0, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(1, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(2, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(3, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_UP_60_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(4, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(5, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(6, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(7, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_FLAT_TO_UP_25_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(8, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(9, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(10, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(11, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_UP_25_TO_UP_60_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(12, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(13, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(14, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(15, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_UP_60_TO_UP_25_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(16, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(17, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(18, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(19, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_UP_25_TO_FLAT_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[sprite!(20, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(21, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(22, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[sprite!(23, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
        &[],
        &[],
    ],
];

static DIAG_FLAT_TO_LEFT_BANK_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[
            sprite!(0, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0)),
            sprite!(1, (-16, -16, 27), (32, 32, 0), origin: (-16, -16, 0)),
        ],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(2, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(3, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[
            sprite!(4, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0)),
            sprite!(5, (-16, -16, 27), (32, 32, 0), origin: (-16, -16, 0)),
        ],
        &[],
        &[],
        &[],
    ],
];

static DIAG_FLAT_TO_RIGHT_BANK_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[
            sprite!(6, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0)),
            sprite!(7, (-16, -16, 27), (32, 32, 0), origin: (-16, -16, 0)),
        ],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(8, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(9, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[
            sprite!(10, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0)),
            sprite!(11, (-16, -16, 27), (32, 32, 0), origin: (-16, -16, 0)),
        ],
        &[],
        &[],
        &[],
    ],
];

static DIAG_LEFT_BANK_SPRITES: SpriteTable<4> = [
    [
        &[],
        &[
            sprite!(12, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0)),
            sprite!(13, (-16, -16, 27), (32, 32, 0), origin: (-16, -16, 0)),
        ],
        &[],
        &[],
    ],
    [
        &[],
        &[],
        &[],
        &[sprite!(14, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
    ],
    [
        &[],
        &[],
        &[sprite!(15, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0))],
        &[],
    ],
    [
        &[
            sprite!(16, (-16, -16, 0), (32, 32, 3), origin: (-16, -16, 0)),
            sprite!(17, (-16, -16, 27), (32, 32, 0), origin: (-16, -16, 0)),
        ],
        &[],
        &[],
        &[],
    ],
];

/// Support footprint of each eighth-turn tile; the last tile sits on the
/// diagonal and has none of its own.
const LEFT_EIGHTH_SUPPORTS: [Option<Sub>; 5] =
    [Some(Sub::NeSw), Some(Sub::NeSw), Some(Sub::Corner1), Some(Sub::Corner3), None];
const RIGHT_EIGHTH_SUPPORTS: [Option<Sub>; 5] =
    [Some(Sub::NeSw), Some(Sub::NeSw), Some(Sub::Corner0), Some(Sub::Corner2), None];

fn paint_eighth_to_diag(
    session: &mut dyn PaintSession,
    ride: &Ride,
    group: SpriteGroup,
    table: &SpriteTable<5>,
    supports: &[Option<Sub>; 5],
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    let Some(support) = supports.get(track_sequence as usize) else {
        return;
    };
    paint_sprites(session, group, table, track_sequence, direction, height);
    if let Some(sub_type) = *support {
        wooden_a_supports_flat(session, ride, sub_type, direction, height);
    }
    if track_sequence == 0 && (direction.value() == 0 || direction.value() == 3) {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    }
    block_all_segments(session);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn left_eighth_to_diag(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_eighth_to_diag(
        session,
        ride,
        sprites::EIGHTH_TO_DIAG,
        &LEFT_EIGHTH_TO_DIAG_SPRITES,
        &LEFT_EIGHTH_SUPPORTS,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn right_eighth_to_diag(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_eighth_to_diag(
        session,
        ride,
        sprites::EIGHTH_TO_DIAG,
        &RIGHT_EIGHTH_TO_DIAG_SPRITES,
        &RIGHT_EIGHTH_SUPPORTS,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn left_eighth_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, track_sequence) {
        right_eighth_to_diag(session, ride, sequence, direction.reverse(), height, track_element);
    }
}

pub(crate) fn right_eighth_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, track_sequence) {
        left_eighth_to_diag(session, ride, sequence, direction.rotate(3), height, track_element);
    }
}

pub(crate) fn left_eighth_bank_to_diag(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_eighth_to_diag(
        session,
        ride,
        sprites::EIGHTH_BANK_TO_DIAG,
        &LEFT_EIGHTH_BANK_TO_DIAG_SPRITES,
        &LEFT_EIGHTH_SUPPORTS,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn right_eighth_bank_to_diag(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_eighth_to_diag(
        session,
        ride,
        sprites::EIGHTH_BANK_TO_DIAG,
        &RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES,
        &RIGHT_EIGHTH_SUPPORTS,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn left_eighth_bank_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, track_sequence) {
        right_eighth_bank_to_diag(session, ride, sequence, direction.reverse(), height, track_element);
    }
}

pub(crate) fn right_eighth_bank_to_orthogonal(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL, track_sequence) {
        left_eighth_bank_to_diag(session, ride, sequence, direction.rotate(3), height, track_element);
    }
}

/// Support corner under each of the four diagonal tiles, direction-0 frame
/// Only the two side tiles of a diagonal have ground under the track; the
/// end tiles are shared with the neighbouring pieces.
const DIAG_SUPPORTS: [Option<Sub>; 4] = [None, Some(Sub::Corner0), Some(Sub::Corner2), None];

struct DiagPiece {
    group: SpriteGroup,
    lift_group: SpriteGroup,
    sprites: &'static SpriteTable<4>,
    clearance: i32,
}

static DIAG_FLAT: DiagPiece = DiagPiece {
    group: sprites::DIAG_FLAT,
    lift_group: sprites::DIAG_FLAT_LIFT,
    sprites: &DIAG_FLAT_SPRITES,
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

static DIAG_UP_25: DiagPiece = DiagPiece {
    group: sprites::DIAG_SLOPE,
    lift_group: sprites::DIAG_SLOPE_LIFT,
    sprites: &DIAG_UP_25_SPRITES,
    clearance: 56,
};

static DIAG_UP_60: DiagPiece = DiagPiece {
    group: sprites::DIAG_SLOPE,
    lift_group: sprites::DIAG_SLOPE_LIFT,
    sprites: &DIAG_UP_60_SPRITES,
    clearance: 104,
};

static DIAG_FLAT_TO_UP_25: DiagPiece = DiagPiece {
    group: sprites::DIAG_SLOPE,
    lift_group: sprites::DIAG_SLOPE_LIFT,
    sprites: &DIAG_FLAT_TO_UP_25_SPRITES,
    clearance: 48,
};

static DIAG_UP_25_TO_UP_60: DiagPiece = DiagPiece {
    group: sprites::DIAG_SLOPE,
    lift_group: sprites::DIAG_SLOPE_LIFT,
    sprites: &DIAG_UP_25_TO_UP_60_SPRITES,
    clearance: 72,
};

static DIAG_UP_60_TO_UP_25: DiagPiece = DiagPiece {
    group: sprites::DIAG_SLOPE,
    lift_group: sprites::DIAG_SLOPE_LIFT,
    sprites: &DIAG_UP_60_TO_UP_25_SPRITES,
    clearance: 72,
};

static DIAG_UP_25_TO_FLAT: DiagPiece = DiagPiece {
    group: sprites::DIAG_SLOPE,
    lift_group: sprites::DIAG_SLOPE_LIFT,
    sprites: &DIAG_UP_25_TO_FLAT_SPRITES,
    clearance: 40,
};

// Banked diagonals have no chain lift sprites.
static DIAG_FLAT_TO_LEFT_BANK: DiagPiece = DiagPiece {
    group: sprites::DIAG_BANK,
    lift_group: sprites::DIAG_BANK,
    sprites: &DIAG_FLAT_TO_LEFT_BANK_SPRITES,
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

static DIAG_FLAT_TO_RIGHT_BANK: DiagPiece = DiagPiece {
    group: sprites::DIAG_BANK,
    lift_group: sprites::DIAG_BANK,
    sprites: &DIAG_FLAT_TO_RIGHT_BANK_SPRITES,
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

static DIAG_LEFT_BANK: DiagPiece = DiagPiece {
    group: sprites::DIAG_BANK,
    lift_group: sprites::DIAG_BANK,
    sprites: &DIAG_LEFT_BANK_SPRITES,
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

fn paint_diag(
    session: &mut dyn PaintSession,
    ride: &Ride,
    piece: &DiagPiece,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    let Some(&support) = DIAG_SUPPORTS.get(track_sequence as usize) else {
        return;
    };
    let group = chain_group(track_element, piece.group, piece.lift_group);
    paint_sprites(session, group, piece.sprites, track_sequence, direction, height);
    if let Some(sub_type) = support {
        wooden_a_supports_flat(session, ride, sub_type, direction, height);
    }
    block_all_segments(session);
    session.set_general_support_height(height + piece.clearance);
}

/// Paints `piece` walked from its far end.
fn paint_diag_reversed(
    session: &mut dyn PaintSession,
    ride: &Ride,
    piece: &DiagPiece,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_REVERSED_DIAGONAL, track_sequence) {
        paint_diag(session, ride, piece, sequence, direction.reverse(), height, track_element);
    }
}

pub(crate) fn diag_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(session, ride, &DIAG_FLAT, track_sequence, direction, height, track_element);
}

pub(crate) fn diag_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(session, ride, &DIAG_UP_25, track_sequence, direction, height, track_element);
}

pub(crate) fn diag_up_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(session, ride, &DIAG_UP_60, track_sequence, direction, height, track_element);
}

pub(crate) fn diag_flat_to_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(
        session,
        ride,
        &DIAG_FLAT_TO_UP_25,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_up_25_to_up_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(
        session,
        ride,
        &DIAG_UP_25_TO_UP_60,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_up_60_to_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(
        session,
        ride,
        &DIAG_UP_60_TO_UP_25,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_up_25_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(
        session,
        ride,
        &DIAG_UP_25_TO_FLAT,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(session, ride, &DIAG_UP_25, track_sequence, direction, height, track_element);
}

pub(crate) fn diag_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(session, ride, &DIAG_UP_60, track_sequence, direction, height, track_element);
}

pub(crate) fn diag_flat_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_UP_25_TO_FLAT,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_down_25_to_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_UP_60_TO_UP_25,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_down_60_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_UP_25_TO_UP_60,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_down_25_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_FLAT_TO_UP_25,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_flat_to_left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(
        session,
        ride,
        &DIAG_FLAT_TO_LEFT_BANK,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_flat_to_right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(
        session,
        ride,
        &DIAG_FLAT_TO_RIGHT_BANK,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_left_bank_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_FLAT_TO_RIGHT_BANK,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_right_bank_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_FLAT_TO_LEFT_BANK,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn diag_left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag(session, ride, &DIAG_LEFT_BANK, track_sequence, direction, height, track_element);
}

pub(crate) fn diag_right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_diag_reversed(
        session,
        ride,
        &DIAG_LEFT_BANK,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        assert!(table_fits(&LEFT_EIGHTH_TO_DIAG_SPRITES, sprites::EIGHTH_TO_DIAG));
        assert!(table_fits(&RIGHT_EIGHTH_TO_DIAG_SPRITES, sprites::EIGHTH_TO_DIAG));
        assert!(table_fits(&LEFT_EIGHTH_BANK_TO_DIAG_SPRITES, sprites::EIGHTH_BANK_TO_DIAG));
        assert!(table_fits(&RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES, sprites::EIGHTH_BANK_TO_DIAG));
        for piece in [
            &DIAG_FLAT,
            &DIAG_UP_25,
            &DIAG_UP_60,
            &DIAG_FLAT_TO_UP_25,
            &DIAG_UP_25_TO_UP_60,
            &DIAG_UP_60_TO_UP_25,
            &DIAG_UP_25_TO_FLAT,
            &DIAG_FLAT_TO_LEFT_BANK,
            &DIAG_FLAT_TO_RIGHT_BANK,
            &DIAG_LEFT_BANK,
        ] {
            assert!(table_fits(piece.sprites, piece.group));
            assert!(table_fits(piece.sprites, piece.lift_group));
        }
    }

    #[test]
    fn exactly_one_diagonal_tile_draws_per_direction() {
        for direction in Direction::ALL {
            let drawn = DIAG_FLAT_SPRITES[direction.index()]
                .iter()
                .filter(|sprites| !sprites.is_empty())
                .count();
            assert_eq!(drawn, 1, "{:?}", direction);
        }
    }

    #[test]
    fn only_side_tiles_are_supported() {
        use crate::{recorder::PaintCommand, test_support::record_piece};
        use trackpaint_core::track_element::TrackElemType;

        for track_type in [TrackElemType::DiagFlat, TrackElemType::DiagDown25] {
            for direction in Direction::ALL {
                let supported: Vec<u8> = (0..4u8)
                    .filter(|&sequence| {
                        record_piece(track_type, sequence, direction, 64)
                            .unwrap_or_default()
                            .iter()
                            .any(|c| matches!(c, PaintCommand::Supports { .. }))
                    })
                    .collect();
                assert_eq!(supported, vec![1, 2], "{:?} {:?}", track_type, direction);
            }
        }
    }

    #[test]
    fn eighth_turn_ends_on_the_diagonal() {
        for direction in Direction::ALL {
            assert!(LEFT_EIGHTH_TO_DIAG_SPRITES[direction.index()][3].is_empty());
            assert!(RIGHT_EIGHTH_TO_DIAG_SPRITES[direction.index()][3].is_empty());
        }
    }
}
