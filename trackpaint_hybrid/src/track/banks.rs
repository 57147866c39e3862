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


//! Banked straight track and the transitions into and out of a bank, on the
//! flat and on gentle slopes.

use trackpaint_core::{
    constants::DEFAULT_GENERAL_SUPPORT_HEIGHT,
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    supports::{WoodenSupportSubType, WoodenSupportTransitionType as Transition},
    track_element::TrackElement,
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, paint_sprites, sprite, SpriteGroup, SpriteTable},
    util::{block_all_segments, straight_tunnel, wooden_a_supports},
};

static FLAT_TO_LEFT_BANK_SPRITES: SpriteTable<1> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(2, (0, 6, 0), (32, 20, 3)),
            sprite!(3, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(5, (0, 6, 0), (32, 20, 3))],
    ],
];

static FLAT_TO_RIGHT_BANK_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(6, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(7, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(8, (0, 6, 0), (32, 20, 3)),
            sprite!(9, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(10, (0, 6, 0), (32, 20, 3)),
            sprite!(11, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

static LEFT_BANK_SPRITES: SpriteTable<1> = [
    [
        &[
            sprite!(12, (0, 6, 0), (32, 20, 3)),
            sprite!(13, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(14, (0, 6, 0), (32, 20, 3)),
            sprite!(15, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[sprite!(16, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(17, (0, 6, 0), (32, 20, 3))],
    ],
];

static LEFT_BANK_TO_UP_25_SPRITES: SpriteTable<1> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(2, (0, 6, 0), (32, 20, 3)),
            sprite!(3, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(5, (0, 6, 0), (32, 20, 3))],
    ],
];

static RIGHT_BANK_TO_UP_25_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(6, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(7, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(8, (0, 6, 0), (32, 20, 3)),
            sprite!(9, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(10, (0, 6, 0), (32, 20, 3)),
            sprite!(11, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

static UP_25_TO_LEFT_BANK_SPRITES: SpriteTable<1> = [
    [
        &[
            sprite!(12, (0, 6, 0), (32, 20, 3)),
            sprite!(13, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(14, (0, 6, 0), (32, 20, 3)),
            sprite!(15, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[sprite!(16, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(17, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_25_TO_RIGHT_BANK_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(18, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(19, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(20, (0, 6, 0), (32, 20, 3)),
            sprite!(21, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(22, (0, 6, 0), (32, 20, 3)),
            sprite!(23, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

static UP_25_LEFT_BANKED_SPRITES: SpriteTable<1> = [
    [
        &[
            sprite!(24, (0, 6, 0), (32, 20, 3)),
            sprite!(25, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(26, (0, 6, 0), (32, 20, 3)),
            sprite!(27, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[sprite!(28, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(29, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_25_RIGHT_BANKED_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(30, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(31, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(32, (0, 6, 0), (32, 20, 3)),
            sprite!(33, (0, 27, 0), (32, 1, 26)),
        ],
    ],
    [
        &[
            sprite!(34, (0, 6, 0), (32, 20, 3)),
            sprite!(35, (0, 27, 0), (32, 1, 26)),
        ],
    ],
];

struct BankPiece {
    group: SpriteGroup,
    sprites: &'static SpriteTable<1>,
    transition: Transition,
    tunnel_start: (i32, TunnelSubType),
    tunnel_end: (i32, TunnelSubType),
    clearance: i32,
}

const FLAT_TUNNELS: [(i32, TunnelSubType); 2] = [(0, TunnelSubType::Flat), (0, TunnelSubType::Flat)];
const TO_UP_25_TUNNELS: [(i32, TunnelSubType); 2] =
    [(0, TunnelSubType::Flat), (0, TunnelSubType::SlopeEnd)];
const FROM_UP_25_TUNNELS: [(i32, TunnelSubType); 2] =
    [(-8, TunnelSubType::Flat), (8, TunnelSubType::FlatTo25Deg)];
const UP_25_TUNNELS: [(i32, TunnelSubType); 2] =
    [(-8, TunnelSubType::SlopeStart), (8, TunnelSubType::SlopeEnd)];

static FLAT_TO_LEFT_BANK: BankPiece = BankPiece {
    group: sprites::BANK,
    sprites: &FLAT_TO_LEFT_BANK_SPRITES,
    transition: Transition::None,
    tunnel_start: FLAT_TUNNELS[0],
    tunnel_end: FLAT_TUNNELS[1],
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

static FLAT_TO_RIGHT_BANK: BankPiece = BankPiece {
    group: sprites::BANK,
    sprites: &FLAT_TO_RIGHT_BANK_SPRITES,
    transition: Transition::None,
    tunnel_start: FLAT_TUNNELS[0],
    tunnel_end: FLAT_TUNNELS[1],
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

static LEFT_BANK: BankPiece = BankPiece {
    group: sprites::BANK,
    sprites: &LEFT_BANK_SPRITES,
    transition: Transition::None,
    tunnel_start: FLAT_TUNNELS[0],
    tunnel_end: FLAT_TUNNELS[1],
    clearance: DEFAULT_GENERAL_SUPPORT_HEIGHT,
};

static LEFT_BANK_TO_UP_25: BankPiece = BankPiece {
    group: sprites::BANK_SLOPE,
    sprites: &LEFT_BANK_TO_UP_25_SPRITES,
    transition: Transition::FlatToUp25,
    tunnel_start: TO_UP_25_TUNNELS[0],
    tunnel_end: TO_UP_25_TUNNELS[1],
    clearance: 48,
};

static RIGHT_BANK_TO_UP_25: BankPiece = BankPiece {
    group: sprites::BANK_SLOPE,
    sprites: &RIGHT_BANK_TO_UP_25_SPRITES,
    transition: Transition::FlatToUp25,
    tunnel_start: TO_UP_25_TUNNELS[0],
    tunnel_end: TO_UP_25_TUNNELS[1],
    clearance: 48,
};

static UP_25_TO_LEFT_BANK: BankPiece = BankPiece {
    group: sprites::BANK_SLOPE,
    sprites: &UP_25_TO_LEFT_BANK_SPRITES,
    transition: Transition::Up25ToFlat,
    tunnel_start: FROM_UP_25_TUNNELS[0],
    tunnel_end: FROM_UP_25_TUNNELS[1],
    clearance: 40,
};

static UP_25_TO_RIGHT_BANK: BankPiece = BankPiece {
    group: sprites::BANK_SLOPE,
    sprites: &UP_25_TO_RIGHT_BANK_SPRITES,
    transition: Transition::Up25ToFlat,
    tunnel_start: FROM_UP_25_TUNNELS[0],
    tunnel_end: FROM_UP_25_TUNNELS[1],
    clearance: 40,
};

static UP_25_LEFT_BANKED: BankPiece = BankPiece {
    group: sprites::BANK_SLOPE,
    sprites: &UP_25_LEFT_BANKED_SPRITES,
    transition: Transition::Up25,
    tunnel_start: UP_25_TUNNELS[0],
    tunnel_end: UP_25_TUNNELS[1],
    clearance: 56,
};

static UP_25_RIGHT_BANKED: BankPiece = BankPiece {
    group: sprites::BANK_SLOPE,
    sprites: &UP_25_RIGHT_BANKED_SPRITES,
    transition: Transition::Up25,
    tunnel_start: UP_25_TUNNELS[0],
    tunnel_end: UP_25_TUNNELS[1],
    clearance: 56,
};

fn paint_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    piece: &BankPiece,
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    if track_sequence != 0 {
        return;
    }
    paint_sprites(session, piece.group, piece.sprites, track_sequence, direction, height);
    wooden_a_supports(
        session,
        ride,
        WoodenSupportSubType::NeSw,
        direction,
        height,
        piece.transition,
    );
    straight_tunnel(
        session,
        direction,
        (height + piece.tunnel_start.0, piece.tunnel_start.1),
        (height + piece.tunnel_end.0, piece.tunnel_end.1),
    );
    block_all_segments(session);
    session.set_general_support_height(height + piece.clearance);
}

pub(crate) fn flat_to_left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &FLAT_TO_LEFT_BANK, track_sequence, direction, height);
}

pub(crate) fn flat_to_right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &FLAT_TO_RIGHT_BANK, track_sequence, direction, height);
}

pub(crate) fn left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &LEFT_BANK, track_sequence, direction, height);
}

pub(crate) fn left_bank_to_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &LEFT_BANK_TO_UP_25, track_sequence, direction, height);
}

pub(crate) fn right_bank_to_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &RIGHT_BANK_TO_UP_25, track_sequence, direction, height);
}

pub(crate) fn up_25_to_left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &UP_25_TO_LEFT_BANK, track_sequence, direction, height);
}

pub(crate) fn up_25_to_right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &UP_25_TO_RIGHT_BANK, track_sequence, direction, height);
}

pub(crate) fn up_25_left_banked(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &UP_25_LEFT_BANKED, track_sequence, direction, height);
}

pub(crate) fn up_25_right_banked(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_bank(session, ride, &UP_25_RIGHT_BANKED, track_sequence, direction, height);
}

pub(crate) fn left_bank_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    flat_to_right_bank(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn right_bank_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    flat_to_left_bank(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    left_bank(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn left_bank_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25_to_right_bank(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn right_bank_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25_to_left_bank(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_25_to_left_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    right_bank_to_up_25(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_25_to_right_bank(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    left_bank_to_up_25(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_25_left_banked(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25_right_banked(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_25_right_banked(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25_left_banked(session, ride, track_sequence, direction.reverse(), height, track_element);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        for piece in [
            &FLAT_TO_LEFT_BANK,
            &FLAT_TO_RIGHT_BANK,
            &LEFT_BANK,
            &LEFT_BANK_TO_UP_25,
            &RIGHT_BANK_TO_UP_25,
            &UP_25_TO_LEFT_BANK,
            &UP_25_TO_RIGHT_BANK,
            &UP_25_LEFT_BANKED,
            &UP_25_RIGHT_BANKED,
        ] {
            assert!(table_fits(piece.sprites, piece.group));
        }
    }
}
