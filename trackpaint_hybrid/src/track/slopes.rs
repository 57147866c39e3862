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


//! Gentle (25 degree) and steep (60 degree) slopes and the transitions
//! between them. Every down piece is the matching up piece seen from the
//! other end.

use trackpaint_core::{
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    supports::{WoodenSupportSubType, WoodenSupportTransitionType as Transition},
    track_element::TrackElement,
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, chain_group, paint_sprites, sprite, SpriteTable},
    util::{block_all_segments, straight_tunnel, wooden_a_supports},
};

static UP_25_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(1, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(2, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(3, (0, 6, 0), (32, 20, 3))],
    ],
];

static FLAT_TO_UP_25_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(4, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(5, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(6, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(7, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_25_TO_FLAT_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(8, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(9, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(10, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(11, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_25_TO_UP_60_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(12, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(13, (0, 6, 0), (32, 20, 3)),
            sprite!(14, (0, 27, 0), (32, 1, 66)),
        ],
    ],
    [
        &[
            sprite!(15, (0, 6, 0), (32, 20, 3)),
            sprite!(16, (0, 27, 0), (32, 1, 66)),
        ],
    ],
    [
        &[sprite!(17, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_60_TO_UP_25_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(18, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(19, (0, 6, 0), (32, 20, 3)),
            sprite!(20, (0, 27, 0), (32, 1, 66)),
        ],
    ],
    [
        &[
            sprite!(21, (0, 6, 0), (32, 20, 3)),
            sprite!(22, (0, 27, 0), (32, 1, 66)),
        ],
    ],
    [
        &[sprite!(23, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_60_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(24, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(25, (0, 6, 0), (32, 20, 3)),
            sprite!(26, (0, 27, 0), (32, 1, 98)),
        ],
    ],
    [
        &[
            sprite!(27, (0, 6, 0), (32, 20, 3)),
            sprite!(28, (0, 27, 0), (32, 1, 98)),
        ],
    ],
    [
        &[sprite!(29, (0, 6, 0), (32, 20, 3))],
    ],
];

static FLAT_TO_UP_60_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(30, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(31, (0, 6, 0), (32, 20, 3)),
            sprite!(32, (0, 27, 0), (32, 1, 43)),
        ],
    ],
    [
        &[
            sprite!(33, (0, 6, 0), (32, 20, 3)),
            sprite!(34, (0, 27, 0), (32, 1, 43)),
        ],
    ],
    [
        &[sprite!(35, (0, 6, 0), (32, 20, 3))],
    ],
];

static UP_60_TO_FLAT_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(36, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[
            sprite!(37, (0, 6, 0), (32, 20, 3)),
            sprite!(38, (0, 27, 0), (32, 1, 43)),
        ],
    ],
    [
        &[
            sprite!(39, (0, 6, 0), (32, 20, 3)),
            sprite!(40, (0, 27, 0), (32, 1, 43)),
        ],
    ],
    [
        &[sprite!(41, (0, 6, 0), (32, 20, 3))],
    ],
];

/// Everything that distinguishes one single-tile slope from another.
///
/// Tunnel heights and the clearance are relative to the piece's base height.
struct SlopePiece {
    sprites: &'static SpriteTable<1>,
    transition: Transition,
    tunnel_start: (i32, TunnelSubType),
    tunnel_end: (i32, TunnelSubType),
    clearance: i32,
    /// Steep pieces sort their supports behind the track sprite
    prepend_supports: bool,
}

static UP_25: SlopePiece = SlopePiece {
    sprites: &UP_25_SPRITES,
    transition: Transition::Up25,
    tunnel_start: (-8, TunnelSubType::SlopeStart),
    tunnel_end: (8, TunnelSubType::SlopeEnd),
    clearance: 56,
    prepend_supports: false,
};

static UP_60: SlopePiece = SlopePiece {
    sprites: &UP_60_SPRITES,
    transition: Transition::Up60,
    tunnel_start: (-8, TunnelSubType::SlopeStart),
    tunnel_end: (56, TunnelSubType::SlopeEnd),
    clearance: 104,
    prepend_supports: true,
};

static FLAT_TO_UP_25: SlopePiece = SlopePiece {
    sprites: &FLAT_TO_UP_25_SPRITES,
    transition: Transition::FlatToUp25,
    tunnel_start: (0, TunnelSubType::Flat),
    tunnel_end: (0, TunnelSubType::SlopeEnd),
    clearance: 48,
    prepend_supports: false,
};

static UP_25_TO_UP_60: SlopePiece = SlopePiece {
    sprites: &UP_25_TO_UP_60_SPRITES,
    transition: Transition::Up25ToUp60,
    tunnel_start: (-8, TunnelSubType::SlopeStart),
    tunnel_end: (24, TunnelSubType::SlopeEnd),
    clearance: 72,
    prepend_supports: true,
};

static UP_60_TO_UP_25: SlopePiece = SlopePiece {
    sprites: &UP_60_TO_UP_25_SPRITES,
    transition: Transition::Up60ToUp25,
    tunnel_start: (-8, TunnelSubType::SlopeStart),
    tunnel_end: (24, TunnelSubType::SlopeEnd),
    clearance: 72,
    prepend_supports: true,
};

static UP_25_TO_FLAT: SlopePiece = SlopePiece {
    sprites: &UP_25_TO_FLAT_SPRITES,
    transition: Transition::Up25ToFlat,
    tunnel_start: (-8, TunnelSubType::Flat),
    tunnel_end: (8, TunnelSubType::FlatTo25Deg),
    clearance: 40,
    prepend_supports: false,
};

static FLAT_TO_UP_60: SlopePiece = SlopePiece {
    sprites: &FLAT_TO_UP_60_SPRITES,
    transition: Transition::FlatToUp60,
    tunnel_start: (0, TunnelSubType::Flat),
    tunnel_end: (24, TunnelSubType::SlopeEnd),
    clearance: 64,
    prepend_supports: true,
};

static UP_60_TO_FLAT: SlopePiece = SlopePiece {
    sprites: &UP_60_TO_FLAT_SPRITES,
    transition: Transition::Up60ToFlat,
    tunnel_start: (-8, TunnelSubType::SlopeStart),
    tunnel_end: (24, TunnelSubType::Flat),
    clearance: 72,
    prepend_supports: true,
};

fn paint_slope(
    session: &mut dyn PaintSession,
    ride: &Ride,
    piece: &SlopePiece,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    let group = chain_group(track_element, sprites::SLOPE, sprites::SLOPE_LIFT);
    let handle = paint_sprites(session, group, piece.sprites, track_sequence, direction, height);
    if piece.prepend_supports {
        session.set_wooden_supports_prepend_to(handle);
    }
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

pub(crate) fn up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(session, ride, &UP_25, track_sequence, direction, height, track_element);
}

pub(crate) fn up_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(session, ride, &UP_60, track_sequence, direction, height, track_element);
}

pub(crate) fn flat_to_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(
        session,
        ride,
        &FLAT_TO_UP_25,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn up_25_to_up_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(
        session,
        ride,
        &UP_25_TO_UP_60,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn up_60_to_up_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(
        session,
        ride,
        &UP_60_TO_UP_25,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn up_25_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(
        session,
        ride,
        &UP_25_TO_FLAT,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn flat_to_up_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(
        session,
        ride,
        &FLAT_TO_UP_60,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn up_60_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    paint_slope(
        session,
        ride,
        &UP_60_TO_FLAT,
        track_sequence,
        direction,
        height,
        track_element,
    );
}

pub(crate) fn down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_60(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn flat_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25_to_flat(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_25_to_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_60_to_up_25(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_60_to_down_25(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_25_to_up_60(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_25_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    flat_to_up_25(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn flat_to_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_60_to_flat(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_60_to_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    flat_to_up_60(session, ride, track_sequence, direction.reverse(), height, track_element);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        for piece in [
            &UP_25,
            &UP_60,
            &FLAT_TO_UP_25,
            &UP_25_TO_UP_60,
            &UP_60_TO_UP_25,
            &UP_25_TO_FLAT,
            &FLAT_TO_UP_60,
            &UP_60_TO_FLAT,
        ] {
            assert!(table_fits(piece.sprites, sprites::SLOPE));
            assert!(table_fits(piece.sprites, sprites::SLOPE_LIFT));
        }
    }

    #[test]
    fn steeper_pieces_need_more_clearance() {
        assert!(UP_60.clearance > UP_25_TO_UP_60.clearance);
        assert!(UP_25_TO_UP_60.clearance > UP_25.clearance);
        assert!(UP_25.clearance > FLAT_TO_UP_25.clearance);
        assert!(FLAT_TO_UP_25.clearance > UP_25_TO_FLAT.clearance);
    }
}
