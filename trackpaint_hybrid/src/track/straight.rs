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


//! Flat straight track, stations and the block sections that sit on them.

use trackpaint_core::{
    constants::DEFAULT_GENERAL_SUPPORT_HEIGHT,
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    supports::WoodenSupportSubType,
    track_element::{TrackElemType, TrackElement},
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, chain_group, paint_sprites, sprite, SpriteGroup, SpriteTable},
    util::{block_all_segments, wooden_a_supports_flat, TUNNEL_GROUP},
};

static FLAT_SPRITES: SpriteTable<1> = [
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

static STATION_SPRITES: SpriteTable<1> = [
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

static END_STATION_SPRITES: SpriteTable<1> = [
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

static BRAKES_SPRITES: SpriteTable<1> = [
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

static BLOCK_BRAKES_OPEN_SPRITES: SpriteTable<1> = [
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

static BLOCK_BRAKES_CLOSED_SPRITES: SpriteTable<1> = [
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

static BOOSTER_SPRITES: SpriteTable<1> = [
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

/// Supports, tunnel and clearances shared by every flat single-tile piece.
fn flat_surroundings(
    session: &mut dyn PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
) {
    wooden_a_supports_flat(session, ride, WoodenSupportSubType::NeSw, direction, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_all_segments(session);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn paint_flat_piece(
    session: &mut dyn PaintSession,
    ride: &Ride,
    group: SpriteGroup,
    table: &SpriteTable<1>,
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    if track_sequence != 0 {
        return;
    }
    paint_sprites(session, group, table, track_sequence, direction, height);
    flat_surroundings(session, ride, direction, height);
}

pub(crate) fn flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    let group = chain_group(track_element, sprites::FLAT, sprites::FLAT_LIFT);
    paint_flat_piece(
        session,
        ride,
        group,
        &FLAT_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

/// Begin, middle and end station tiles. The platforms themselves come from the
/// session; this draws the track and its clearances.
pub(crate) fn station(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    let table = if track_element.track_type() == TrackElemType::EndStation {
        &END_STATION_SPRITES
    } else {
        &STATION_SPRITES
    };
    paint_sprites(session, sprites::STATION, table, track_sequence, direction, height);
    wooden_a_supports_flat(session, ride, WoodenSupportSubType::NeSw, direction, height);
    session.draw_station(ride, direction, height, track_element);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_all_segments(session);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn brakes(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_flat_piece(
        session,
        ride,
        sprites::BRAKES,
        &BRAKES_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn block_brakes(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    let table = if track_element.is_brake_closed() {
        &BLOCK_BRAKES_CLOSED_SPRITES
    } else {
        &BLOCK_BRAKES_OPEN_SPRITES
    };
    paint_flat_piece(
        session,
        ride,
        sprites::BLOCK_BRAKES,
        table,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn booster(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_flat_piece(
        session,
        ride,
        sprites::BOOSTER,
        &BOOSTER_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

/// Flat track with the photo camera beside it. The camera pole needs more
/// clearance than plain track.
pub(crate) fn on_ride_photo(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    paint_sprites(session, sprites::FLAT, &FLAT_SPRITES, track_sequence, direction, height);
    wooden_a_supports_flat(session, ride, WoodenSupportSubType::NeSw, direction, height);
    session.draw_on_ride_photo(direction, height, track_element);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_all_segments(session);
    session.set_general_support_height(height + 48);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        assert!(table_fits(&FLAT_SPRITES, sprites::FLAT));
        assert!(table_fits(&FLAT_SPRITES, sprites::FLAT_LIFT));
        assert!(table_fits(&STATION_SPRITES, sprites::STATION));
        assert!(table_fits(&END_STATION_SPRITES, sprites::STATION));
        assert!(table_fits(&BRAKES_SPRITES, sprites::BRAKES));
        assert!(table_fits(&BLOCK_BRAKES_OPEN_SPRITES, sprites::BLOCK_BRAKES));
        assert!(table_fits(&BLOCK_BRAKES_CLOSED_SPRITES, sprites::BLOCK_BRAKES));
        assert!(table_fits(&BOOSTER_SPRITES, sprites::BOOSTER));
    }

    #[test]
    fn end_station_uses_its_own_sprites() {
        assert_ne!(STATION_SPRITES[0][0][0].offset, END_STATION_SPRITES[0][0][0].offset);
    }
}
