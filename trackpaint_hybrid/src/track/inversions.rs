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


//! Barrel rolls. The track rolls over onto its back across three tiles,
//! drifting one half tile sideways.

use trackpaint_core::{
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    supports::WoodenSupportSubType,
    track_element::TrackElement,
    tunnels::{TunnelGroup, TunnelSubType},
};

use super::{
    sprites::{self, paint_sprites, sprite, SpriteTable},
    util::{block_all_segments, remap, wooden_a_supports_flat, MAP_REVERSED_BARREL_ROLL, TUNNEL_GROUP},
};

static LEFT_BARREL_ROLL_UP_TO_DOWN_SPRITES: SpriteTable<3> = [
    [
        &[
            sprite!(0, (0, 6, 0), (32, 20, 3)),
            sprite!(1, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(2, (0, 6, 0), (32, 26, 3)),
            sprite!(3, (0, 6, 44), (32, 26, 0)),
        ],
        &[
            sprite!(4, (0, 6, 0), (32, 20, 3)),
            sprite!(5, (0, 6, 40), (32, 20, 0)),
        ],
    ],
    [
        &[
            sprite!(6, (0, 6, 0), (32, 20, 3)),
            sprite!(7, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(8, (0, 6, 0), (32, 26, 3)),
            sprite!(9, (0, 6, 44), (32, 26, 0)),
        ],
        &[
            sprite!(10, (0, 6, 0), (32, 20, 3)),
            sprite!(11, (0, 6, 40), (32, 20, 0)),
        ],
    ],
    [
        &[
            sprite!(12, (0, 6, 0), (32, 20, 3)),
            sprite!(13, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(14, (0, 6, 0), (32, 26, 3)),
            sprite!(15, (0, 6, 44), (32, 26, 0)),
        ],
        &[
            sprite!(16, (0, 6, 0), (32, 20, 3)),
            sprite!(17, (0, 6, 40), (32, 20, 0)),
        ],
    ],
    [
        &[
            sprite!(18, (0, 6, 0), (32, 20, 3)),
            sprite!(19, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(20, (0, 6, 0), (32, 26, 3)),
            sprite!(21, (0, 6, 44), (32, 26, 0)),
        ],
        &[
            sprite!(22, (0, 6, 0), (32, 20, 3)),
            sprite!(23, (0, 6, 40), (32, 20, 0)),
        ],
    ],
];

static RIGHT_BARREL_ROLL_UP_TO_DOWN_SPRITES: SpriteTable<3> = [
    [
        &[
            sprite!(24, (0, 6, 0), (32, 20, 3)),
            sprite!(25, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(26, (0, 0, 0), (32, 26, 3)),
            sprite!(27, (0, 0, 44), (32, 26, 0)),
        ],
        &[
            sprite!(28, (0, 6, 0), (32, 20, 3)),
            sprite!(29, (0, 6, 40), (32, 20, 0)),
        ],
    ],
    [
        &[
            sprite!(30, (0, 6, 0), (32, 20, 3)),
            sprite!(31, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(32, (0, 0, 0), (32, 26, 3)),
            sprite!(33, (0, 0, 44), (32, 26, 0)),
        ],
        &[
            sprite!(34, (0, 6, 0), (32, 20, 3)),
            sprite!(35, (0, 6, 40), (32, 20, 0)),
        ],
    ],
    [
        &[
            sprite!(36, (0, 6, 0), (32, 20, 3)),
            sprite!(37, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(38, (0, 0, 0), (32, 26, 3)),
            sprite!(39, (0, 0, 44), (32, 26, 0)),
        ],
        &[
            sprite!(40, (0, 6, 0), (32, 20, 3)),
            sprite!(41, (0, 6, 40), (32, 20, 0)),
        ],
    ],
    [
        &[
            sprite!(42, (0, 6, 0), (32, 20, 3)),
            sprite!(43, (0, 6, 28), (32, 20, 0)),
        ],
        &[
            sprite!(44, (0, 0, 0), (32, 26, 3)),
            sprite!(45, (0, 0, 44), (32, 26, 0)),
        ],
        &[
            sprite!(46, (0, 6, 0), (32, 20, 3)),
            sprite!(47, (0, 6, 40), (32, 20, 0)),
        ],
    ],
];

const BARREL_ROLL_CLEARANCE: [i32; 3] = [48, 64, 56];

fn paint_barrel_roll_up_to_down(
    session: &mut dyn PaintSession,
    ride: &Ride,
    table: &SpriteTable<3>,
    track_sequence: u8,
    direction: Direction,
    height: i32,
) {
    let Some(clearance) = BARREL_ROLL_CLEARANCE.get(track_sequence as usize) else {
        return;
    };
    paint_sprites(
        session,
        sprites::BARREL_ROLL,
        table,
        track_sequence,
        direction,
        height,
    );
    match (track_sequence, direction.value()) {
        (0, d) => {
            wooden_a_supports_flat(session, ride, WoodenSupportSubType::NeSw, direction, height);
            if d == 0 || d == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
        }
        (2, 1 | 2) => {
            session.push_tunnel_rotated(direction, height, TunnelGroup::Inverted, TunnelSubType::Flat);
        }
        _ => {}
    }
    block_all_segments(session);
    session.set_general_support_height(height + clearance);
}

pub(crate) fn left_barrel_roll_up_to_down(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_barrel_roll_up_to_down(
        session,
        ride,
        &LEFT_BARREL_ROLL_UP_TO_DOWN_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

pub(crate) fn right_barrel_roll_up_to_down(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    paint_barrel_roll_up_to_down(
        session,
        ride,
        &RIGHT_BARREL_ROLL_UP_TO_DOWN_SPRITES,
        track_sequence,
        direction,
        height,
    );
}

/// Rolling back upright is the opposite-handed roll ridden from its far end.
pub(crate) fn left_barrel_roll_down_to_up(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_REVERSED_BARREL_ROLL, track_sequence) {
        right_barrel_roll_up_to_down(session, ride, sequence, direction.reverse(), height, track_element);
    }
}

pub(crate) fn right_barrel_roll_down_to_up(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    if let Some(sequence) = remap(&MAP_REVERSED_BARREL_ROLL, track_sequence) {
        left_barrel_roll_up_to_down(session, ride, sequence, direction.reverse(), height, track_element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::sprites::table_fits;

    #[test]
    fn tables_fit_their_groups() {
        assert!(table_fits(&LEFT_BARREL_ROLL_UP_TO_DOWN_SPRITES, sprites::BARREL_ROLL));
        assert!(table_fits(&RIGHT_BARREL_ROLL_UP_TO_DOWN_SPRITES, sprites::BARREL_ROLL));
    }

    #[test]
    fn every_roll_tile_draws() {
        for direction in Direction::ALL {
            for sequence in 0..3 {
                assert!(!LEFT_BARREL_ROLL_UP_TO_DOWN_SPRITES[direction.index()][sequence].is_empty());
            }
        }
    }
}
