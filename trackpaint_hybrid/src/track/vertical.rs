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


//! Vertical track and the steep-to-vertical transitions. The two-tile pieces
//! only draw on their first tile; the second tile is the shaft above it.

use trackpaint_core::{
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    supports::{WoodenSupportSubType, WoodenSupportTransitionType},
    track_element::TrackElement,
    tunnels::TunnelSubType,
};

use super::{
    sprites::{self, paint_sprites, sprite, SpriteTable},
    util::{block_all_segments, wooden_a_supports, TUNNEL_GROUP},
};

static UP_60_TO_UP_90_SPRITES: SpriteTable<2> = [
    [
        &[sprite!(0, (0, 6, 0), (32, 20, 3))],
        &[],
    ],
    [
        &[sprite!(1, (24, 6, 0), (2, 20, 55))],
        &[],
    ],
    [
        &[sprite!(2, (24, 6, 0), (2, 20, 55))],
        &[],
    ],
    [
        &[sprite!(3, (0, 6, 0), (32, 20, 3))],
        &[],
    ],
];

static UP_90_SPRITES: SpriteTable<2> = [
    [
        &[sprite!(4, (4, 6, 8), (2, 20, 31))],
        &[],
    ],
    [
        &[sprite!(5, (4, 6, 8), (2, 20, 31))],
        &[],
    ],
    [
        &[sprite!(6, (4, 6, 8), (2, 20, 31))],
        &[],
    ],
    [
        &[sprite!(7, (4, 6, 8), (2, 20, 31))],
        &[],
    ],
];

static UP_90_TO_UP_60_SPRITES: SpriteTable<1> = [
    [
        &[sprite!(8, (0, 6, 0), (32, 20, 3))],
    ],
    [
        &[sprite!(9, (24, 6, 0), (2, 20, 55))],
    ],
    [
        &[sprite!(10, (24, 6, 0), (2, 20, 55))],
    ],
    [
        &[sprite!(11, (0, 6, 0), (32, 20, 3))],
    ],
];

#[inline]
fn enters_from_camera_side(direction: Direction) -> bool {
    direction.value() == 0 || direction.value() == 3
}

pub(crate) fn up_60_to_up_90(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    let handle = paint_sprites(
        session,
        sprites::VERTICAL,
        &UP_60_TO_UP_90_SPRITES,
        track_sequence,
        direction,
        height,
    );
    session.set_wooden_supports_prepend_to(handle);
    wooden_a_supports(
        session,
        ride,
        WoodenSupportSubType::NeSw,
        direction,
        height,
        WoodenSupportTransitionType::Up60,
    );
    if enters_from_camera_side(direction) {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart);
    }
    session.set_vertical_tunnel(height + 56);
    block_all_segments(session);
    session.set_general_support_height(height + 56);
}

pub(crate) fn up_90(
    session: &mut dyn PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    paint_sprites(
        session,
        sprites::VERTICAL,
        &UP_90_SPRITES,
        track_sequence,
        direction,
        height,
    );
    session.set_vertical_tunnel(height + 32);
    block_all_segments(session);
    session.set_general_support_height(height + 32);
}

pub(crate) fn up_90_to_up_60(
    session: &mut dyn PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    paint_sprites(
        session,
        sprites::VERTICAL,
        &UP_90_TO_UP_60_SPRITES,
        track_sequence,
        direction,
        height,
    );
    if !enters_from_camera_side(direction) {
        session.push_tunnel_rotated(direction, height + 48, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all_segments(session);
    session.set_general_support_height(height + 80);
}

pub(crate) fn down_90(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_90(session, ride, track_sequence, direction.reverse(), height, track_element);
}

pub(crate) fn down_90_to_down_60(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    track_element: &TrackElement,
) {
    up_60_to_up_90(session, ride, track_sequence, direction.reverse(), height, track_element);
}

/// The 90 to 60 sprites seen from the other end. Unlike a plain mirror, the
/// piece is entered from the steep end, so the tunnel sits on the near edges.
pub(crate) fn down_60_to_down_90(
    session: &mut dyn PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _track_element: &TrackElement,
) {
    if track_sequence != 0 {
        return;
    }
    paint_sprites(
        session,
        sprites::VERTICAL,
        &UP_90_TO_UP_60_SPRITES,
        track_sequence,
        direction.reverse(),
        height,
    );
    if enters_from_camera_side(direction) {
        session.push_tunnel_rotated(direction, height + 48, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all_segments(session);
    session.set_general_support_height(height + 80);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        recorder::{PaintCommand, RecordingSession},
        track::sprites::table_fits,
    };
    use trackpaint_core::track_element::TrackElemType;

    #[test]
    fn tables_fit_their_groups() {
        assert!(table_fits(&UP_60_TO_UP_90_SPRITES, sprites::VERTICAL));
        assert!(table_fits(&UP_90_SPRITES, sprites::VERTICAL));
        assert!(table_fits(&UP_90_TO_UP_60_SPRITES, sprites::VERTICAL));
    }

    fn paint(
        painter: fn(&mut dyn PaintSession, &Ride, u8, Direction, i32, &TrackElement),
        sequence: u8,
        direction: Direction,
    ) -> RecordingSession {
        let mut session = RecordingSession::new();
        painter(
            &mut session,
            &Ride::default(),
            sequence,
            direction,
            64,
            &TrackElement::new(TrackElemType::Flat),
        );
        session
    }

    fn supports(session: &RecordingSession) -> usize {
        session
            .commands()
            .iter()
            .filter(|c| matches!(c, PaintCommand::Supports { .. }))
            .count()
    }

    #[test]
    fn leaving_vertical_is_the_climb_into_it_reversed() {
        for direction in Direction::ALL {
            assert_eq!(
                paint(down_90_to_down_60, 0, direction).commands(),
                paint(up_60_to_up_90, 0, direction.reverse()).commands(),
                "{:?}",
                direction
            );
        }

        let session = paint(down_90_to_down_60, 0, Direction::NE);
        assert_eq!(supports(&session), 1);
        assert_eq!(session.vertical_tunnel_height(), Some(112));
        assert!(session.left_tunnels().is_empty());
        assert!(session.right_tunnels().is_empty());
        assert_eq!(session.general_support().height, 120);
    }

    #[test]
    fn entering_vertical_has_no_shaft_below() {
        let session = paint(down_60_to_down_90, 0, Direction::NE);
        assert_eq!(session.images().count(), 1);
        assert_eq!(supports(&session), 0);
        assert_eq!(session.vertical_tunnel_height(), None);
        assert_eq!(session.left_tunnels().len(), 1);
        assert_eq!(session.left_tunnels()[0].height, 112);
        assert_eq!(session.left_tunnels()[0].sub_type, TunnelSubType::SlopeEnd);
        assert_eq!(session.general_support().height, 144);

        let session = paint(down_60_to_down_90, 0, Direction::SE);
        assert!(session.left_tunnels().is_empty());
        assert!(session.right_tunnels().is_empty());

        assert!(paint(down_60_to_down_90, 1, Direction::NE).commands().is_empty());
    }

    #[test]
    fn up_90_to_up_60_tunnels_on_the_far_edges() {
        assert!(paint(up_90_to_up_60, 0, Direction::NE).left_tunnels().is_empty());
        let session = paint(up_90_to_up_60, 0, Direction::SE);
        assert_eq!(session.right_tunnels().len(), 1);
        assert_eq!(session.right_tunnels()[0].height, 112);
    }

    #[test]
    fn vertical_down_keeps_its_shaft() {
        let session = paint(down_90, 0, Direction::NE);
        assert_eq!(supports(&session), 0);
        assert_eq!(session.vertical_tunnel_height(), Some(96));
        assert_eq!(session.general_support().height, 96);
        assert!(paint(down_90, 1, Direction::NE).commands().is_empty());
    }

    #[test]
    fn shaft_tiles_are_empty() {
        for direction in Direction::ALL {
            assert!(UP_90_SPRITES[direction.index()][1].is_empty());
            assert!(UP_60_TO_UP_90_SPRITES[direction.index()][1].is_empty());
        }
    }
}
