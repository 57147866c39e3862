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


//! Helpers shared by the piece painters: sequence remaps, tunnel placement
//! for turns, support placement and common segment sets.

use trackpaint_core::{
    constants::SUPPORT_HEIGHT_UNSET,
    direction::Direction,
    ride::Ride,
    segments::{PaintSegment as Seg, Segments},
    session::PaintSession,
    supports::{WoodenSupportSubType, WoodenSupportTransitionType},
    tunnels::{TunnelGroup, TunnelSubType},
};

/// Tunnel style used at the ends of every hybrid piece.
pub(crate) const TUNNEL_GROUP: TunnelGroup = TunnelGroup::Square;

pub(crate) const MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT: [u8; 4] = [3, 1, 2, 0];
pub(crate) const MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT: [u8; 7] = [6, 4, 5, 3, 1, 2, 0];
pub(crate) const MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL: [u8; 5] = [4, 2, 3, 1, 0];
pub(crate) const MAP_REVERSED_DIAGONAL: [u8; 4] = [3, 2, 1, 0];
pub(crate) const MAP_REVERSED_BARREL_ROLL: [u8; 3] = [2, 1, 0];

/// Looks up the mirrored sequence. `None` for sequences the piece doesn't have.
#[inline]
pub(crate) fn remap(table: &[u8], sequence: u8) -> Option<u8> {
    table.get(sequence as usize).copied()
}

#[rustfmt::skip]
pub(crate) mod segs {
    use super::*;

    pub(crate) const QT3_LEFT_INNER: Segments = Segments::of(&[Seg::Left, Seg::Centre, Seg::TopLeft, Seg::BottomLeft]);
    pub(crate) const QT3_RIGHT_INNER: Segments = Segments::of(&[Seg::Bottom, Seg::Centre, Seg::BottomLeft, Seg::BottomRight]);

    pub(crate) const QT5_LEFT_EDGE: Segments = Segments::of(&[Seg::Right, Seg::TopRight, Seg::BottomRight]);
    pub(crate) const QT5_LEFT_ENTRY: Segments = Segments::of(&[Seg::Top, Seg::Left, Seg::Centre, Seg::TopLeft, Seg::TopRight, Seg::BottomLeft]);
    pub(crate) const QT5_LEFT_MIDDLE: Segments = Segments::of(&[Seg::Top, Seg::Right, Seg::Bottom, Seg::Centre, Seg::TopLeft, Seg::TopRight, Seg::BottomLeft, Seg::BottomRight]);
    pub(crate) const QT5_LEFT_EXIT: Segments = Segments::of(&[Seg::Left, Seg::Bottom, Seg::Centre, Seg::TopLeft, Seg::BottomLeft, Seg::BottomRight]);

    pub(crate) const QT5_RIGHT_EDGE: Segments = Segments::of(&[Seg::Top, Seg::TopLeft, Seg::TopRight]);
    pub(crate) const QT5_RIGHT_ENTRY: Segments = Segments::of(&[Seg::Right, Seg::Bottom, Seg::Centre, Seg::TopRight, Seg::BottomLeft, Seg::BottomRight]);
    pub(crate) const QT5_RIGHT_MIDDLE: Segments = Segments::of(&[Seg::Top, Seg::Left, Seg::Right, Seg::Centre, Seg::TopLeft, Seg::TopRight, Seg::BottomLeft, Seg::BottomRight]);
    pub(crate) const QT5_RIGHT_EXIT: Segments = Segments::of(&[Seg::Left, Seg::Bottom, Seg::Centre, Seg::TopLeft, Seg::BottomLeft, Seg::BottomRight]);

    pub(crate) const S_BEND_UPPER: Segments = Segments::of(&[Seg::Top, Seg::Left, Seg::Centre, Seg::TopLeft, Seg::TopRight, Seg::BottomLeft]);
    pub(crate) const S_BEND_LOWER: Segments = Segments::of(&[Seg::Right, Seg::Bottom, Seg::Centre, Seg::TopRight, Seg::BottomLeft, Seg::BottomRight]);
}

/// Marks `segments` (rotated for `direction`) as fully blocked.
#[inline]
pub(crate) fn block_segments(session: &mut dyn PaintSession, segments: Segments, direction: Direction) {
    session.set_segment_support_height(segments.rotate(direction), SUPPORT_HEIGHT_UNSET, 0);
}

#[inline]
pub(crate) fn block_all_segments(session: &mut dyn PaintSession) {
    session.set_segment_support_height(Segments::ALL, SUPPORT_HEIGHT_UNSET, 0);
}

/// Wooden A supports in the ride's support style, coloured with the session's
/// support template. The sub-type is given in the direction-0 frame.
pub(crate) fn wooden_a_supports(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sub_type: WoodenSupportSubType,
    direction: Direction,
    height: i32,
    transition: WoodenSupportTransitionType,
) -> bool {
    let template = session.support_colours();
    session.wooden_a_supports_paint_setup_rotated(
        ride.wooden_support_type,
        sub_type,
        direction,
        height,
        template,
        transition,
    )
}

/// Flat wooden A supports, the common case.
#[inline]
pub(crate) fn wooden_a_supports_flat(
    session: &mut dyn PaintSession,
    ride: &Ride,
    sub_type: WoodenSupportSubType,
    direction: Direction,
    height: i32,
) -> bool {
    wooden_a_supports(session, ride, sub_type, direction, height, WoodenSupportTransitionType::None)
}

/// Pushes the entry tunnel of a straight or sloped single-tile piece: `start`
/// when the piece is entered from the camera-facing side, `end` otherwise.
pub(crate) fn straight_tunnel(
    session: &mut dyn PaintSession,
    direction: Direction,
    start: (i32, TunnelSubType),
    end: (i32, TunnelSubType),
) {
    let (height, sub_type) = if direction.value() == 0 || direction.value() == 3 {
        start
    } else {
        end
    };
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, sub_type);
}

/// Tunnels at the two open ends of a left-hand turn whose last tile is
/// `last_sequence`.
pub(crate) fn left_turn_tunnels(
    session: &mut dyn PaintSession,
    direction: Direction,
    sequence: u8,
    last_sequence: u8,
    start: (i32, TunnelSubType),
    end: (i32, TunnelSubType),
) {
    match (sequence, direction.value()) {
        (0, 0) => session.push_tunnel_left(start.0, TUNNEL_GROUP, start.1),
        (0, 3) => session.push_tunnel_right(start.0, TUNNEL_GROUP, start.1),
        (s, 2) if s == last_sequence => session.push_tunnel_right(end.0, TUNNEL_GROUP, end.1),
        (s, 3) if s == last_sequence => session.push_tunnel_left(end.0, TUNNEL_GROUP, end.1),
        _ => {}
    }
}

/// Mirror of [left_turn_tunnels] for turns drawn with their own right-hand
/// sprites.
pub(crate) fn right_turn_tunnels(
    session: &mut dyn PaintSession,
    direction: Direction,
    sequence: u8,
    last_sequence: u8,
    start: (i32, TunnelSubType),
    end: (i32, TunnelSubType),
) {
    match (sequence, direction.value()) {
        (0, 0) => session.push_tunnel_left(start.0, TUNNEL_GROUP, start.1),
        (0, 3) => session.push_tunnel_right(start.0, TUNNEL_GROUP, start.1),
        (s, 0) if s == last_sequence => session.push_tunnel_right(end.0, TUNNEL_GROUP, end.1),
        (s, 1) if s == last_sequence => session.push_tunnel_left(end.0, TUNNEL_GROUP, end.1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bijection(table: &[u8]) -> bool {
        let mut seen = vec![false; table.len()];
        for &target in table {
            match seen.get_mut(target as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    fn is_involution(table: &[u8]) -> bool {
        table
            .iter()
            .enumerate()
            .all(|(i, &target)| table[target as usize] as usize == i)
    }

    #[test]
    fn remaps_are_bijections() {
        assert!(is_bijection(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT));
        assert!(is_bijection(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT));
        assert!(is_bijection(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL));
        assert!(is_bijection(&MAP_REVERSED_DIAGONAL));
        assert!(is_bijection(&MAP_REVERSED_BARREL_ROLL));
    }

    #[test]
    fn quarter_turn_remaps_are_involutions() {
        assert!(is_involution(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT));
        assert!(is_involution(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT));
        assert!(is_involution(&MAP_REVERSED_DIAGONAL));
        assert!(!is_involution(&MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL));
    }

    #[test]
    fn remap_out_of_range() {
        assert_eq!(remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, 0), Some(3));
        assert_eq!(remap(&MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, 4), None);
        assert_eq!(remap(&MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT, 255), None);
    }

    #[test]
    fn segment_sets_keep_their_size() {
        assert_eq!(segs::QT3_LEFT_INNER.iter().count(), 4);
        assert_eq!(segs::QT5_LEFT_MIDDLE.iter().count(), 8);
        assert!(!segs::QT5_RIGHT_EDGE.contains(Seg::Centre));
        assert!(segs::S_BEND_UPPER.contains(Seg::Centre));
    }
}
