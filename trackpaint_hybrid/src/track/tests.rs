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


use trackpaint_core::{
    direction::Direction,
    track_element::{TrackElemType, TrackElement},
    tunnels::TunnelSubType,
};

use super::{
    get_track_paint_function, sequence_count, sprites,
    util::{
        MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT, MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT,
        MAP_REVERSED_DIAGONAL,
    },
    SUPPORTED_TRACK_TYPES,
};
use crate::{
    recorder::{PaintCommand, RecordingSession, TunnelEdge},
    test_support::{all_tiles, init_logging, record_piece, record_piece_with},
};

/// Tiles that are pure shaft above a vertical piece and record nothing at all
const EMPTY_TILES: [(TrackElemType, u8); 4] = [
    (TrackElemType::Up90, 1),
    (TrackElemType::Down90, 1),
    (TrackElemType::Up60ToUp90, 1),
    (TrackElemType::Down60ToDown90, 1),
];

fn record(track_type: TrackElemType, sequence: u8, direction: Direction) -> Vec<PaintCommand> {
    match record_piece(track_type, sequence, direction, 64) {
        Some(commands) => commands,
        None => panic!("no painter for {:?}", track_type),
    }
}

fn images(commands: &[PaintCommand]) -> Vec<u32> {
    commands
        .iter()
        .filter_map(|c| match c {
            PaintCommand::Image { image, .. } => Some(image.index()),
            _ => None,
        })
        .collect()
}

fn count(track_type: TrackElemType) -> u8 {
    match sequence_count(track_type) {
        Some(count) => count,
        None => panic!("{:?} is not supported", track_type),
    }
}

#[test]
fn down_pieces_are_up_pieces_turned_around() {
    init_logging();
    use TrackElemType::*;
    let pairs = [
        (Down25, Up25),
        (Down60, Up60),
        (FlatToDown25, Up25ToFlat),
        (Down25ToDown60, Up60ToUp25),
        (Down60ToDown25, Up25ToUp60),
        (Down25ToFlat, FlatToUp25),
        (FlatToDown60, Up60ToFlat),
        (Down60ToFlat, FlatToUp60),
        (Down90, Up90),
        (LeftBankToFlat, FlatToRightBank),
        (RightBankToFlat, FlatToLeftBank),
        (RightBank, LeftBank),
        (LeftBankToDown25, Up25ToRightBank),
        (RightBankToDown25, Up25ToLeftBank),
        (Down25ToLeftBank, RightBankToUp25),
        (Down25ToRightBank, LeftBankToUp25),
        (Down25LeftBanked, Up25RightBanked),
        (Down25RightBanked, Up25LeftBanked),
    ];
    for (down, up) in pairs {
        assert_eq!(count(down), count(up));
        for sequence in 0..count(down) {
            for direction in Direction::ALL {
                assert_eq!(
                    record(down, sequence, direction),
                    record(up, sequence, direction.reverse()),
                    "{:?} seq {} {:?}",
                    down,
                    sequence,
                    direction
                );
            }
        }
    }
}

#[test]
fn diagonal_down_pieces_walk_up_pieces_backwards() {
    use TrackElemType::*;
    let pairs = [
        (DiagDown25, DiagUp25),
        (DiagDown60, DiagUp60),
        (DiagFlatToDown25, DiagUp25ToFlat),
        (DiagDown25ToDown60, DiagUp60ToUp25),
        (DiagDown60ToDown25, DiagUp25ToUp60),
        (DiagDown25ToFlat, DiagFlatToUp25),
        (DiagLeftBankToFlat, DiagFlatToRightBank),
        (DiagRightBankToFlat, DiagFlatToLeftBank),
        (DiagRightBank, DiagLeftBank),
    ];
    for (down, up) in pairs {
        for sequence in 0..4u8 {
            for direction in Direction::ALL {
                assert_eq!(
                    record(down, sequence, direction),
                    record(up, MAP_REVERSED_DIAGONAL[sequence as usize], direction.reverse()),
                    "{:?} seq {} {:?}",
                    down,
                    sequence,
                    direction
                );
            }
        }
    }
}

#[test]
fn right_turns_are_left_turns_mirrored() {
    use TrackElemType::*;
    let quarter_3 = [
        (RightQuarterTurn3Tiles, LeftQuarterTurn3Tiles),
        (RightBankedQuarterTurn3Tiles, LeftBankedQuarterTurn3Tiles),
    ];
    for (right, left) in quarter_3 {
        for sequence in 0..4u8 {
            for direction in Direction::ALL {
                assert_eq!(
                    record(right, sequence, direction),
                    record(
                        left,
                        MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[sequence as usize],
                        direction.prev()
                    ),
                    "{:?} seq {} {:?}",
                    right,
                    sequence,
                    direction
                );
            }
        }
    }
    let quarter_5 = [
        (RightQuarterTurn5Tiles, LeftQuarterTurn5Tiles),
        (BankedRightQuarterTurn5Tiles, BankedLeftQuarterTurn5Tiles),
    ];
    for (right, left) in quarter_5 {
        for sequence in 0..7u8 {
            for direction in Direction::ALL {
                assert_eq!(
                    record(right, sequence, direction),
                    record(
                        left,
                        MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[sequence as usize],
                        direction.prev()
                    ),
                );
            }
        }
    }
}

#[test]
fn dispatch_is_pure() {
    for &track_type in TrackElemType::ALL {
        let first = get_track_paint_function(track_type).map(|f| f as usize);
        let second = get_track_paint_function(track_type).map(|f| f as usize);
        assert_eq!(first, second, "{:?}", track_type);
        assert_eq!(
            first.is_some(),
            sequence_count(track_type).is_some(),
            "{:?}",
            track_type
        );
    }
    assert_eq!(
        TrackElemType::ALL
            .iter()
            .filter(|t| get_track_paint_function(**t).is_some())
            .count(),
        SUPPORTED_TRACK_TYPES.len()
    );
}

#[test]
fn unknown_pieces_have_no_painter() {
    use TrackElemType::*;
    for track_type in [
        LeftVerticalLoop,
        HalfLoopUp,
        LeftCorkscrewUp,
        FlatCovered,
        Waterfall,
        Maze,
        DiagFlatToUp60,
        LeftBankedQuarterTurn3TileUp25,
    ] {
        assert!(get_track_paint_function(track_type).is_none(), "{:?}", track_type);
        assert_eq!(sequence_count(track_type), None);
        assert_eq!(record_piece(track_type, 0, Direction::NE, 0), None);
    }
}

#[test]
fn every_tile_paints_something() {
    init_logging();
    for (track_type, sequence) in all_tiles() {
        let total: usize = Direction::ALL
            .iter()
            .map(|&direction| record(track_type, sequence, direction).len())
            .sum();
        if EMPTY_TILES.contains(&(track_type, sequence)) {
            assert_eq!(total, 0, "{:?} seq {}", track_type, sequence);
        } else {
            assert!(total > 0, "{:?} seq {} paints nothing", track_type, sequence);
        }
    }
}

#[test]
fn every_piece_draws_track() {
    for &(track_type, tiles) in SUPPORTED_TRACK_TYPES.iter() {
        for direction in Direction::ALL {
            let drawn: usize = (0..tiles)
                .map(|sequence| images(&record(track_type, sequence, direction)).len())
                .sum();
            assert!(drawn > 0, "{:?} {:?} draws no sprite", track_type, direction);
        }
    }
}

#[test]
fn sequences_past_the_end_draw_nothing() {
    for &(track_type, tiles) in SUPPORTED_TRACK_TYPES.iter() {
        for sequence in [tiles, tiles + 1, u8::MAX] {
            for direction in Direction::ALL {
                assert!(
                    record(track_type, sequence, direction).is_empty(),
                    "{:?} seq {}",
                    track_type,
                    sequence
                );
            }
        }
    }
}

#[test]
fn images_stay_in_the_hybrid_block() {
    for (track_type, sequence) in all_tiles() {
        for direction in Direction::ALL {
            for index in images(&record(track_type, sequence, direction)) {
                assert!(
                    (sprites::SPR_G2_HYBRID_BEGIN..sprites::SPR_G2_HYBRID_END).contains(&index),
                    "{:?} seq {} image {}",
                    track_type,
                    sequence,
                    index
                );
            }
        }
    }
}

#[test]
fn chain_lift_uses_lift_sprites() {
    let ride = Default::default();
    let plain = TrackElement::new(TrackElemType::Up25);
    let chained = plain.with_chain(true);
    let plain_images = images(&record_piece_with(&ride, plain, 0, Direction::NE, 0).unwrap());
    let chained_images = images(&record_piece_with(&ride, chained, 0, Direction::NE, 0).unwrap());
    assert_eq!(plain_images.len(), chained_images.len());
    assert!(plain_images
        .iter()
        .all(|i| (sprites::SLOPE.base..sprites::SLOPE.end()).contains(i)));
    assert!(chained_images
        .iter()
        .all(|i| (sprites::SLOPE_LIFT.base..sprites::SLOPE_LIFT.end()).contains(i)));
}

#[test]
fn closed_block_brakes_look_different() {
    let ride = Default::default();
    let open = TrackElement::new(TrackElemType::BlockBrakes);
    let closed = open.with_brake_closed(true);
    assert_ne!(
        images(&record_piece_with(&ride, open, 0, Direction::SE, 0).unwrap()),
        images(&record_piece_with(&ride, closed, 0, Direction::SE, 0).unwrap())
    );
}

#[test]
fn flat_tunnels_and_clearance() {
    let ride = Default::default();
    let element = TrackElement::new(TrackElemType::Flat);
    for (direction, edge) in [
        (Direction::NE, TunnelEdge::Left),
        (Direction::SE, TunnelEdge::Right),
        (Direction::SW, TunnelEdge::Left),
        (Direction::NW, TunnelEdge::Right),
    ] {
        let mut session = RecordingSession::new();
        let paint = get_track_paint_function(TrackElemType::Flat).unwrap();
        paint(&mut session, &ride, 0, direction, 48, &element);
        let tunnels = match edge {
            TunnelEdge::Left => session.left_tunnels(),
            TunnelEdge::Right => session.right_tunnels(),
        };
        assert_eq!(tunnels.len(), 1, "{:?}", direction);
        assert_eq!(tunnels[0].height, 48);
        assert_eq!(tunnels[0].sub_type, TunnelSubType::Flat);
        assert_eq!(session.general_support().height, 80);
    }
}

#[test]
fn steep_slope_sorts_supports_behind_track() {
    // SE draws the track bed and then the tall side rail in front of it
    let commands = record(TrackElemType::Up60, 0, Direction::SE);
    let prepend = commands.iter().find_map(|c| match c {
        PaintCommand::Supports { prepend_to, .. } => *prepend_to,
        _ => None,
    });
    let boxes: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            PaintCommand::Image {
                handle, bound_box, ..
            } => Some((*handle, *bound_box)),
            _ => None,
        })
        .collect();
    assert_eq!(boxes.len(), 2);
    let (bed, rail) = (boxes[0], boxes[1]);
    assert_eq!(bed.1.length.z, 3);
    assert!(rail.1.length.z > bed.1.length.z);
    assert_eq!(prepend, Some(bed.0));
}

#[test]
fn vertical_track_marks_a_shaft() {
    let ride = Default::default();
    let element = TrackElement::new(TrackElemType::Up90);
    let mut session = RecordingSession::new();
    let paint = get_track_paint_function(TrackElemType::Up90).unwrap();
    paint(&mut session, &ride, 0, Direction::NE, 64, &element);
    assert_eq!(session.vertical_tunnel_height(), Some(96));
    assert_eq!(session.general_support().height, 96);
}

#[test]
fn odd_directions_swap_bounding_boxes() {
    let ne = record(TrackElemType::Flat, 0, Direction::NE);
    let se = record(TrackElemType::Flat, 0, Direction::SE);
    let bound_box = |commands: &[PaintCommand]| {
        commands.iter().find_map(|c| match c {
            PaintCommand::Image { bound_box, .. } => Some(*bound_box),
            _ => None,
        })
    };
    let (ne, se) = (bound_box(&ne).unwrap(), bound_box(&se).unwrap());
    assert_eq!(ne.offset.x, se.offset.y);
    assert_eq!(ne.length.x, se.length.y);
    assert_eq!(ne.offset.z, 64);
}
