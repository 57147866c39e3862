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


//! Per-piece painters for the hybrid coaster and the dispatch from a track
//! type to its painter.

use trackpaint_core::{
    direction::Direction,
    ride::Ride,
    session::PaintSession,
    track_element::{TrackElemType, TrackElement},
};

mod banks;
mod diagonal;
mod helix;
mod inversions;
mod slopes;
pub mod sprites;
mod straight;
mod turns;
mod util;
mod vertical;

#[cfg(test)]
mod tests;

/// Draws one tile of a track piece.
///
/// Arguments are the session, the ride, the tile's index within the piece,
/// the direction the piece faces, the base height of the piece, and the
/// element being drawn. Sequences the piece doesn't have draw nothing.
pub type TrackPaintFunction =
    fn(&mut dyn PaintSession, &Ride, u8, Direction, i32, &TrackElement);

/// Every track type the hybrid coaster can draw, with its tile count.
#[rustfmt::skip]
pub const SUPPORTED_TRACK_TYPES: [(TrackElemType, u8); 101] = {
    use TrackElemType::*;
    [
        (Flat, 1), (EndStation, 1), (BeginStation, 1), (MiddleStation, 1),
        (Brakes, 1), (BlockBrakes, 1), (Booster, 1), (OnRidePhoto, 1),

        (Up25, 1), (Up60, 1), (FlatToUp25, 1), (Up25ToUp60, 1), (Up60ToUp25, 1), (Up25ToFlat, 1),
        (Down25, 1), (Down60, 1), (FlatToDown25, 1), (Down25ToDown60, 1), (Down60ToDown25, 1), (Down25ToFlat, 1),
        (FlatToUp60, 1), (Up60ToFlat, 1), (FlatToDown60, 1), (Down60ToFlat, 1),

        (Up60ToUp90, 2), (Up90, 2), (Up90ToUp60, 1), (Down60ToDown90, 2), (Down90, 2), (Down90ToDown60, 1),

        (LeftQuarterTurn3Tiles, 4), (RightQuarterTurn3Tiles, 4),
        (LeftQuarterTurn5Tiles, 7), (RightQuarterTurn5Tiles, 7),
        (SBendLeft, 4), (SBendRight, 4),
        (LeftBankedQuarterTurn3Tiles, 4), (RightBankedQuarterTurn3Tiles, 4),
        (BankedLeftQuarterTurn5Tiles, 7), (BankedRightQuarterTurn5Tiles, 7),
        (LeftQuarterTurn3TilesUp25, 4), (RightQuarterTurn3TilesUp25, 4),
        (LeftQuarterTurn3TilesDown25, 4), (RightQuarterTurn3TilesDown25, 4),
        (LeftQuarterTurn5TilesUp25, 7), (RightQuarterTurn5TilesUp25, 7),
        (LeftQuarterTurn5TilesDown25, 7), (RightQuarterTurn5TilesDown25, 7),

        (FlatToLeftBank, 1), (FlatToRightBank, 1), (LeftBankToFlat, 1), (RightBankToFlat, 1),
        (LeftBank, 1), (RightBank, 1),
        (LeftBankToUp25, 1), (RightBankToUp25, 1), (Up25ToLeftBank, 1), (Up25ToRightBank, 1),
        (LeftBankToDown25, 1), (RightBankToDown25, 1), (Down25ToLeftBank, 1), (Down25ToRightBank, 1),
        (Up25LeftBanked, 1), (Up25RightBanked, 1), (Down25LeftBanked, 1), (Down25RightBanked, 1),

        (LeftHalfBankedHelixUpSmall, 8), (RightHalfBankedHelixUpSmall, 8),
        (LeftHalfBankedHelixDownSmall, 8), (RightHalfBankedHelixDownSmall, 8),

        (LeftEighthToDiag, 5), (RightEighthToDiag, 5), (LeftEighthToOrthogonal, 5), (RightEighthToOrthogonal, 5),
        (LeftEighthBankToDiag, 5), (RightEighthBankToDiag, 5),
        (LeftEighthBankToOrthogonal, 5), (RightEighthBankToOrthogonal, 5),
        (DiagFlat, 4), (DiagUp25, 4), (DiagUp60, 4), (DiagFlatToUp25, 4),
        (DiagUp25ToUp60, 4), (DiagUp60ToUp25, 4), (DiagUp25ToFlat, 4),
        (DiagDown25, 4), (DiagDown60, 4), (DiagFlatToDown25, 4),
        (DiagDown25ToDown60, 4), (DiagDown60ToDown25, 4), (DiagDown25ToFlat, 4),
        (DiagFlatToLeftBank, 4), (DiagFlatToRightBank, 4), (DiagLeftBankToFlat, 4), (DiagRightBankToFlat, 4),
        (DiagLeftBank, 4), (DiagRightBank, 4),

        (LeftBarrelRollUpToDown, 3), (RightBarrelRollUpToDown, 3),
        (LeftBarrelRollDownToUp, 3), (RightBarrelRollDownToUp, 3),
    ]
};

/// Looks up the painter for `track_type`. `None` for pieces the hybrid
/// coaster can't build.
pub fn get_track_paint_function(track_type: TrackElemType) -> Option<TrackPaintFunction> {
    use TrackElemType::*;
    let f: TrackPaintFunction = match track_type {
        Flat => straight::flat,
        EndStation | BeginStation | MiddleStation => straight::station,
        Brakes => straight::brakes,
        BlockBrakes => straight::block_brakes,
        Booster => straight::booster,
        OnRidePhoto => straight::on_ride_photo,

        Up25 => slopes::up_25,
        Up60 => slopes::up_60,
        FlatToUp25 => slopes::flat_to_up_25,
        Up25ToUp60 => slopes::up_25_to_up_60,
        Up60ToUp25 => slopes::up_60_to_up_25,
        Up25ToFlat => slopes::up_25_to_flat,
        Down25 => slopes::down_25,
        Down60 => slopes::down_60,
        FlatToDown25 => slopes::flat_to_down_25,
        Down25ToDown60 => slopes::down_25_to_down_60,
        Down60ToDown25 => slopes::down_60_to_down_25,
        Down25ToFlat => slopes::down_25_to_flat,
        FlatToUp60 => slopes::flat_to_up_60,
        Up60ToFlat => slopes::up_60_to_flat,
        FlatToDown60 => slopes::flat_to_down_60,
        Down60ToFlat => slopes::down_60_to_flat,

        Up60ToUp90 => vertical::up_60_to_up_90,
        Up90 => vertical::up_90,
        Up90ToUp60 => vertical::up_90_to_up_60,
        Down60ToDown90 => vertical::down_60_to_down_90,
        Down90 => vertical::down_90,
        Down90ToDown60 => vertical::down_90_to_down_60,

        LeftQuarterTurn3Tiles => turns::left_quarter_turn_3,
        RightQuarterTurn3Tiles => turns::right_quarter_turn_3,
        LeftQuarterTurn5Tiles => turns::left_quarter_turn_5,
        RightQuarterTurn5Tiles => turns::right_quarter_turn_5,
        SBendLeft => turns::s_bend_left,
        SBendRight => turns::s_bend_right,
        LeftBankedQuarterTurn3Tiles => turns::left_banked_quarter_turn_3,
        RightBankedQuarterTurn3Tiles => turns::right_banked_quarter_turn_3,
        BankedLeftQuarterTurn5Tiles => turns::banked_left_quarter_turn_5,
        BankedRightQuarterTurn5Tiles => turns::banked_right_quarter_turn_5,
        LeftQuarterTurn3TilesUp25 => turns::left_quarter_turn_3_up_25,
        RightQuarterTurn3TilesUp25 => turns::right_quarter_turn_3_up_25,
        LeftQuarterTurn3TilesDown25 => turns::left_quarter_turn_3_down_25,
        RightQuarterTurn3TilesDown25 => turns::right_quarter_turn_3_down_25,
        LeftQuarterTurn5TilesUp25 => turns::left_quarter_turn_5_up_25,
        RightQuarterTurn5TilesUp25 => turns::right_quarter_turn_5_up_25,
        LeftQuarterTurn5TilesDown25 => turns::left_quarter_turn_5_down_25,
        RightQuarterTurn5TilesDown25 => turns::right_quarter_turn_5_down_25,

        FlatToLeftBank => banks::flat_to_left_bank,
        FlatToRightBank => banks::flat_to_right_bank,
        LeftBankToFlat => banks::left_bank_to_flat,
        RightBankToFlat => banks::right_bank_to_flat,
        LeftBank => banks::left_bank,
        RightBank => banks::right_bank,
        LeftBankToUp25 => banks::left_bank_to_up_25,
        RightBankToUp25 => banks::right_bank_to_up_25,
        Up25ToLeftBank => banks::up_25_to_left_bank,
        Up25ToRightBank => banks::up_25_to_right_bank,
        LeftBankToDown25 => banks::left_bank_to_down_25,
        RightBankToDown25 => banks::right_bank_to_down_25,
        Down25ToLeftBank => banks::down_25_to_left_bank,
        Down25ToRightBank => banks::down_25_to_right_bank,
        Up25LeftBanked => banks::up_25_left_banked,
        Up25RightBanked => banks::up_25_right_banked,
        Down25LeftBanked => banks::down_25_left_banked,
        Down25RightBanked => banks::down_25_right_banked,

        LeftHalfBankedHelixUpSmall => helix::left_half_banked_helix_up_small,
        RightHalfBankedHelixUpSmall => helix::right_half_banked_helix_up_small,
        LeftHalfBankedHelixDownSmall => helix::left_half_banked_helix_down_small,
        RightHalfBankedHelixDownSmall => helix::right_half_banked_helix_down_small,

        LeftEighthToDiag => diagonal::left_eighth_to_diag,
        RightEighthToDiag => diagonal::right_eighth_to_diag,
        LeftEighthToOrthogonal => diagonal::left_eighth_to_orthogonal,
        RightEighthToOrthogonal => diagonal::right_eighth_to_orthogonal,
        LeftEighthBankToDiag => diagonal::left_eighth_bank_to_diag,
        RightEighthBankToDiag => diagonal::right_eighth_bank_to_diag,
        LeftEighthBankToOrthogonal => diagonal::left_eighth_bank_to_orthogonal,
        RightEighthBankToOrthogonal => diagonal::right_eighth_bank_to_orthogonal,
        DiagFlat => diagonal::diag_flat,
        DiagUp25 => diagonal::diag_up_25,
        DiagUp60 => diagonal::diag_up_60,
        DiagFlatToUp25 => diagonal::diag_flat_to_up_25,
        DiagUp25ToUp60 => diagonal::diag_up_25_to_up_60,
        DiagUp60ToUp25 => diagonal::diag_up_60_to_up_25,
        DiagUp25ToFlat => diagonal::diag_up_25_to_flat,
        DiagDown25 => diagonal::diag_down_25,
        DiagDown60 => diagonal::diag_down_60,
        DiagFlatToDown25 => diagonal::diag_flat_to_down_25,
        DiagDown25ToDown60 => diagonal::diag_down_25_to_down_60,
        DiagDown60ToDown25 => diagonal::diag_down_60_to_down_25,
        DiagDown25ToFlat => diagonal::diag_down_25_to_flat,
        DiagFlatToLeftBank => diagonal::diag_flat_to_left_bank,
        DiagFlatToRightBank => diagonal::diag_flat_to_right_bank,
        DiagLeftBankToFlat => diagonal::diag_left_bank_to_flat,
        DiagRightBankToFlat => diagonal::diag_right_bank_to_flat,
        DiagLeftBank => diagonal::diag_left_bank,
        DiagRightBank => diagonal::diag_right_bank,

        LeftBarrelRollUpToDown => inversions::left_barrel_roll_up_to_down,
        RightBarrelRollUpToDown => inversions::right_barrel_roll_up_to_down,
        LeftBarrelRollDownToUp => inversions::left_barrel_roll_down_to_up,
        RightBarrelRollDownToUp => inversions::right_barrel_roll_down_to_up,

        _ => return None,
    };
    Some(f)
}

/// Number of tiles in a piece the hybrid coaster can build.
pub fn sequence_count(track_type: TrackElemType) -> Option<u8> {
    SUPPORTED_TRACK_TYPES
        .iter()
        .find(|(t, _)| *t == track_type)
        .map(|(_, count)| *count)
}
