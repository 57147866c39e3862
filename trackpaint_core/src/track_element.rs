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


use std::fmt::Debug;
use std::str::FromStr;

use anyhow::{ensure, Result};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::constants::NUM_COLOUR_SCHEMES;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackError {
    #[error("Track type id {0} does not exist")]
    UnknownTrackTypeId(u16),
    #[error("Track type `{0}` does not exist")]
    UnknownTrackTypeName(String),
    #[error("Direction {0} is out of range (max is 3)")]
    DirectionOutOfRange(u8),
    #[error("Colour scheme {0} is out of range (max is 3)")]
    ColourSchemeOutOfRange(u8),
}

macro_rules! track_elem_types {
    ($($name:ident = $id:literal,)*) => {
        /// Every kind of track piece the game knows about, numbered as they are
        /// stored in saved parks.
        ///
        /// A given ride type only paints a subset of these.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum TrackElemType {
            $($name = $id,)*
        }

        impl TrackElemType {
            pub const ALL: &'static [TrackElemType] = &[$(TrackElemType::$name,)*];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(TrackElemType::$name => stringify!($name),)*
                }
            }

            pub const fn from_id(id: u16) -> Option<TrackElemType> {
                match id {
                    $($id => Some(TrackElemType::$name),)*
                    _ => None,
                }
            }
        }
    };
}

#[rustfmt::skip]
track_elem_types! {
    Flat = 0,
    EndStation = 1,
    BeginStation = 2,
    MiddleStation = 3,
    Up25 = 4,
    Up60 = 5,
    FlatToUp25 = 6,
    Up25ToUp60 = 7,
    Up60ToUp25 = 8,
    Up25ToFlat = 9,
    Down25 = 10,
    Down60 = 11,
    FlatToDown25 = 12,
    Down25ToDown60 = 13,
    Down60ToDown25 = 14,
    Down25ToFlat = 15,
    LeftQuarterTurn5Tiles = 16,
    RightQuarterTurn5Tiles = 17,
    FlatToLeftBank = 18,
    FlatToRightBank = 19,
    LeftBankToFlat = 20,
    RightBankToFlat = 21,
    BankedLeftQuarterTurn5Tiles = 22,
    BankedRightQuarterTurn5Tiles = 23,
    LeftBankToUp25 = 24,
    RightBankToUp25 = 25,
    Up25ToLeftBank = 26,
    Up25ToRightBank = 27,
    LeftBankToDown25 = 28,
    RightBankToDown25 = 29,
    Down25ToLeftBank = 30,
    Down25ToRightBank = 31,
    LeftBank = 32,
    RightBank = 33,
    LeftQuarterTurn5TilesUp25 = 34,
    RightQuarterTurn5TilesUp25 = 35,
    LeftQuarterTurn5TilesDown25 = 36,
    RightQuarterTurn5TilesDown25 = 37,
    SBendLeft = 38,
    SBendRight = 39,
    LeftVerticalLoop = 40,
    RightVerticalLoop = 41,
    LeftQuarterTurn3Tiles = 42,
    RightQuarterTurn3Tiles = 43,
    LeftBankedQuarterTurn3Tiles = 44,
    RightBankedQuarterTurn3Tiles = 45,
    LeftQuarterTurn3TilesUp25 = 46,
    RightQuarterTurn3TilesUp25 = 47,
    LeftQuarterTurn3TilesDown25 = 48,
    RightQuarterTurn3TilesDown25 = 49,
    LeftQuarterTurn1Tile = 50,
    RightQuarterTurn1Tile = 51,
    LeftTwistDownToUp = 52,
    RightTwistDownToUp = 53,
    LeftTwistUpToDown = 54,
    RightTwistUpToDown = 55,
    HalfLoopUp = 56,
    HalfLoopDown = 57,
    LeftCorkscrewUp = 58,
    RightCorkscrewUp = 59,
    LeftCorkscrewDown = 60,
    RightCorkscrewDown = 61,
    FlatToUp60 = 62,
    Up60ToFlat = 63,
    FlatToDown60 = 64,
    Down60ToFlat = 65,
    TowerBase = 66,
    TowerSection = 67,
    FlatCovered = 68,
    Up25Covered = 69,
    Up60Covered = 70,
    FlatToUp25Covered = 71,
    Up25ToUp60Covered = 72,
    Up60ToUp25Covered = 73,
    Up25ToFlatCovered = 74,
    Down25Covered = 75,
    Down60Covered = 76,
    FlatToDown25Covered = 77,
    Down25ToDown60Covered = 78,
    Down60ToDown25Covered = 79,
    Down25ToFlatCovered = 80,
    LeftQuarterTurn5TilesCovered = 81,
    RightQuarterTurn5TilesCovered = 82,
    SBendLeftCovered = 83,
    SBendRightCovered = 84,
    LeftQuarterTurn3TilesCovered = 85,
    RightQuarterTurn3TilesCovered = 86,
    LeftHalfBankedHelixUpSmall = 87,
    RightHalfBankedHelixUpSmall = 88,
    LeftHalfBankedHelixDownSmall = 89,
    RightHalfBankedHelixDownSmall = 90,
    LeftHalfBankedHelixUpLarge = 91,
    RightHalfBankedHelixUpLarge = 92,
    LeftHalfBankedHelixDownLarge = 93,
    RightHalfBankedHelixDownLarge = 94,
    LeftQuarterTurn1TileUp60 = 95,
    RightQuarterTurn1TileUp60 = 96,
    LeftQuarterTurn1TileDown60 = 97,
    RightQuarterTurn1TileDown60 = 98,
    Brakes = 99,
    Booster = 100,
    Maze = 101,
    LeftQuarterBankedHelixLargeUp = 102,
    RightQuarterBankedHelixLargeUp = 103,
    LeftQuarterBankedHelixLargeDown = 104,
    RightQuarterBankedHelixLargeDown = 105,
    LeftQuarterHelixLargeUp = 106,
    RightQuarterHelixLargeUp = 107,
    LeftQuarterHelixLargeDown = 108,
    RightQuarterHelixLargeDown = 109,
    Up25LeftBanked = 110,
    Up25RightBanked = 111,
    Waterfall = 112,
    Rapids = 113,
    OnRidePhoto = 114,
    Down25LeftBanked = 115,
    Down25RightBanked = 116,
    Watersplash = 117,
    FlatToUp60LongBase = 118,
    Up60ToFlatLongBase = 119,
    Whirlpool = 120,
    Down60ToFlatLongBase = 121,
    FlatToDown60LongBase = 122,
    CableLiftHill = 123,
    ReverseFreefallSlope = 124,
    ReverseFreefallVertical = 125,
    Up90 = 126,
    Down90 = 127,
    Up60ToUp90 = 128,
    Down90ToDown60 = 129,
    Up90ToUp60 = 130,
    Down60ToDown90 = 131,
    BrakeForDrop = 132,
    LeftEighthToDiag = 133,
    RightEighthToDiag = 134,
    LeftEighthToOrthogonal = 135,
    RightEighthToOrthogonal = 136,
    LeftEighthBankToDiag = 137,
    RightEighthBankToDiag = 138,
    LeftEighthBankToOrthogonal = 139,
    RightEighthBankToOrthogonal = 140,
    DiagFlat = 141,
    DiagUp25 = 142,
    DiagUp60 = 143,
    DiagFlatToUp25 = 144,
    DiagUp25ToUp60 = 145,
    DiagUp60ToUp25 = 146,
    DiagUp25ToFlat = 147,
    DiagDown25 = 148,
    DiagDown60 = 149,
    DiagFlatToDown25 = 150,
    DiagDown25ToDown60 = 151,
    DiagDown60ToDown25 = 152,
    DiagDown25ToFlat = 153,
    DiagFlatToUp60 = 154,
    DiagUp60ToFlat = 155,
    DiagFlatToDown60 = 156,
    DiagDown60ToFlat = 157,
    DiagFlatToLeftBank = 158,
    DiagFlatToRightBank = 159,
    DiagLeftBankToFlat = 160,
    DiagRightBankToFlat = 161,
    DiagLeftBankToUp25 = 162,
    DiagRightBankToUp25 = 163,
    DiagUp25ToLeftBank = 164,
    DiagUp25ToRightBank = 165,
    DiagLeftBankToDown25 = 166,
    DiagRightBankToDown25 = 167,
    DiagDown25ToLeftBank = 168,
    DiagDown25ToRightBank = 169,
    DiagLeftBank = 170,
    DiagRightBank = 171,
    LogFlumeReverser = 172,
    SpinningTunnel = 173,
    LeftBarrelRollUpToDown = 174,
    RightBarrelRollUpToDown = 175,
    LeftBarrelRollDownToUp = 176,
    RightBarrelRollDownToUp = 177,
    LeftBankToLeftQuarterTurn3TilesUp25 = 178,
    RightBankToRightQuarterTurn3TilesUp25 = 179,
    LeftQuarterTurn3TilesDown25ToLeftBank = 180,
    RightQuarterTurn3TilesDown25ToRightBank = 181,
    PoweredLift = 182,
    LeftLargeHalfLoopUp = 183,
    RightLargeHalfLoopUp = 184,
    LeftLargeHalfLoopDown = 185,
    RightLargeHalfLoopDown = 186,
    LeftFlyerTwistUp = 187,
    RightFlyerTwistUp = 188,
    LeftFlyerTwistDown = 189,
    RightFlyerTwistDown = 190,
    FlyerHalfLoopUninvertedUp = 191,
    FlyerHalfLoopInvertedDown = 192,
    LeftFlyerCorkscrewUp = 193,
    RightFlyerCorkscrewUp = 194,
    LeftFlyerCorkscrewDown = 195,
    RightFlyerCorkscrewDown = 196,
    HeartLineTransferUp = 197,
    HeartLineTransferDown = 198,
    LeftHeartLineRoll = 199,
    RightHeartLineRoll = 200,
    MinigolfHoleA = 201,
    MinigolfHoleB = 202,
    MinigolfHoleC = 203,
    MinigolfHoleD = 204,
    MinigolfHoleE = 205,
    MultiDimInvertedFlatToDown90QuarterLoop = 206,
    Up90ToInvertedFlatQuarterLoop = 207,
    InvertedFlatToDown90QuarterLoop = 208,
    LeftCurvedLiftHill = 209,
    RightCurvedLiftHill = 210,
    LeftReverser = 211,
    RightReverser = 212,
    AirThrustTopCap = 213,
    AirThrustVerticalDown = 214,
    AirThrustVerticalDownToLevel = 215,
    BlockBrakes = 216,
    LeftBankedQuarterTurn3TileUp25 = 217,
    RightBankedQuarterTurn3TileUp25 = 218,
    LeftBankedQuarterTurn3TileDown25 = 219,
    RightBankedQuarterTurn3TileDown25 = 220,
    LeftBankedQuarterTurn5TileUp25 = 221,
    RightBankedQuarterTurn5TileUp25 = 222,
    LeftBankedQuarterTurn5TileDown25 = 223,
    RightBankedQuarterTurn5TileDown25 = 224,
    Up25ToLeftBankedUp25 = 225,
    Up25ToRightBankedUp25 = 226,
    LeftBankedUp25ToUp25 = 227,
    RightBankedUp25ToUp25 = 228,
    Down25ToLeftBankedDown25 = 229,
    Down25ToRightBankedDown25 = 230,
    LeftBankedDown25ToDown25 = 231,
    RightBankedDown25ToDown25 = 232,
    LeftBankedFlatToLeftBankedUp25 = 233,
    RightBankedFlatToRightBankedUp25 = 234,
    LeftBankedUp25ToLeftBankedFlat = 235,
    RightBankedUp25ToRightBankedFlat = 236,
    LeftBankedFlatToLeftBankedDown25 = 237,
    RightBankedFlatToRightBankedDown25 = 238,
    LeftBankedDown25ToLeftBankedFlat = 239,
    RightBankedDown25ToRightBankedFlat = 240,
    FlatToLeftBankedUp25 = 241,
    FlatToRightBankedUp25 = 242,
    LeftBankedUp25ToFlat = 243,
    RightBankedUp25ToFlat = 244,
    FlatToLeftBankedDown25 = 245,
    FlatToRightBankedDown25 = 246,
    LeftBankedDown25ToFlat = 247,
    RightBankedDown25ToFlat = 248,
    LeftQuarterTurn1TileUp90 = 249,
    RightQuarterTurn1TileUp90 = 250,
    LeftQuarterTurn1TileDown90 = 251,
    RightQuarterTurn1TileDown90 = 252,
    MultiDimUp90ToInvertedFlatQuarterLoop = 253,
    MultiDimFlatToDown90QuarterLoop = 254,
    MultiDimInvertedUp90ToFlatQuarterLoop = 255,
    RotationControlToggle = 256,
    FlatTrack1x4A = 257,
    FlatTrack2x2 = 258,
    FlatTrack4x4 = 259,
    FlatTrack2x4 = 260,
    FlatTrack1x5 = 261,
    FlatTrack1x1A = 262,
    FlatTrack1x4B = 263,
    FlatTrack1x1B = 264,
    FlatTrack1x4C = 265,
    FlatTrack3x3 = 266,
    LeftLargeCorkscrewUp = 267,
    RightLargeCorkscrewUp = 268,
    LeftLargeCorkscrewDown = 269,
    RightLargeCorkscrewDown = 270,
    LeftMediumHalfLoopUp = 271,
    RightMediumHalfLoopUp = 272,
    LeftMediumHalfLoopDown = 273,
    RightMediumHalfLoopDown = 274,
    LeftZeroGRollUp = 275,
    RightZeroGRollUp = 276,
    LeftZeroGRollDown = 277,
    RightZeroGRollDown = 278,
    LeftLargeZeroGRollUp = 279,
    RightLargeZeroGRollUp = 280,
    LeftLargeZeroGRollDown = 281,
    RightLargeZeroGRollDown = 282,
    LeftFlyerLargeHalfLoopUninvertedUp = 283,
    RightFlyerLargeHalfLoopUninvertedUp = 284,
    LeftFlyerLargeHalfLoopInvertedDown = 285,
    RightFlyerLargeHalfLoopInvertedDown = 286,
    LeftFlyerLargeHalfLoopInvertedUp = 287,
    RightFlyerLargeHalfLoopInvertedUp = 288,
    LeftFlyerLargeHalfLoopUninvertedDown = 289,
    RightFlyerLargeHalfLoopUninvertedDown = 290,
    FlyerHalfLoopInvertedUp = 291,
    FlyerHalfLoopUninvertedDown = 292,
    LeftEighthToDiagUp25 = 293,
    RightEighthToDiagUp25 = 294,
    LeftEighthToDiagDown25 = 295,
    RightEighthToDiagDown25 = 296,
    LeftEighthToOrthogonalUp25 = 297,
    RightEighthToOrthogonalUp25 = 298,
    LeftEighthToOrthogonalDown25 = 299,
    RightEighthToOrthogonalDown25 = 300,
    DiagUp25ToLeftBankedUp25 = 301,
    DiagUp25ToRightBankedUp25 = 302,
    DiagLeftBankedUp25ToUp25 = 303,
    DiagRightBankedUp25ToUp25 = 304,
    DiagDown25ToLeftBankedDown25 = 305,
    DiagDown25ToRightBankedDown25 = 306,
    DiagLeftBankedDown25ToDown25 = 307,
    DiagRightBankedDown25ToDown25 = 308,
    DiagLeftBankedFlatToLeftBankedUp25 = 309,
    DiagRightBankedFlatToRightBankedUp25 = 310,
    DiagLeftBankedUp25ToLeftBankedFlat = 311,
    DiagRightBankedUp25ToRightBankedFlat = 312,
    DiagLeftBankedFlatToLeftBankedDown25 = 313,
    DiagRightBankedFlatToRightBankedDown25 = 314,
    DiagLeftBankedDown25ToLeftBankedFlat = 315,
    DiagRightBankedDown25ToRightBankedFlat = 316,
    DiagFlatToLeftBankedUp25 = 317,
    DiagFlatToRightBankedUp25 = 318,
    DiagLeftBankedUp25ToFlat = 319,
    DiagRightBankedUp25ToFlat = 320,
    DiagFlatToLeftBankedDown25 = 321,
    DiagFlatToRightBankedDown25 = 322,
    DiagLeftBankedDown25ToFlat = 323,
    DiagRightBankedDown25ToFlat = 324,
    DiagUp25LeftBanked = 325,
    DiagUp25RightBanked = 326,
    DiagDown25LeftBanked = 327,
    DiagDown25RightBanked = 328,
    LeftEighthBankToDiagUp25 = 329,
    RightEighthBankToDiagUp25 = 330,
    LeftEighthBankToDiagDown25 = 331,
    RightEighthBankToDiagDown25 = 332,
    LeftEighthBankToOrthogonalUp25 = 333,
    RightEighthBankToOrthogonalUp25 = 334,
    LeftEighthBankToOrthogonalDown25 = 335,
    RightEighthBankToOrthogonalDown25 = 336,
    DiagBrakes = 337,
    DiagBlockBrakes = 338,
    Down25Brakes = 339,
    DiagBooster = 340,
    DiagFlatToUp60LongBase = 341,
    DiagUp60ToFlatLongBase = 342,
    DiagFlatToDown60LongBase = 343,
    DiagDown60ToFlatLongBase = 344,
    LeftEighthDiveLoopUpToOrthogonal = 345,
    RightEighthDiveLoopUpToOrthogonal = 346,
    LeftEighthDiveLoopDownToDiag = 347,
    RightEighthDiveLoopDownToDiag = 348,
    DiagDown25Brakes = 349,
}

impl TrackElemType {
    #[inline]
    pub const fn id(&self) -> u16 {
        *self as u16
    }
}

impl TryFrom<u16> for TrackElemType {
    type Error = TrackError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        TrackElemType::from_id(value).ok_or(TrackError::UnknownTrackTypeId(value))
    }
}

lazy_static::lazy_static! {
    static ref TYPES_BY_NAME: FxHashMap<&'static str, TrackElemType> =
        TrackElemType::ALL.iter().map(|t| (t.name(), *t)).collect();
}

impl FromStr for TrackElemType {
    type Err = TrackError;

    /// Accepts either the type's name (`LeftQuarterTurn3Tiles`) or its numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u16>() {
            return TrackElemType::try_from(id);
        }
        TYPES_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| TrackError::UnknownTrackTypeName(s.to_string()))
    }
}

#[rustfmt::skip]
mod c {
    pub(crate) const CHAIN_LIFT: u8    = 0b0000_0001;
    pub(crate) const GHOST: u8         = 0b0000_0010;
    pub(crate) const HIGHLIGHT: u8     = 0b0000_0100;
    pub(crate) const BRAKE_CLOSED: u8  = 0b0000_1000;
    pub(crate) const TAKING_PHOTO: u8  = 0b0001_0000;
}

/// A placed piece of track, as seen by a painter for one of its tiles.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackElement {
    track_type: TrackElemType,
    sequence: u8,
    colour_scheme: u8,
    flags: u8,
}

impl TrackElement {
    pub const fn new(track_type: TrackElemType) -> TrackElement {
        TrackElement {
            track_type,
            sequence: 0,
            colour_scheme: 0,
            flags: 0,
        }
    }

    pub const fn track_type(&self) -> TrackElemType {
        self.track_type
    }
    /// Index of this tile within its (possibly multi-tile) piece
    pub const fn sequence(&self) -> u8 {
        self.sequence
    }
    pub const fn colour_scheme(&self) -> u8 {
        self.colour_scheme
    }
    pub const fn has_chain(&self) -> bool {
        self.flags & c::CHAIN_LIFT != 0
    }
    pub const fn is_ghost(&self) -> bool {
        self.flags & c::GHOST != 0
    }
    pub const fn is_highlighted(&self) -> bool {
        self.flags & c::HIGHLIGHT != 0
    }
    pub const fn is_brake_closed(&self) -> bool {
        self.flags & c::BRAKE_CLOSED != 0
    }
    pub const fn is_taking_photo(&self) -> bool {
        self.flags & c::TAKING_PHOTO != 0
    }

    pub const fn with_sequence(self, sequence: u8) -> TrackElement {
        TrackElement { sequence, ..self }
    }

    pub fn with_colour_scheme(self, colour_scheme: u8) -> Result<TrackElement> {
        ensure!(
            (colour_scheme as usize) < NUM_COLOUR_SCHEMES,
            TrackError::ColourSchemeOutOfRange(colour_scheme)
        );
        Ok(TrackElement {
            colour_scheme,
            ..self
        })
    }

    const fn with_flag(self, flag: u8, value: bool) -> TrackElement {
        TrackElement {
            flags: if value {
                self.flags | flag
            } else {
                self.flags & !flag
            },
            ..self
        }
    }

    pub const fn with_chain(self, value: bool) -> TrackElement {
        self.with_flag(c::CHAIN_LIFT, value)
    }
    pub const fn with_ghost(self, value: bool) -> TrackElement {
        self.with_flag(c::GHOST, value)
    }
    pub const fn with_highlight(self, value: bool) -> TrackElement {
        self.with_flag(c::HIGHLIGHT, value)
    }
    pub const fn with_brake_closed(self, value: bool) -> TrackElement {
        self.with_flag(c::BRAKE_CLOSED, value)
    }
    pub const fn with_photo(self, value: bool) -> TrackElement {
        self.with_flag(c::TAKING_PHOTO, value)
    }
}

impl Debug for TrackElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}#{}(scheme {}, flags {:05b})",
            self.track_type.name(),
            self.sequence,
            self.colour_scheme,
            self.flags
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_round_trip() {
        for (i, t) in TrackElemType::ALL.iter().enumerate() {
            assert_eq!(t.id() as usize, i);
            assert_eq!(TrackElemType::try_from(t.id()), Ok(*t));
        }
        assert_eq!(TrackElemType::Up90.id(), 126);
        assert_eq!(TrackElemType::BlockBrakes.id(), 216);
        assert_eq!(
            TrackElemType::try_from(10_000),
            Err(TrackError::UnknownTrackTypeId(10_000))
        );
    }

    #[test]
    fn parse_by_name_or_id() {
        assert_eq!(
            "LeftBarrelRollUpToDown".parse::<TrackElemType>(),
            Ok(TrackElemType::LeftBarrelRollUpToDown)
        );
        assert_eq!("141".parse::<TrackElemType>(), Ok(TrackElemType::DiagFlat));
        assert!(matches!(
            "Teacup".parse::<TrackElemType>(),
            Err(TrackError::UnknownTrackTypeName(_))
        ));
    }

    #[test]
    fn flags_are_independent() {
        let element = TrackElement::new(TrackElemType::Flat)
            .with_chain(true)
            .with_ghost(true)
            .with_sequence(3);
        assert!(element.has_chain());
        assert!(element.is_ghost());
        assert!(!element.is_highlighted());
        assert_eq!(element.sequence(), 3);
        let element = element.with_chain(false);
        assert!(!element.has_chain());
        assert!(element.is_ghost());
    }

    #[test]
    fn colour_scheme_is_validated() {
        let element = TrackElement::new(TrackElemType::Flat);
        assert_eq!(element.with_colour_scheme(3).unwrap().colour_scheme(), 3);
        let err = element.with_colour_scheme(4).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrackError>(),
            Some(&TrackError::ColourSchemeOutOfRange(4))
        );
    }
}
