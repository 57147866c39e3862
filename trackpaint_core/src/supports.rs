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


use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Visual style of the wooden support posts under a piece of track.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum WoodenSupportType {
    #[default]
    Truss,
    Mine,
}

/// Footprint of a wooden support on its tile.
///
/// The two straight variants run along one tile axis each; the corner variants
/// hold up the track where it passes over one corner of the tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum WoodenSupportSubType {
    NeSw = 0,
    NwSe = 1,
    Corner0 = 2,
    Corner1 = 3,
    Corner2 = 4,
    Corner3 = 5,
}

#[rustfmt::skip]
const ROTATED_SUB_TYPES: [[WoodenSupportSubType; 4]; 6] = {
    use WoodenSupportSubType::*;
    [
        [NeSw,    NwSe,    NeSw,    NwSe],
        [NwSe,    NeSw,    NwSe,    NeSw],
        [Corner0, Corner1, Corner2, Corner3],
        [Corner1, Corner2, Corner3, Corner0],
        [Corner2, Corner3, Corner0, Corner1],
        [Corner3, Corner0, Corner1, Corner2],
    ]
};

impl WoodenSupportSubType {
    /// Turns a sub-type described for direction 0 to face `direction`.
    #[inline]
    pub const fn rotated(self, direction: Direction) -> WoodenSupportSubType {
        ROTATED_SUB_TYPES[self as usize][direction.index()]
    }
}

/// Extra sloped bracing drawn on top of the support posts where the track above
/// it changes pitch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum WoodenSupportTransitionType {
    #[default]
    None,
    FlatToUp25,
    Up25ToFlat,
    Up25,
    Up25ToUp60,
    Up60ToUp25,
    Up60,
    FlatToUp60,
    Up60ToFlat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_supports_swap_on_odd_directions() {
        use WoodenSupportSubType::*;
        assert_eq!(NeSw.rotated(Direction::NE), NeSw);
        assert_eq!(NeSw.rotated(Direction::SE), NwSe);
        assert_eq!(NwSe.rotated(Direction::SW), NwSe);
        assert_eq!(NwSe.rotated(Direction::NW), NeSw);
    }

    #[test]
    fn corners_rotate_one_step_per_turn() {
        use WoodenSupportSubType::*;
        let corners = [Corner0, Corner1, Corner2, Corner3];
        for (i, corner) in corners.iter().enumerate() {
            for d in Direction::ALL {
                assert_eq!(corner.rotated(d), corners[(i + d.index()) % 4]);
            }
        }
    }
}
