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

use crate::{constants::NUM_COLOUR_SCHEMES, image::Colour, supports::WoodenSupportType};

/// One of a ride's track colour schemes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackColour {
    pub main: Colour,
    pub additional: Colour,
    pub supports: Colour,
}

impl Default for TrackColour {
    fn default() -> Self {
        // Dark green rails on light brown timber
        Self {
            main: 14,
            additional: 9,
            supports: 24,
        }
    }
}

/// The parts of a ride that affect how its track is painted.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ride {
    pub track_colours: [TrackColour; NUM_COLOUR_SCHEMES],
    pub wooden_support_type: WoodenSupportType,
}

impl Ride {
    /// Colour scheme `index`, falling back to the main scheme if out of range.
    pub fn track_colour(&self, index: u8) -> &TrackColour {
        self.track_colours
            .get(index as usize)
            .unwrap_or(&self.track_colours[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_scheme_falls_back() {
        let mut ride = Ride::default();
        ride.track_colours[2].main = 3;
        assert_eq!(ride.track_colour(2).main, 3);
        assert_eq!(ride.track_colour(9), &ride.track_colours[0]);
    }
}
