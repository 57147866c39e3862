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

use cgmath::Vector3;

use crate::direction::Direction;

/// A 3D offset in world pixels. x and y run along the tile grid, z is height.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Debug for CoordsXYZ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}, {}]", self.x, self.y, self.z))
    }
}

impl CoordsXYZ {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same offset, raised by `dz`
    #[inline]
    pub const fn with_z_offset(&self, dz: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z + dz,
        }
    }

    /// Swaps the two ground axes. Sprites placed for odd directions are described
    /// in the direction-0 frame and swapped here.
    #[inline]
    pub const fn swap_xy(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }

    /// Applies the rotation for a direction-0 frame offset as the paint engine does
    /// for the `*_rotated` calls.
    #[inline]
    pub const fn rotated(&self, direction: Direction) -> Self {
        if direction.is_even() {
            *self
        } else {
            self.swap_xy()
        }
    }
}

impl From<CoordsXYZ> for Vector3<i32> {
    fn from(val: CoordsXYZ) -> Self {
        Vector3::new(val.x, val.y, val.z)
    }
}

/// An axis-aligned bounding box used for isometric sorting of a sprite.
///
/// `offset` is the near corner relative to the tile origin and `length` the
/// extent along each axis. A zero length along an axis is legal (flat decals).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct BoundBoxXYZ {
    pub offset: CoordsXYZ,
    pub length: CoordsXYZ,
}

impl Debug for BoundBoxXYZ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("bb{{{:?} + {:?}}}", self.offset, self.length))
    }
}

impl BoundBoxXYZ {
    pub const fn new(offset: CoordsXYZ, length: CoordsXYZ) -> Self {
        Self { offset, length }
    }

    /// Same box, with the near corner raised by `dz`
    #[inline]
    pub const fn with_z_offset(&self, dz: i32) -> Self {
        Self {
            offset: self.offset.with_z_offset(dz),
            length: self.length,
        }
    }

    #[inline]
    pub const fn rotated(&self, direction: Direction) -> Self {
        Self {
            offset: self.offset.rotated(direction),
            length: self.length.rotated(direction),
        }
    }

    /// The minimum and maximum corners of the box
    pub fn extents(&self) -> (Vector3<i32>, Vector3<i32>) {
        let min: Vector3<i32> = self.offset.into();
        let max = min + Vector3::from(self.length);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_swaps_odd_directions() {
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3));
        assert_eq!(bb.rotated(Direction::NE), bb);
        assert_eq!(bb.rotated(Direction::SW), bb);
        assert_eq!(
            bb.rotated(Direction::SE),
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 8), CoordsXYZ::new(20, 32, 3))
        );
        assert_eq!(bb.rotated(Direction::NW).rotated(Direction::NW), bb);
    }

    #[test]
    fn extents_follow_rotation() {
        let track = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3));
        let (min, max) = track.extents();
        assert_eq!(min, Vector3::new(0, 6, 0));
        assert_eq!(max, Vector3::new(32, 26, 3));
        assert_eq!(
            track.rotated(Direction::SE).with_z_offset(16).extents(),
            (Vector3::new(6, 0, 16), Vector3::new(26, 32, 19))
        );
    }
}
