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


//! The interface painters use to talk to the isometric paint engine.
//!
//! The engine owns per-frame state (the sprite list, tunnel lists, support
//! clearances) and hands painters a `&mut dyn PaintSession` for the tile being
//! drawn. Nothing here is retained by a painter past a single call.

use crate::{
    coordinates::{BoundBoxXYZ, CoordsXYZ},
    direction::Direction,
    image::ImageId,
    ride::Ride,
    segments::Segments,
    supports::{WoodenSupportSubType, WoodenSupportTransitionType, WoodenSupportType},
    track_element::TrackElement,
    tunnels::{TunnelGroup, TunnelSubType},
};

/// Opaque reference to a sprite the engine has accepted, used to chain later
/// sprites in front of or behind it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PaintHandle(pub u32);

pub trait PaintSession {
    /// Colour template for track sprites; painters only change its index.
    fn track_colours(&self) -> ImageId;
    /// Colour template for support sprites
    fn support_colours(&self) -> ImageId;
    fn set_colours(&mut self, track: ImageId, supports: ImageId);

    /// Sprite that wooden supports drawn for this tile must be sorted behind,
    /// if any. Steep pieces set it so their supports don't poke through the track.
    fn wooden_supports_prepend_to(&self) -> Option<PaintHandle>;
    fn set_wooden_supports_prepend_to(&mut self, handle: Option<PaintHandle>);

    /// Adds a sprite that is sorted on its own bounding box. Returns `None` if
    /// the engine culled it.
    fn add_image_as_parent(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle>;

    /// Adds a sprite that is drawn together with the last parent sprite.
    fn add_image_as_child(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle>;

    /// [PaintSession::add_image_as_parent] with the ground axes of `offset`
    /// and `bound_box` swapped for odd directions.
    fn add_image_as_parent_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle> {
        self.add_image_as_parent(image, offset.rotated(direction), bound_box.rotated(direction))
    }

    /// Hybrid coaster pieces only use parent sprites; child sprites are part of
    /// the engine interface shared with other ride painters.
    fn add_image_as_child_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle> {
        self.add_image_as_child(image, offset.rotated(direction), bound_box.rotated(direction))
    }

    /// Places support posts from the ground up to `height`. Returns true if any
    /// were drawn.
    fn wooden_a_supports_paint_setup(
        &mut self,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        height: i32,
        image_template: ImageId,
        transition: WoodenSupportTransitionType,
        direction: Direction,
    ) -> bool;

    /// Like the A variant, but for the taller B-style posts. Not used by the
    /// hybrid coaster, whose supports are all A-style.
    fn wooden_b_supports_paint_setup(
        &mut self,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        height: i32,
        image_template: ImageId,
        transition: WoodenSupportTransitionType,
        direction: Direction,
    ) -> bool;

    fn wooden_a_supports_paint_setup_rotated(
        &mut self,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        direction: Direction,
        height: i32,
        image_template: ImageId,
        transition: WoodenSupportTransitionType,
    ) -> bool {
        self.wooden_a_supports_paint_setup(
            support_type,
            sub_type.rotated(direction),
            height,
            image_template,
            transition,
            direction,
        )
    }

    fn wooden_b_supports_paint_setup_rotated(
        &mut self,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        direction: Direction,
        height: i32,
        image_template: ImageId,
        transition: WoodenSupportTransitionType,
    ) -> bool {
        self.wooden_b_supports_paint_setup(
            support_type,
            sub_type.rotated(direction),
            height,
            image_template,
            transition,
            direction,
        )
    }

    fn push_tunnel_left(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType);
    fn push_tunnel_right(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType);

    /// Pushes a tunnel on the edge the piece enters from: the left edge for
    /// even directions, the right edge for odd ones.
    fn push_tunnel_rotated(
        &mut self,
        direction: Direction,
        height: i32,
        group: TunnelGroup,
        sub_type: TunnelSubType,
    ) {
        if direction.is_even() {
            self.push_tunnel_left(height, group, sub_type);
        } else {
            self.push_tunnel_right(height, group, sub_type);
        }
    }

    /// Marks a vertical shaft through the terrain at `height` (in world pixels).
    fn set_vertical_tunnel(&mut self, height: i32);

    /// Records the clearance above each of `segments`. See
    /// [crate::constants::SUPPORT_HEIGHT_UNSET].
    fn set_segment_support_height(&mut self, segments: Segments, height: u16, slope: u8);

    /// Raises the whole-tile support clearance to at least `height`.
    fn set_general_support_height(&mut self, height: i32);

    /// Draws platforms, fences and the station tunnel for a station tile.
    fn draw_station(
        &mut self,
        ride: &Ride,
        direction: Direction,
        height: i32,
        track_element: &TrackElement,
    );

    /// Draws the camera pole of an on-ride photo section.
    fn draw_on_ride_photo(&mut self, direction: Direction, height: i32, track_element: &TrackElement);
}
