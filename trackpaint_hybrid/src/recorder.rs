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


//! A [PaintSession] that records what painters ask for instead of drawing it.
//!
//! Used by the dump tool, the benches and the tests. It keeps the same support
//! and tunnel bookkeeping the engine does, so a tile's clearances can be
//! inspected after painting.

use trackpaint_core::{
    constants::{DEFAULT_GENERAL_SUPPORT_SLOPE, VERTICAL_TUNNEL_UNIT},
    coordinates::{BoundBoxXYZ, CoordsXYZ},
    direction::Direction,
    image::ImageId,
    ride::Ride,
    segments::{PaintSegment, Segments},
    session::{PaintHandle, PaintSession},
    supports::{WoodenSupportSubType, WoodenSupportTransitionType, WoodenSupportType},
    track_element::{TrackElemType, TrackElement},
    tunnels::{TunnelEntry, TunnelGroup, TunnelSubType},
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ImageLayer {
    Parent,
    Child,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SupportKind {
    WoodenA,
    WoodenB,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TunnelEdge {
    Left,
    Right,
}

/// One call a painter made into the session, in call order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PaintCommand {
    Image {
        layer: ImageLayer,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
        handle: PaintHandle,
    },
    Supports {
        kind: SupportKind,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        height: i32,
        image: ImageId,
        transition: WoodenSupportTransitionType,
        direction: Direction,
        prepend_to: Option<PaintHandle>,
    },
    Tunnel {
        edge: TunnelEdge,
        entry: TunnelEntry,
    },
    VerticalTunnel {
        height: i32,
    },
    SegmentSupportHeight {
        segments: Segments,
        height: u16,
        slope: u8,
    },
    GeneralSupportHeight {
        height: i32,
    },
    Station {
        track_type: TrackElemType,
        direction: Direction,
        height: i32,
    },
    OnRidePhoto {
        direction: Direction,
        height: i32,
        taking_photo: bool,
    },
}

impl PaintCommand {
    pub fn is_image(&self) -> bool {
        matches!(self, PaintCommand::Image { .. })
    }
}

/// Clearance above part of a tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SupportHeight {
    pub height: i32,
    pub slope: u8,
}

pub struct RecordingSession {
    track_colours: ImageId,
    support_colours: ImageId,
    prepend_to: Option<PaintHandle>,
    next_handle: u32,
    commands: Vec<PaintCommand>,
    left_tunnels: Vec<TunnelEntry>,
    right_tunnels: Vec<TunnelEntry>,
    /// In units of [VERTICAL_TUNNEL_UNIT]
    vertical_tunnel: Option<i32>,
    segment_supports: [SupportHeight; 9],
    general_support: SupportHeight,
    initial_support: SupportHeight,
}

impl RecordingSession {
    pub fn new() -> RecordingSession {
        Self::with_initial_support(SupportHeight {
            height: 0,
            slope: 0,
        })
    }

    /// A session whose tile clearances start at `initial` rather than ground
    /// level.
    pub fn with_initial_support(initial: SupportHeight) -> RecordingSession {
        RecordingSession {
            track_colours: ImageId::default(),
            support_colours: ImageId::default(),
            prepend_to: None,
            next_handle: 0,
            commands: Vec::new(),
            left_tunnels: Vec::new(),
            right_tunnels: Vec::new(),
            vertical_tunnel: None,
            segment_supports: [initial; 9],
            general_support: initial,
            initial_support: initial,
        }
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn images(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands.iter().filter(|c| c.is_image())
    }

    pub fn left_tunnels(&self) -> &[TunnelEntry] {
        &self.left_tunnels
    }

    pub fn right_tunnels(&self) -> &[TunnelEntry] {
        &self.right_tunnels
    }

    /// Height of the vertical tunnel in world pixels, if one was set
    pub fn vertical_tunnel_height(&self) -> Option<i32> {
        self.vertical_tunnel.map(|units| units * VERTICAL_TUNNEL_UNIT)
    }

    pub fn segment_support(&self, segment: PaintSegment) -> SupportHeight {
        self.segment_supports[segment as usize]
    }

    pub fn general_support(&self) -> SupportHeight {
        self.general_support
    }

    /// Forgets everything painted so far, ready for the next tile. Colours are
    /// kept.
    pub fn clear(&mut self) {
        self.prepend_to = None;
        self.next_handle = 0;
        self.commands.clear();
        self.left_tunnels.clear();
        self.right_tunnels.clear();
        self.vertical_tunnel = None;
        self.segment_supports = [self.initial_support; 9];
        self.general_support = self.initial_support;
    }

    fn add_image(
        &mut self,
        layer: ImageLayer,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle> {
        let handle = PaintHandle(self.next_handle);
        self.next_handle += 1;
        self.commands.push(PaintCommand::Image {
            layer,
            image,
            offset,
            bound_box,
            handle,
        });
        Some(handle)
    }

    fn add_supports(
        &mut self,
        kind: SupportKind,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        height: i32,
        image: ImageId,
        transition: WoodenSupportTransitionType,
        direction: Direction,
    ) -> bool {
        self.commands.push(PaintCommand::Supports {
            kind,
            support_type,
            sub_type,
            height,
            image,
            transition,
            direction,
            prepend_to: self.prepend_to,
        });
        true
    }

    fn push_tunnel(&mut self, edge: TunnelEdge, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        let entry = TunnelEntry {
            height,
            group,
            sub_type,
        };
        match edge {
            TunnelEdge::Left => self.left_tunnels.push(entry),
            TunnelEdge::Right => self.right_tunnels.push(entry),
        }
        self.commands.push(PaintCommand::Tunnel { edge, entry });
    }
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSession for RecordingSession {
    fn track_colours(&self) -> ImageId {
        self.track_colours
    }

    fn support_colours(&self) -> ImageId {
        self.support_colours
    }

    fn set_colours(&mut self, track: ImageId, supports: ImageId) {
        self.track_colours = track;
        self.support_colours = supports;
    }

    fn wooden_supports_prepend_to(&self) -> Option<PaintHandle> {
        self.prepend_to
    }

    fn set_wooden_supports_prepend_to(&mut self, handle: Option<PaintHandle>) {
        self.prepend_to = handle;
    }

    fn add_image_as_parent(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle> {
        self.add_image(ImageLayer::Parent, image, offset, bound_box)
    }

    fn add_image_as_child(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintHandle> {
        self.add_image(ImageLayer::Child, image, offset, bound_box)
    }

    fn wooden_a_supports_paint_setup(
        &mut self,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        height: i32,
        image_template: ImageId,
        transition: WoodenSupportTransitionType,
        direction: Direction,
    ) -> bool {
        self.add_supports(
            SupportKind::WoodenA,
            support_type,
            sub_type,
            height,
            image_template,
            transition,
            direction,
        )
    }

    fn wooden_b_supports_paint_setup(
        &mut self,
        support_type: WoodenSupportType,
        sub_type: WoodenSupportSubType,
        height: i32,
        image_template: ImageId,
        transition: WoodenSupportTransitionType,
        direction: Direction,
    ) -> bool {
        self.add_supports(
            SupportKind::WoodenB,
            support_type,
            sub_type,
            height,
            image_template,
            transition,
            direction,
        )
    }

    fn push_tunnel_left(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        self.push_tunnel(TunnelEdge::Left, height, group, sub_type);
    }

    fn push_tunnel_right(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        self.push_tunnel(TunnelEdge::Right, height, group, sub_type);
    }

    fn set_vertical_tunnel(&mut self, height: i32) {
        self.vertical_tunnel = Some(height / VERTICAL_TUNNEL_UNIT);
        self.commands.push(PaintCommand::VerticalTunnel { height });
    }

    fn set_segment_support_height(&mut self, segments: Segments, height: u16, slope: u8) {
        for segment in segments.iter() {
            self.segment_supports[segment as usize] = SupportHeight {
                height: i32::from(height),
                slope,
            };
        }
        self.commands.push(PaintCommand::SegmentSupportHeight {
            segments,
            height,
            slope,
        });
    }

    fn set_general_support_height(&mut self, height: i32) {
        if height > self.general_support.height {
            self.general_support = SupportHeight {
                height,
                slope: DEFAULT_GENERAL_SUPPORT_SLOPE,
            };
        }
        self.commands.push(PaintCommand::GeneralSupportHeight { height });
    }

    fn draw_station(
        &mut self,
        _ride: &Ride,
        direction: Direction,
        height: i32,
        track_element: &TrackElement,
    ) {
        self.commands.push(PaintCommand::Station {
            track_type: track_element.track_type(),
            direction,
            height,
        });
    }

    fn draw_on_ride_photo(&mut self, direction: Direction, height: i32, track_element: &TrackElement) {
        self.commands.push(PaintCommand::OnRidePhoto {
            direction,
            height,
            taking_photo: track_element.is_taking_photo(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_core::constants::SUPPORT_HEIGHT_UNSET;

    #[test]
    fn general_support_only_rises() {
        let mut session = RecordingSession::new();
        session.set_general_support_height(48);
        session.set_general_support_height(32);
        assert_eq!(session.general_support().height, 48);
        assert_eq!(session.general_support().slope, 0x20);
        assert_eq!(session.commands().len(), 2);
    }

    #[test]
    fn segment_heights_are_set_per_segment() {
        let mut session = RecordingSession::new();
        let raised = Segments::of(&[PaintSegment::Top, PaintSegment::Left]);
        session.set_segment_support_height(raised, 48, 0x20);
        session.set_segment_support_height(
            Segments::of(&[PaintSegment::Centre]),
            SUPPORT_HEIGHT_UNSET,
            0,
        );
        assert_eq!(
            session.segment_support(PaintSegment::Left),
            SupportHeight {
                height: 48,
                slope: 0x20
            }
        );
        assert_eq!(
            session.segment_support(PaintSegment::Centre).height,
            i32::from(SUPPORT_HEIGHT_UNSET)
        );
        assert_eq!(session.segment_support(PaintSegment::Right).height, 0);
    }

    #[test]
    fn tunnels_go_to_their_edge() {
        let mut session = RecordingSession::new();
        session.push_tunnel_rotated(Direction::NE, 16, TunnelGroup::Square, TunnelSubType::Flat);
        session.push_tunnel_rotated(Direction::SE, 24, TunnelGroup::Square, TunnelSubType::SlopeEnd);
        session.push_tunnel_rotated(Direction::NW, 32, TunnelGroup::Square, TunnelSubType::Flat);
        assert_eq!(session.left_tunnels().len(), 1);
        assert_eq!(session.right_tunnels().len(), 2);
        assert_eq!(session.right_tunnels()[0].height, 24);
    }

    #[test]
    fn vertical_tunnel_is_stored_in_units() {
        let mut session = RecordingSession::new();
        assert_eq!(session.vertical_tunnel_height(), None);
        session.set_vertical_tunnel(88);
        assert_eq!(session.vertical_tunnel_height(), Some(80));
    }

    #[test]
    fn handles_are_sequential_and_reset_on_clear() {
        let mut session = RecordingSession::new();
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3));
        let first = session.add_image_as_parent(ImageId::new(1), CoordsXYZ::default(), bb);
        let second = session.add_image_as_child(ImageId::new(2), CoordsXYZ::default(), bb);
        assert_eq!(first, Some(PaintHandle(0)));
        assert_eq!(second, Some(PaintHandle(1)));
        session.clear();
        assert!(session.commands().is_empty());
        let third = session.add_image_as_parent(ImageId::new(3), CoordsXYZ::default(), bb);
        assert_eq!(third, Some(PaintHandle(0)));
    }

    #[test]
    fn rotated_children_and_b_supports() {
        let mut session = RecordingSession::new();
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3));
        session.add_image_as_parent(ImageId::new(1), CoordsXYZ::default(), bb);
        let child = session.add_image_as_child_rotated(
            Direction::NW,
            ImageId::new(2),
            CoordsXYZ::new(0, 4, 8),
            bb,
        );
        assert_eq!(child, Some(PaintHandle(1)));
        session.wooden_b_supports_paint_setup_rotated(
            WoodenSupportType::Mine,
            WoodenSupportSubType::Corner0,
            Direction::SW,
            16,
            ImageId::default(),
            WoodenSupportTransitionType::None,
        );

        assert_eq!(session.images().count(), 2);
        match &session.commands()[1] {
            PaintCommand::Image {
                layer,
                offset,
                bound_box,
                ..
            } => {
                assert_eq!(*layer, ImageLayer::Child);
                assert_eq!(*offset, CoordsXYZ::new(4, 0, 8));
                assert_eq!(*bound_box, bb.rotated(Direction::NW));
            }
            other => panic!("unexpected command {:?}", other),
        }
        match &session.commands()[2] {
            PaintCommand::Supports { kind, sub_type, .. } => {
                assert_eq!(*kind, SupportKind::WoodenB);
                assert_eq!(*sub_type, WoodenSupportSubType::Corner2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn supports_remember_prepend_handle() {
        let mut session = RecordingSession::new();
        session.set_wooden_supports_prepend_to(Some(PaintHandle(4)));
        let drawn = session.wooden_a_supports_paint_setup_rotated(
            WoodenSupportType::Truss,
            WoodenSupportSubType::NeSw,
            Direction::SE,
            0,
            ImageId::default(),
            WoodenSupportTransitionType::None,
        );
        assert!(drawn);
        match &session.commands()[0] {
            PaintCommand::Supports {
                sub_type,
                prepend_to,
                ..
            } => {
                assert_eq!(*sub_type, WoodenSupportSubType::NwSe);
                assert_eq!(*prepend_to, Some(PaintHandle(4)));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
