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


//! Track painter for the hybrid coaster.
//!
//! [paint_track] is the entry point the renderer calls for each track element
//! on a tile. It prepares the session's colour templates and hands off to the
//! per-piece painter returned by [track::get_track_paint_function].

use tracing::{debug, trace};
use trackpaint_core::{
    direction::Direction,
    image::{FilterPalette, ImageId},
    ride::Ride,
    session::PaintSession,
    track_element::TrackElement,
};

pub mod recorder;
pub mod settings;
pub mod track;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Colour templates for the track and its supports, in that order.
pub fn colour_templates(ride: &Ride, track_element: &TrackElement) -> (ImageId, ImageId) {
    let colours = ride.track_colour(track_element.colour_scheme());
    let track = ImageId::default()
        .with_primary(colours.main)
        .with_secondary(colours.additional);
    let supports = ImageId::default().with_primary(colours.supports);

    let palette = if track_element.is_ghost() {
        Some(FilterPalette::Ghost)
    } else if track_element.is_highlighted() {
        Some(FilterPalette::Highlight)
    } else {
        None
    };
    match palette {
        Some(palette) => (
            track.with_transparency(palette),
            supports.with_transparency(palette),
        ),
        None => (track, supports),
    }
}

/// Paints one track element.
///
/// Elements the hybrid coaster has no painter for are skipped.
pub fn paint_track(
    session: &mut dyn PaintSession,
    ride: &Ride,
    track_element: &TrackElement,
    direction: Direction,
    height: i32,
) {
    let track_type = track_element.track_type();
    let Some(paint) = track::get_track_paint_function(track_type) else {
        debug!("No hybrid coaster painter for {:?}, skipping", track_type);
        return;
    };
    trace!(
        "Painting {:?} seq {} facing {:?} at {}",
        track_type,
        track_element.sequence(),
        direction,
        height
    );
    let (track_colours, support_colours) = colour_templates(ride, track_element);
    session.set_colours(track_colours, support_colours);
    session.set_wooden_supports_prepend_to(None);
    paint(
        session,
        ride,
        track_element.sequence(),
        direction,
        height,
        track_element,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{PaintCommand, RecordingSession};
    use trackpaint_core::{ride::TrackColour, track_element::TrackElemType};

    fn two_scheme_ride() -> Ride {
        let mut ride = Ride::default();
        ride.track_colours[2] = TrackColour {
            main: 3,
            additional: 7,
            supports: 11,
        };
        ride
    }

    #[test]
    fn colours_follow_the_element_scheme() {
        let ride = two_scheme_ride();
        let element = TrackElement::new(TrackElemType::Flat)
            .with_colour_scheme(2)
            .unwrap();
        let (track, supports) = colour_templates(&ride, &element);
        assert_eq!(track.primary(), Some(3));
        assert_eq!(track.secondary(), Some(7));
        assert_eq!(supports.primary(), Some(11));
        assert_eq!(supports.secondary(), None);
    }

    #[test]
    fn ghost_wins_over_highlight() {
        let ride = Ride::default();
        let highlighted = TrackElement::new(TrackElemType::Flat).with_highlight(true);
        let (track, supports) = colour_templates(&ride, &highlighted);
        assert_eq!(track.palette(), Some(FilterPalette::Highlight));
        assert_eq!(supports.palette(), Some(FilterPalette::Highlight));

        let ghost = highlighted.with_ghost(true);
        let (track, supports) = colour_templates(&ride, &ghost);
        assert_eq!(track.palette(), Some(FilterPalette::Ghost));
        assert_eq!(supports.palette(), Some(FilterPalette::Ghost));
        assert_eq!(track.primary(), None);
    }

    #[test]
    fn paint_track_uses_templates_and_resets_prepend() {
        crate::test_support::init_logging();
        let ride = two_scheme_ride();
        let element = TrackElement::new(TrackElemType::Up60)
            .with_colour_scheme(2)
            .unwrap();
        let mut session = RecordingSession::new();
        session.set_wooden_supports_prepend_to(Some(trackpaint_core::session::PaintHandle(99)));
        paint_track(&mut session, &ride, &element, Direction::NE, 48);

        let image = session
            .commands()
            .iter()
            .find_map(|c| match c {
                PaintCommand::Image { image, .. } => Some(*image),
                _ => None,
            })
            .unwrap();
        assert_eq!(image.primary(), Some(3));
        assert!(session.commands().iter().all(|c| match c {
            PaintCommand::Supports { prepend_to, .. } => {
                *prepend_to != Some(trackpaint_core::session::PaintHandle(99))
            }
            _ => true,
        }));
    }

    #[test]
    fn unsupported_elements_are_skipped() {
        crate::test_support::init_logging();
        let mut session = RecordingSession::new();
        let element = TrackElement::new(TrackElemType::LeftVerticalLoop);
        paint_track(&mut session, &Ride::default(), &element, Direction::SW, 0);
        assert!(session.commands().is_empty());
    }
}
