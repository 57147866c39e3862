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


//! Helpers for tests that paint track into a [RecordingSession].

use trackpaint_core::{
    direction::Direction,
    ride::Ride,
    track_element::{TrackElemType, TrackElement},
};

use crate::{
    paint_track,
    recorder::{PaintCommand, RecordingSession},
    track::{get_track_paint_function, SUPPORTED_TRACK_TYPES},
};

static LOG_INIT: std::sync::Once = std::sync::Once::new();

/// Installs a log subscriber for the test binary. Safe to call from every test.
pub fn init_logging() {
    LOG_INIT.call_once(|| {
        const DEFAULT_LOG_FILTER: &str = "info,trackpaint_hybrid=debug";

        let env_value =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let env_value = if env_value.is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            env_value
        };

        let filter = tracing_subscriber::EnvFilter::try_new(&env_value)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        // Another harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Calls the painter for `track_type` directly, bypassing colour setup.
/// Returns `None` if the hybrid coaster has no painter for it.
pub fn record_piece(
    track_type: TrackElemType,
    sequence: u8,
    direction: Direction,
    height: i32,
) -> Option<Vec<PaintCommand>> {
    record_piece_with(&Ride::default(), TrackElement::new(track_type), sequence, direction, height)
}

/// Like [record_piece], for a specific ride and element.
pub fn record_piece_with(
    ride: &Ride,
    track_element: TrackElement,
    sequence: u8,
    direction: Direction,
    height: i32,
) -> Option<Vec<PaintCommand>> {
    let paint = get_track_paint_function(track_element.track_type())?;
    let element = track_element.with_sequence(sequence);
    let mut session = RecordingSession::new();
    paint(&mut session, ride, sequence, direction, height, &element);
    Some(session.take_commands())
}

/// Paints `track_element` through [paint_track] and hands back the session.
pub fn paint_element(
    ride: &Ride,
    track_element: &TrackElement,
    direction: Direction,
    height: i32,
) -> RecordingSession {
    let mut session = RecordingSession::new();
    paint_track(&mut session, ride, track_element, direction, height);
    session
}

/// Every `(track type, sequence)` tile the hybrid coaster can draw.
pub fn all_tiles() -> impl Iterator<Item = (TrackElemType, u8)> {
    SUPPORTED_TRACK_TYPES
        .iter()
        .flat_map(|&(track_type, count)| (0..count).map(move |sequence| (track_type, sequence)))
}
