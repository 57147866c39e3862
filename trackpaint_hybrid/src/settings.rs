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


use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use trackpaint_core::ride::Ride;

use crate::recorder::{RecordingSession, SupportHeight};

/// Settings for the dump tool: which ride to paint and the state of the tile
/// it is painted onto.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    pub ride: Ride,
    /// Base height used when none is given on the command line
    pub default_height: i32,
    /// Clearance the tile already has before the track is painted
    pub initial_support_height: i32,
    pub initial_support_slope: u8,
}

pub const FILENAME: &str = "trackpaint.ron";

/// Two land height steps above the ground
const DEFAULT_BASE_HEIGHT: i32 = 16;

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ride: Ride::default(),
            default_height: DEFAULT_BASE_HEIGHT,
            initial_support_height: 0,
            initial_support_slope: 0,
        }
    }
}

impl RenderSettings {
    pub fn recording_session(&self) -> RecordingSession {
        RecordingSession::with_initial_support(SupportHeight {
            height: self.initial_support_height,
            slope: self.initial_support_slope,
        })
    }
}

/// Loads settings from `path`, or the defaults if it doesn't exist.
pub fn load(path: &Path) -> Result<RenderSettings> {
    info!("Loading settings from {}", path.display());
    if !path.exists() {
        info!("No settings found; using defaults");
        return Ok(Default::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    let settings = parse(&contents).with_context(|| format!("Parsing {}", path.display()))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn parse(contents: &str) -> Result<RenderSettings> {
    Ok(ron::from_str::<RenderSettings>(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_core::supports::WoodenSupportType;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = parse("(default_height: 64)").unwrap();
        assert_eq!(settings.default_height, 64);
        assert_eq!(settings.ride, Ride::default());
        assert_eq!(settings.initial_support_height, 0);
    }

    #[test]
    fn default_base_height_sits_on_the_ground() {
        let settings = parse("(initial_support_slope: 0)").unwrap();
        assert_eq!(settings.default_height, 16);
        assert_eq!(settings.initial_support_height, 0);
    }

    #[test]
    fn ride_colours_and_supports() {
        let settings = parse(
            "(ride: (track_colours: [(main: 1, additional: 2, supports: 3)], \
             wooden_support_type: Mine))",
        );
        // A short colour array doesn't fit the fixed scheme count
        assert!(settings.is_err());

        let settings = parse(
            "(ride: (track_colours: [(main: 1), (main: 5), (main: 5), (main: 5)], \
             wooden_support_type: Mine))",
        )
        .unwrap();
        assert_eq!(settings.ride.wooden_support_type, WoodenSupportType::Mine);
        assert_eq!(settings.ride.track_colours[0].main, 1);
        assert_eq!(settings.ride.track_colours[0].supports, 24);
    }

    #[test]
    fn missing_file_is_default() {
        let settings = load(Path::new("/nonexistent/trackpaint.ron")).unwrap();
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn initial_support_reaches_the_session() {
        let settings = RenderSettings {
            initial_support_height: 40,
            ..Default::default()
        };
        let session = settings.recording_session();
        assert_eq!(session.general_support().height, 40);
    }
}
