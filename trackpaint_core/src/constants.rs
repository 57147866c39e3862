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


//! Numeric conventions shared by all painters.
//!
//! Heights are in world pixels. One height step ("land height unit") is 8 px.

/// World pixels per land height step
pub const HEIGHT_STEP: i32 = 8;

/// Vertical tunnels are stored in units of this many pixels
pub const VERTICAL_TUNNEL_UNIT: i32 = 16;

/// Support-height value meaning "no supports may be placed on this segment"
pub const SUPPORT_HEIGHT_UNSET: u16 = 0xFFFF;

/// Slope value recorded alongside a general support height when the painter
/// does not care about the slope of the supports above it
pub const DEFAULT_GENERAL_SUPPORT_SLOPE: u8 = 0x20;

/// Clearance most flat and gently sloped pieces reserve above their base height
pub const DEFAULT_GENERAL_SUPPORT_HEIGHT: i32 = 32;

/// Number of track colour schemes a ride carries
pub const NUM_COLOUR_SCHEMES: usize = 4;
