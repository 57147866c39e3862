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


/// Family of tunnel cut-out sprites a ride uses where its track enters terrain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TunnelGroup {
    Square,
    Inverted,
}

/// Shape of the tunnel mouth, which depends on the pitch of the track at the tile edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TunnelSubType {
    Flat,
    SlopeStart,
    SlopeEnd,
    FlatTo25Deg,
}

/// A tunnel mouth registered on one edge of a tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TunnelEntry {
    pub height: i32,
    pub group: TunnelGroup,
    pub sub_type: TunnelSubType,
}
