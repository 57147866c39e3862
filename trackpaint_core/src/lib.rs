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


//! Types shared between ride track painters and the isometric paint engine.
//!
//! Painters are stateless functions that read a [track_element::TrackElement]
//! and push draw commands into a [session::PaintSession]. Everything in this
//! crate is either plain data or a pure function over it.

pub mod constants;
pub mod coordinates;
pub mod direction;
pub mod image;
pub mod ride;
pub mod segments;
pub mod session;
pub mod supports;
pub mod track_element;
pub mod tunnels;
