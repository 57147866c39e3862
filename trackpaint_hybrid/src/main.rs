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


use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*};
use trackpaint_core::{
    direction::Direction,
    track_element::{TrackElemType, TrackElement},
};
use trackpaint_hybrid::{paint_track, recorder::PaintCommand, settings, track::sequence_count};

/// Prints the paint commands the hybrid coaster issues for a track piece.
#[derive(Parser, Debug, Clone)]
struct DumpArgs {
    /// Track type, by name (e.g. LeftQuarterTurn3Tiles) or numeric id
    #[arg(short, long)]
    track_type: String,

    /// Direction 0-3, or "all"
    #[arg(short, long, default_value = "all")]
    direction: String,

    /// Base height in world pixels. Defaults to the settings file's value.
    #[arg(long)]
    height: Option<i32>,

    /// Tile within the piece, or "all"
    #[arg(short, long, default_value = "all")]
    sequence: String,

    #[arg(long, default_value = settings::FILENAME)]
    settings: PathBuf,

    #[arg(long, default_value_t = 0)]
    colour_scheme: u8,

    #[arg(long)]
    chain: bool,
}

/// Parses "all" or a single number below `limit`.
fn parse_range(value: &str, limit: u8, what: &str) -> Result<Vec<u8>> {
    if value.eq_ignore_ascii_case("all") {
        return Ok((0..limit).collect());
    }
    let parsed: u8 = value
        .parse()
        .with_context(|| format!("Invalid {}: {}", what, value))?;
    if parsed >= limit {
        bail!("{} {} out of range (0..{})", what, parsed, limit);
    }
    Ok(vec![parsed])
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            ),
        )
        .init();

    let args = DumpArgs::parse();
    let settings = settings::load(&args.settings)?;
    let track_type: TrackElemType = args
        .track_type
        .parse()
        .with_context(|| format!("Parsing track type {}", args.track_type))?;
    let Some(tiles) = sequence_count(track_type) else {
        bail!("The hybrid coaster can't build {:?}", track_type);
    };
    let directions = parse_range(&args.direction, 4, "direction")?
        .into_iter()
        .map(Direction::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let sequences = parse_range(&args.sequence, tiles, "sequence")?;
    let height = args.height.unwrap_or(settings.default_height);
    let element = TrackElement::new(track_type)
        .with_colour_scheme(args.colour_scheme)?
        .with_chain(args.chain);

    info!(
        "Dumping {:?} ({} tiles) at height {}",
        track_type, tiles, height
    );
    let mut session = settings.recording_session();
    for direction in directions {
        for &sequence in sequences.iter() {
            session.clear();
            paint_track(
                &mut session,
                &settings.ride,
                &element.with_sequence(sequence),
                direction,
                height,
            );
            println!("== {:?} seq {} {:?}", track_type, sequence, direction);
            for command in session.commands() {
                println!("  {:?}", command);
            }
            for command in session.images() {
                if let PaintCommand::Image {
                    image, bound_box, ..
                } = command
                {
                    let (min, max) = bound_box.extents();
                    println!(
                        "  {:?} spans ({}, {}, {})..({}, {}, {})",
                        image, min.x, min.y, min.z, max.x, max.y, max.z
                    );
                }
            }
            let general = session.general_support();
            println!("  clearance: {} (slope {:#x})", general.height, general.slope);
        }
    }
    Ok(())
}
