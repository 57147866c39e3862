use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trackpaint_core::{
    direction::Direction,
    ride::Ride,
    track_element::{TrackElemType, TrackElement},
};
use trackpaint_hybrid::{paint_track, recorder::RecordingSession, track::SUPPORTED_TRACK_TYPES};

fn paint_benchmarks(c: &mut Criterion) {
    let ride = Ride::default();
    let mut session = RecordingSession::new();

    c.bench_function("every_supported_tile", |b| {
        b.iter(|| {
            for &(track_type, tiles) in SUPPORTED_TRACK_TYPES.iter() {
                for sequence in 0..tiles {
                    let element = TrackElement::new(track_type).with_sequence(sequence);
                    for direction in Direction::ALL {
                        session.clear();
                        paint_track(&mut session, &ride, &element, direction, black_box(64));
                    }
                }
            }
        })
    });

    let helix = TrackElement::new(TrackElemType::LeftHalfBankedHelixDownSmall).with_sequence(6);
    c.bench_function("mirrored_helix_tile", |b| {
        b.iter(|| {
            session.clear();
            paint_track(&mut session, &ride, black_box(&helix), Direction::SW, 128);
        })
    });

    let unsupported = TrackElement::new(TrackElemType::LeftVerticalLoop);
    c.bench_function("unsupported_tile", |b| {
        b.iter(|| paint_track(&mut session, &ride, black_box(&unsupported), Direction::NE, 0))
    });
}

criterion_group!(benches, paint_benchmarks);
criterion_main!(benches);
