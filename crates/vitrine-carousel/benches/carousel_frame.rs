use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vitrine_carousel::CarouselSettings;
use vitrine_core::DeviceClass;
use vitrine_testing::CarouselRobot;

const FRAME_MILLIS: f64 = 16.667;
const CARD_COUNT_SAMPLES: &[usize] = &[8, 24, 64];

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_frame");
    for &cards in CARD_COUNT_SAMPLES {
        let settings = CarouselSettings::default().with_cards(cards, 380.0);
        for device in [DeviceClass::Pointer, DeviceClass::Touch] {
            let robot = CarouselRobot::mount(settings.clone(), device);
            group.bench_with_input(
                BenchmarkId::new(format!("{device:?}"), cards),
                &cards,
                |b, _| {
                    b.iter(|| {
                        robot.advance(FRAME_MILLIS);
                        black_box(robot.track_x());
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let robot = CarouselRobot::mount(CarouselSettings::default(), DeviceClass::Pointer);
    c.bench_function("carousel_drag_session", |b| {
        b.iter(|| {
            robot.drag(black_box(900.0), black_box(120.0), 32);
            black_box(robot.offset());
        });
    });
}

criterion_group!(benches, bench_frame, bench_drag);
criterion_main!(benches);
