mod common;

use std::ptr;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread;

use common::*;
use dcr_core::{AccessIntent, AccessStats, Operation, SurfaceLock};
use dcr_platform::{DcHandle, Point, Rect};
use dcr_settings::RedirectSettings;
use parking_lot::Mutex;

#[test]
fn non_display_calls_are_forwarded_untouched() {
    init_logging();
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let mut seen = None;
    let result = redirector.dispatch(
        Operation::BitBlt,
        MEMORY,
        (0, 0, 64, 64, DcHandle::from_raw(0x3000), 0, 0, 0x00CC_0020u32),
        |dc, args| {
            seen = Some((dc, args));
            7
        },
    );

    assert_eq!(result, 7);
    assert_eq!(
        seen,
        Some((MEMORY, (0, 0, 64, 64, DcHandle::from_raw(0x3000), 0, 0, 0x00CC_0020u32)))
    );
    assert!(fake.events().is_empty());
    assert_eq!(redirector.access_stats(), AccessStats::default());
}

#[test]
fn display_destination_is_substituted_and_released_once() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let result = redirector.dispatch(Operation::Rectangle, SCREEN, (1, 2, 3, 4), |dc, _| {
        assert!(redirector.holds_surface_lock());
        fake.record(Event::Original("Rectangle", dc));
        1
    });

    assert_eq!(result, 1);
    assert_eq!(
        fake.events(),
        [
            Event::Acquire(SCREEN),
            Event::Original("Rectangle", substitute_of(SCREEN)),
            Event::Release(SCREEN),
        ]
    );
    assert!(!redirector.holds_surface_lock());
    assert_eq!(redirector.access_stats().writes, 1);
}

#[test]
fn display_source_argument_is_substituted_too() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let mut seen_src = DcHandle::NULL;
    redirector.dispatch(
        Operation::BitBlt,
        MEMORY,
        (0, 0, 10, 10, SCREEN, 5, 5, 0x00CC_0020u32),
        |dc, (_, _, _, _, src, _, _, _)| {
            assert_eq!(dc, MEMORY);
            seen_src = src;
            1
        },
    );

    assert_eq!(seen_src, substitute_of(SCREEN));
    assert_eq!(fake.events(), [Event::Acquire(SCREEN), Event::Release(SCREEN)]);
}

#[test]
fn screen_to_screen_copy_acquires_each_context_once() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    redirector.dispatch(
        Operation::StretchBlt,
        SCREEN,
        (0, 0, 10, 10, SCREEN, 0, 0, 5, 5, 0x00CC_0020u32),
        |dc, (_, _, _, _, src, ..)| {
            assert_eq!(dc, src);
            1
        },
    );

    assert_eq!(fake.count(|e| matches!(e, Event::Acquire(_))), 1);
    assert_eq!(fake.count(|e| matches!(e, Event::Release(_))), 1);
}

#[test]
fn failed_substitution_passes_the_original_through() {
    let fake = FakePlatform::new();
    fake.fail_acquire.store(true, Ordering::SeqCst);
    let redirector = redirector(&fake);

    let result = redirector.dispatch(Operation::LineTo, SCREEN, (40, 30), |dc, (x, y)| {
        fake.line_to(dc, x, y)
    });

    assert_eq!(result, 1);
    assert_eq!(
        fake.events(),
        [Event::Acquire(SCREEN), Event::Original("LineTo", SCREEN)]
    );
    // Drawn on the original directly, so there is nothing to repair.
    assert_eq!(fake.position(SCREEN), Point::new(40, 30));
}

#[test]
fn position_is_copied_back_to_the_original() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let result = redirector.dispatch(Operation::LineTo, SCREEN, (40, 30), |dc, (x, y)| {
        fake.line_to(dc, x, y)
    });

    assert_eq!(result, 1);
    assert_eq!(fake.position(substitute_of(SCREEN)), Point::new(40, 30));
    assert_eq!(fake.position(SCREEN), Point::new(40, 30));
    assert_eq!(
        fake.events(),
        [
            Event::Acquire(SCREEN),
            Event::Original("LineTo", substitute_of(SCREEN)),
            Event::MoveTo(SCREEN, Point::new(40, 30)),
            Event::Release(SCREEN),
        ]
    );
}

#[test]
fn position_repair_is_skipped_on_failure() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let result = redirector.dispatch(Operation::LineTo, SCREEN, (40, 30), |dc, _| {
        fake.set_position(dc, Point::new(99, 99));
        0
    });

    assert_eq!(result, 0);
    assert_eq!(fake.count(|e| matches!(e, Event::MoveTo(..))), 0);
    assert_eq!(fake.position(SCREEN), Point::default());
}

#[test]
fn operations_that_keep_the_position_are_not_repaired() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    redirector.dispatch(
        Operation::Polyline,
        SCREEN,
        (ptr::null::<Point>(), 2),
        |dc, _| {
            fake.set_position(dc, Point::new(5, 5));
            1
        },
    );

    assert_eq!(fake.count(|e| matches!(e, Event::MoveTo(..))), 0);
}

#[test]
fn read_only_operations_take_read_intent() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let pixel = redirector.dispatch(Operation::GetPixel, SCREEN, (3, 4), |_, _| 0x00FF_00FFu32);
    redirector.dispatch(Operation::SetPixel, SCREEN, (3, 4, 0u32), |_, _| 0u32);

    assert_eq!(pixel, 0x00FF_00FF);
    assert_eq!(
        redirector.access_stats(),
        AccessStats {
            reads: 1,
            writes: 1,
            nested: 0,
        }
    );
}

#[test]
fn release_happens_when_the_original_unwinds() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        redirector.dispatch(Operation::FillRect, SCREEN, (ptr::null::<Rect>(), 0usize), |_, _| -> i32 {
            panic!("native call faulted")
        })
    }));

    assert!(outcome.is_err());
    assert_eq!(fake.events(), [Event::Acquire(SCREEN), Event::Release(SCREEN)]);
    assert!(!redirector.holds_surface_lock());
}

#[test]
fn text_operations_run_inside_a_font_scope() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    redirector.dispatch_text(Operation::TextOutW, MEMORY, (0, 0, ptr::null::<u16>(), 0), |_, _| 1);
    assert_eq!(fake.events(), [Event::FontEnter(MEMORY), Event::FontLeave(MEMORY)]);

    fake.clear_events();
    redirector.dispatch_text(Operation::TextOutW, SCREEN, (12, 0, ptr::null::<u16>(), 0), |dc, (x, y, ..)| {
        fake.set_position(dc, Point::new(x + 30, y));
        1
    });
    assert_eq!(
        fake.events(),
        [
            Event::FontEnter(SCREEN),
            Event::Acquire(SCREEN),
            Event::MoveTo(SCREEN, Point::new(42, 0)),
            Event::Release(SCREEN),
            Event::FontLeave(SCREEN),
        ]
    );
}

#[test]
fn concurrent_readers_never_interleave_on_the_surface() {
    let fake = FakePlatform::new();
    let redirector = Arc::new(redirector(&fake));
    let surface: Arc<Mutex<Vec<(usize, u8)>>> = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let redirector = Arc::clone(&redirector);
            let surface = Arc::clone(&surface);
            thread::spawn(move || {
                for _ in 0..25 {
                    redirector.dispatch(Operation::GetPixel, SCREEN, (id as i32, 0), |_, _| {
                        // A "partial read": two halves with a scheduling point in between.
                        surface.lock().push((id, 0));
                        thread::yield_now();
                        surface.lock().push((id, 1));
                        0u32
                    });
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let log = surface.lock();
    assert_eq!(log.len(), 200);
    for pair in log.chunks(2) {
        assert_eq!(pair[0].0, pair[1].0, "interleaved read halves: {pair:?}");
        assert_eq!((pair[0].1, pair[1].1), (0, 1));
    }
    assert_eq!(redirector.access_stats().reads, 100);
    assert_eq!(redirector.access_stats().writes, 0);
}

#[test]
fn guard_is_taken_with_descriptor_intent_through_with_guard() {
    let lock = SurfaceLock::new();
    let value = lock.with_guard(AccessIntent::Read, || 5);
    assert_eq!(value, 5);
    assert_eq!(lock.stats().reads, 1);
}

#[test]
fn tracing_does_not_change_results() {
    init_logging();
    let fake = FakePlatform::new();
    let settings = RedirectSettings {
        trace_calls: true,
        ..Default::default()
    };
    let redirector = redirector_with(&fake, settings);

    let result = redirector.dispatch(Operation::PatBlt, SCREEN, (0, 0, 1, 1, 0x00F0_0021u32), |_, _| 1);
    assert_eq!(result, 1);
}
