mod common;

use std::ffi::c_void;
use std::sync::atomic::Ordering;

use common::*;
use dcr_core::{DiBitmapRequest, RedirectSuspension};
use dcr_platform::constants::{CBM_CREATDIB, CBM_INIT};
use dcr_platform::{BitmapHandle, PixelUpload};
use dcr_settings::RedirectSettings;

const OFF_SCREEN: BitmapHandle = BitmapHandle::from_raw(0xD1B);
const DEVICE_BITMAP: BitmapHandle = BitmapHandle::from_raw(0x0DDB);

fn upload(lines: u32) -> PixelUpload {
    static BITS: [u8; 16] = [0; 16];
    static INFO: [u8; 40] = [0; 40];
    PixelUpload {
        bits: BITS.as_ptr().cast::<c_void>(),
        info: INFO.as_ptr().cast::<c_void>(),
        usage: 0,
        start_scan: 0,
        lines,
    }
}

fn request(init_flags: u32, height: i32) -> DiBitmapRequest {
    DiBitmapRequest {
        has_header: true,
        width: 32,
        height,
        init_flags,
        init: Some(upload(height.unsigned_abs())),
    }
}

#[test]
fn compatible_bitmap_for_the_display_is_off_screen() {
    init_logging();
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let bitmap = redirector.create_compatible_bitmap(SCREEN, 640, 480, || {
        panic!("display-compatible bitmap reached the original")
    });

    assert_eq!(bitmap, OFF_SCREEN);
    assert_eq!(fake.events(), [Event::OffScreen(640, 480)]);
}

#[test]
fn discardable_bitmap_follows_the_same_rule() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    assert_eq!(
        redirector.create_discardable_bitmap(SCREEN, 8, 8, || DEVICE_BITMAP),
        OFF_SCREEN
    );
    assert_eq!(
        redirector.create_discardable_bitmap(MEMORY, 8, 8, || DEVICE_BITMAP),
        DEVICE_BITMAP
    );
    assert_eq!(fake.events(), [Event::OffScreen(8, 8)]);
}

#[test]
fn memory_contexts_get_the_original_bitmap() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let bitmap = redirector.create_compatible_bitmap(MEMORY, 16, 16, || DEVICE_BITMAP);

    assert_eq!(bitmap, DEVICE_BITMAP);
    assert!(fake.events().is_empty());
}

#[test]
fn suspension_on_this_thread_disables_redirection() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    {
        let _suspended = RedirectSuspension::begin();
        assert!(!redirector.redirects_bitmaps_for(SCREEN));
        let bitmap = redirector.create_compatible_bitmap(SCREEN, 16, 16, || DEVICE_BITMAP);
        assert_eq!(bitmap, DEVICE_BITMAP);
    }

    assert!(redirector.redirects_bitmaps_for(SCREEN));
    assert_eq!(
        redirector.create_compatible_bitmap(SCREEN, 16, 16, || DEVICE_BITMAP),
        OFF_SCREEN
    );
}

#[test]
fn suspension_is_per_thread() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let _suspended = RedirectSuspension::begin();
    std::thread::scope(|s| {
        s.spawn(|| assert!(redirector.redirects_bitmaps_for(SCREEN)));
    });
    assert!(!redirector.redirects_bitmaps_for(SCREEN));
}

#[test]
fn settings_can_turn_redirection_off() {
    let fake = FakePlatform::new();
    let settings = RedirectSettings {
        redirect_bitmaps: false,
        ..Default::default()
    };
    let redirector = redirector_with(&fake, settings);

    let bitmap = redirector.create_compatible_bitmap(SCREEN, 16, 16, || DEVICE_BITMAP);
    assert_eq!(bitmap, DEVICE_BITMAP);
    assert!(fake.events().is_empty());
}

#[test]
fn off_screen_failure_yields_null() {
    let fake = FakePlatform::new();
    fake.fail_off_screen.store(true, Ordering::SeqCst);
    let redirector = redirector(&fake);

    let bitmap = redirector.create_compatible_bitmap(SCREEN, 16, 16, || DEVICE_BITMAP);
    assert!(bitmap.is_null());
}

#[test]
fn di_bitmap_initial_bits_are_uploaded_under_substitution() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    // Top-down bitmap: negative height, |height| scan lines uploaded.
    let bitmap = redirector.create_di_bitmap(SCREEN, &request(CBM_INIT, -24), || DEVICE_BITMAP);

    assert_eq!(bitmap, OFF_SCREEN);
    assert_eq!(
        fake.events(),
        [
            Event::OffScreen(32, -24),
            Event::Acquire(SCREEN),
            Event::Upload {
                dc: substitute_of(SCREEN),
                bitmap: OFF_SCREEN,
                lines: 24,
            },
            Event::Release(SCREEN),
        ]
    );
    assert_eq!(redirector.access_stats().writes, 1);
}

#[test]
fn di_bitmap_without_init_flag_is_not_uploaded() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let bitmap = redirector.create_di_bitmap(SCREEN, &request(0, 24), || DEVICE_BITMAP);

    assert_eq!(bitmap, OFF_SCREEN);
    assert_eq!(fake.events(), [Event::OffScreen(32, 24)]);
}

#[test]
fn di_bitmap_with_init_flag_but_no_bits_is_not_uploaded() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let request = DiBitmapRequest {
        init: None,
        ..request(CBM_INIT, 24)
    };
    redirector.create_di_bitmap(SCREEN, &request, || DEVICE_BITMAP);

    assert_eq!(fake.count(|e| matches!(e, Event::Upload { .. })), 0);
}

#[test]
fn dib_section_requests_and_headerless_calls_are_forwarded() {
    let fake = FakePlatform::new();
    let redirector = redirector(&fake);

    let section = redirector.create_di_bitmap(SCREEN, &request(CBM_CREATDIB | CBM_INIT, 24), || DEVICE_BITMAP);
    assert_eq!(section, DEVICE_BITMAP);

    let headerless = DiBitmapRequest {
        has_header: false,
        width: 0,
        height: 0,
        init_flags: 0,
        init: None,
    };
    assert_eq!(
        redirector.create_di_bitmap(SCREEN, &headerless, || DEVICE_BITMAP),
        DEVICE_BITMAP
    );
    assert!(fake.events().is_empty());
}

#[test]
fn failed_di_bitmap_allocation_skips_the_upload() {
    let fake = FakePlatform::new();
    fake.fail_off_screen.store(true, Ordering::SeqCst);
    let redirector = redirector(&fake);

    let bitmap = redirector.create_di_bitmap(SCREEN, &request(CBM_INIT, 4), || DEVICE_BITMAP);

    assert!(bitmap.is_null());
    assert_eq!(fake.events(), [Event::OffScreen(32, 4)]);
}
