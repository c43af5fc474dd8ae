use dcr_platform::constants::{CBM_CREATDIB, CBM_INIT};
use dcr_platform::{BitmapHandle, DcHandle, PixelUpload};

use crate::dispatcher::Redirector;
use crate::operation::Operation;
use crate::redirect::redirect_enabled;

/// Arguments of `CreateDIBitmap` the redirect decision depends on.
#[derive(Debug, Clone, Copy)]
pub struct DiBitmapRequest {
    /// `false` when the caller passed no `BITMAPINFOHEADER`.
    pub has_header: bool,
    pub width: i32,
    /// Signed: negative for top-down bitmaps.
    pub height: i32,
    pub init_flags: u32,
    /// Initial bits, when both the bits and their `BITMAPINFO` were supplied.
    pub init: Option<PixelUpload>,
}

impl Redirector {
    /// Redirection applies to this call: enabled process-wide and on this thread, and `dc` is a
    /// display context.
    pub fn redirects_bitmaps_for(&self, dc: DcHandle) -> bool {
        self.settings.redirect_bitmaps && redirect_enabled() && self.is_display(dc)
    }

    fn off_screen_bitmap(&self, op: Operation, width: i32, height: i32) -> BitmapHandle {
        let bitmap = self
            .env
            .buffers
            .create_off_screen_dib(width, height)
            .unwrap_or_else(|| {
                log::warn!("{op}: off-screen buffer of {width}x{height} unavailable");
                BitmapHandle::NULL
            });
        self.trace(op, true, &bitmap);
        bitmap
    }

    /// `CreateCompatibleBitmap`.
    pub fn create_compatible_bitmap<F>(&self, dc: DcHandle, width: i32, height: i32, original: F) -> BitmapHandle
    where
        F: FnOnce() -> BitmapHandle,
    {
        if self.redirects_bitmaps_for(dc) {
            return self.off_screen_bitmap(Operation::CreateCompatibleBitmap, width, height);
        }
        original()
    }

    /// `CreateDiscardableBitmap`.
    pub fn create_discardable_bitmap<F>(&self, dc: DcHandle, width: i32, height: i32, original: F) -> BitmapHandle
    where
        F: FnOnce() -> BitmapHandle,
    {
        if self.redirects_bitmaps_for(dc) {
            return self.off_screen_bitmap(Operation::CreateDiscardableBitmap, width, height);
        }
        original()
    }

    /// `CreateDIBitmap`.
    ///
    /// Requests for a DIB section (`CBM_CREATDIB`) are left alone. With `CBM_INIT` the initial
    /// bits are uploaded through the intercepted `SetDIBits` path, so the upload is guarded and
    /// substituted like any other display call.
    pub fn create_di_bitmap<F>(&self, dc: DcHandle, request: &DiBitmapRequest, original: F) -> BitmapHandle
    where
        F: FnOnce() -> BitmapHandle,
    {
        if !request.has_header
            || request.init_flags & CBM_CREATDIB != 0
            || !self.redirects_bitmaps_for(dc)
        {
            return original();
        }

        let bitmap = self.off_screen_bitmap(Operation::CreateDIBitmap, request.width, request.height);
        if let Some(upload) = request.init.filter(|_| request.init_flags & CBM_INIT != 0) {
            if !bitmap.is_null() {
                let native = &*self.env.native;
                let args = (
                    bitmap,
                    upload.start_scan,
                    upload.lines,
                    upload.bits,
                    upload.info,
                    upload.usage,
                );
                self.dispatch(Operation::SetDIBits, dc, args, |dc, (bitmap, start_scan, lines, bits, info, usage)| {
                    native.upload_pixels(
                        dc,
                        bitmap,
                        &PixelUpload {
                            bits,
                            info,
                            usage,
                            start_scan,
                            lines,
                        },
                    )
                });
            }
        }
        bitmap
    }
}
