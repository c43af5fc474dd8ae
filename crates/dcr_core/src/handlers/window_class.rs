use dcr_platform::constants::{GCL_HICON, GCL_HICONSM, GCL_WNDPROC, is_icon_index};
use dcr_platform::{Charset, ClassicWindowClass, IconHandle, WindowClass, WindowHandle};

use crate::dispatcher::Redirector;
use crate::redirect::RedirectSuspension;

impl Redirector {
    /// `RegisterClassA/W`. The record is converted to the extended shape and registered through
    /// the extended path; `original` only handles a null record.
    pub fn register_class<F>(&self, charset: Charset, class: Option<&ClassicWindowClass>, original: F) -> u16
    where
        F: FnOnce() -> u16,
    {
        match class {
            Some(class) => self.register_normalized(charset, &WindowClass::from(*class)),
            None => original(),
        }
    }

    /// `RegisterClassExA/W`. `original` only handles a null record.
    pub fn register_class_ex<F>(&self, charset: Charset, class: Option<&WindowClass>, original: F) -> u16
    where
        F: FnOnce() -> u16,
    {
        match class {
            Some(class) => self.register_normalized(charset, class),
            None => original(),
        }
    }

    /// Registers `class` without passing its icons to the registration call.
    ///
    /// An icon-stripped variant running the default procedure is registered, a hidden window of
    /// it is created, the icons and the real procedure are assigned through that window, and the
    /// window is destroyed again. Falls back to plain registration when the variant cannot be
    /// registered or the window cannot be created.
    fn register_normalized(&self, charset: Charset, class: &WindowClass) -> u16 {
        let api = &*self.env.classes;
        if !class.has_icons() {
            return api.register_class_ex(charset, class);
        }

        let default_proc = api.default_window_proc(charset);
        let atom = api.register_class_ex(charset, &class.without_icons(default_proc));
        if atom == 0 {
            log::debug!("icon-less class variant rejected, registering as given");
            return api.register_class_ex(charset, class);
        }

        let Some(hwnd) = api.create_hidden_window(charset, atom, class.instance) else {
            log::warn!("hidden window for class atom {atom:#x} failed, registering as given");
            api.unregister_class(charset, atom, class.instance);
            return api.register_class_ex(charset, class);
        };

        self.assign_class_icon(charset, hwnd, GCL_HICON, class.icon);
        self.assign_class_icon(charset, hwnd, GCL_HICONSM, class.small_icon);
        api.set_class_long(charset, hwnd, GCL_WNDPROC, class.wnd_proc as isize);
        api.set_window_proc(charset, hwnd, default_proc);
        api.destroy_window(hwnd);

        atom
    }

    fn assign_class_icon(&self, charset: Charset, hwnd: WindowHandle, index: i32, icon: IconHandle) {
        if icon.is_null() {
            return;
        }
        let api = &*self.env.classes;
        self.set_class_long(index, || {
            api.set_class_long(charset, hwnd, index, icon.raw() as isize)
        });
    }

    /// `SetClassLongA/W`. Assigning a class icon can create bitmaps internally; those must not
    /// be redirected, so redirection is suspended on this thread for the duration of the call.
    pub fn set_class_long<R, F>(&self, index: i32, original: F) -> R
    where
        F: FnOnce() -> R,
    {
        if is_icon_index(index) {
            let _suspended = RedirectSuspension::begin();
            return original();
        }
        original()
    }
}
