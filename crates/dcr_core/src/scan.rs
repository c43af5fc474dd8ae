//! Display-reference scanning and argument substitution over heterogeneous argument lists.
//!
//! Every intercepted signature is expressed as a drawing context plus a tuple of the remaining
//! arguments. Each tuple element implements [`DcArg`]; only [`DcHandle`] does anything.

use dcr_platform::{
    BitmapHandle, BrushHandle, CursorHandle, DcHandle, DisplaySurfaces, IconHandle,
    InstanceHandle, Point, Rect, RegionHandle, WindowHandle,
};

use crate::substitute::SubstitutionScope;

/// One argument of an intercepted call.
pub trait DcArg: Copy {
    #[inline]
    fn is_display(&self, _surfaces: &dyn DisplaySurfaces) -> bool {
        false
    }

    #[inline]
    fn substitute(self, _scope: &mut SubstitutionScope<'_>) -> Self {
        self
    }
}

impl DcArg for DcHandle {
    #[inline]
    fn is_display(&self, surfaces: &dyn DisplaySurfaces) -> bool {
        surfaces.is_display_dc(*self)
    }

    #[inline]
    fn substitute(self, scope: &mut SubstitutionScope<'_>) -> Self {
        scope.substitute(self)
    }
}

macro_rules! inert_args {
    ($($ty:ty),* $(,)?) => {
        $(impl DcArg for $ty {})*
    };
}

inert_args!(
    i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64, bool,
    WindowHandle, BitmapHandle, IconHandle, RegionHandle, BrushHandle, CursorHandle,
    InstanceHandle, Point, Rect,
);

impl<T: ?Sized> DcArg for *const T {}
impl<T: ?Sized> DcArg for *mut T {}

/// The arguments following the drawing context, as a tuple.
pub trait ArgList {
    fn references_display(&self, surfaces: &dyn DisplaySurfaces) -> bool;
    fn substitute(self, scope: &mut SubstitutionScope<'_>) -> Self;
}

macro_rules! tuple_arg_list {
    ($($ty:ident $var:ident),*) => {
        impl<$($ty: DcArg),*> ArgList for ($($ty,)*) {
            #[inline]
            #[allow(unused_variables)]
            fn references_display(&self, surfaces: &dyn DisplaySurfaces) -> bool {
                let ($($var,)*) = self;
                false $(|| $var.is_display(surfaces))*
            }

            #[inline]
            #[allow(unused_variables)]
            fn substitute(self, scope: &mut SubstitutionScope<'_>) -> Self {
                let ($($var,)*) = self;
                ($($var.substitute(scope),)*)
            }
        }
    };
}

tuple_arg_list!();
tuple_arg_list!(A a);
tuple_arg_list!(A a, B b);
tuple_arg_list!(A a, B b, C c);
tuple_arg_list!(A a, B b, C c, D d);
tuple_arg_list!(A a, B b, C c, D d, E e);
tuple_arg_list!(A a, B b, C c, D d, E e, F f);
tuple_arg_list!(A a, B b, C c, D d, E e, F f, G g);
tuple_arg_list!(A a, B b, C c, D d, E e, F f, G g, H h);
tuple_arg_list!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
tuple_arg_list!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
tuple_arg_list!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
tuple_arg_list!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);

/// Result of an intercepted call, judged the way the native API reports success.
pub trait CallResult: Copy + std::fmt::Debug {
    fn succeeded(&self) -> bool;
}

macro_rules! nonzero_results {
    ($($ty:ty),* $(,)?) => {
        $(impl CallResult for $ty {
            #[inline]
            fn succeeded(&self) -> bool {
                *self != 0
            }
        })*
    };
}

nonzero_results!(i32, u32, u16, isize, usize);

macro_rules! handle_results {
    ($($ty:ty),* $(,)?) => {
        $(impl CallResult for $ty {
            #[inline]
            fn succeeded(&self) -> bool {
                !self.is_null()
            }
        })*
    };
}

handle_results!(DcHandle, WindowHandle, BitmapHandle);
