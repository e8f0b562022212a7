//! Conversions from field values to sort keys.
//!
//! `#[derive(Sortable)]` reads annotated fields through these traits, so a
//! `#[sort(String)]` field may be a `String`, a `&str`, or an `Option` of
//! either, and a `#[sort(Number)]` field may be any primitive number or an
//! `Option` of one. `None` becomes a missing value, which sorts last.

use std::borrow::Cow;

use crate::number::Number;

/// Values that can be sorted as text.
pub trait SortText {
    /// Returns the text to collate, or `None` for a missing value.
    fn sort_text(&self) -> Option<&str>;
}

impl SortText for str {
    fn sort_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl SortText for String {
    fn sort_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl SortText for Cow<'_, str> {
    fn sort_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: SortText + ?Sized> SortText for &T {
    fn sort_text(&self) -> Option<&str> {
        (**self).sort_text()
    }
}

impl<T: SortText + ?Sized> SortText for Box<T> {
    fn sort_text(&self) -> Option<&str> {
        (**self).sort_text()
    }
}

impl<T: SortText> SortText for Option<T> {
    fn sort_text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.sort_text())
    }
}

/// Values that can be sorted as numbers.
pub trait SortNumber {
    /// Returns the numeric key, or `None` for a missing value.
    fn sort_number(&self) -> Option<Number>;
}

macro_rules! sort_number_primitive {
    ($($ty:ty),*) => {
        $(
            impl SortNumber for $ty {
                fn sort_number(&self) -> Option<Number> {
                    Some(Number::from(*self))
                }
            }
        )*
    };
}

sort_number_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl SortNumber for Number {
    fn sort_number(&self) -> Option<Number> {
        Some(*self)
    }
}

impl<T: SortNumber + ?Sized> SortNumber for &T {
    fn sort_number(&self) -> Option<Number> {
        (**self).sort_number()
    }
}

impl<T: SortNumber> SortNumber for Option<T> {
    fn sort_number(&self) -> Option<Number> {
        self.as_ref().and_then(SortNumber::sort_number)
    }
}
