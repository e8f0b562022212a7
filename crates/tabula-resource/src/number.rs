//! Numeric sort keys.
//!
//! Numeric fields hand the engine a [`Number`]. Integers keep their exact
//! value, and integer-to-float comparisons are exact too, so equality stays
//! transitive beyond 2^53.

use std::cmp::Ordering;

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `true` if this is a NaN float.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(cmp_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(cmp_signed_unsigned(b, a).reverse()),
            (Number::I64(a), Number::F64(b)) => cmp_int_float(i128::from(a), b),
            (Number::U64(a), Number::F64(b)) => cmp_int_float(i128::from(a), b),
            (Number::F64(a), Number::I64(b)) => cmp_int_float(i128::from(b), a).map(Ordering::reverse),
            (Number::F64(a), Number::U64(b)) => cmp_int_float(i128::from(b), a).map(Ordering::reverse),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
        }
    }

    /// Total ordering used for sorting: NaN sorts after every other number.
    pub fn sort_cmp(self, other: Number) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.compare(other).unwrap_or(Ordering::Equal),
        }
    }
}

fn cmp_signed_unsigned(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

/// Compares an integer with a float without rounding the integer.
///
/// Both integer variants fit in `i128`, and any float inside their range
/// truncates to an exact `i128`; the fraction then breaks the tie.
fn cmp_int_float(n: i128, f: f64) -> Option<Ordering> {
    // 2^64 and -2^63 bound every integer variant.
    const ABOVE_ALL: f64 = 18_446_744_073_709_551_616.0;
    const BELOW_ALL: f64 = -9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= ABOVE_ALL {
        return Some(Ordering::Less);
    }
    if f < BELOW_ALL {
        return Some(Ordering::Greater);
    }

    let whole = f.trunc();
    match n.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ord => Some(ord),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
