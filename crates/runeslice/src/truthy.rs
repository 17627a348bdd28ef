//! Loose boolean coercion.

use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, VecDeque},
    rc::Rc,
    string::String,
    sync::Arc,
    vec::Vec,
};

use bstr::{BStr, BString, ByteSlice};

use crate::ParseBoolError;

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Nothing else, including surrounding whitespace.
///
/// # Errors
///
/// Returns [`ParseBoolError::Invalid`] with the (lossily decoded) input when
/// it is not one of the literals above.
///
/// ```rust
/// use runeslice::parse_bool;
///
/// assert_eq!(parse_bool("True"), Ok(true));
/// assert_eq!(parse_bool(b"0"), Ok(false));
/// assert!(parse_bool("yes").is_err());
/// ```
pub fn parse_bool<S: AsRef<[u8]> + ?Sized>(s: &S) -> Result<bool, ParseBoolError> {
    match s.as_ref() {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Ok(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Ok(false),
        other => Err(ParseBoolError::Invalid(other.to_str_lossy().into_owned())),
    }
}

/// Types with a notion of "truthy".
///
/// - numbers are truthy when strictly positive;
/// - text (`str`, `String`, [`BStr`], [`BString`]) is its boolean literal if
///   it parses as one, otherwise truthy when non-empty;
/// - containers are truthy when non-empty;
/// - `None`, `Err(_)` and `()` are falsy; `Some(v)`, `Ok(v)` and smart
///   pointers defer to what they hold.
///
/// Byte slices and `Vec<u8>` are containers here. Wrap them in [`BStr`] to get
/// the text rule.
pub trait Truthy {
    /// Returns whether `self` counts as true.
    fn truthy(&self) -> bool;
}

/// Coerces any [`Truthy`] value to `bool`.
///
/// ```rust
/// use runeslice::as_bool;
///
/// assert!(as_bool(&3_u8));
/// assert!(!as_bool(&-1.5_f64));
/// assert!(!as_bool("false"));
/// assert!(as_bool("anything"));
/// assert!(!as_bool(&None::<i32>));
/// ```
#[inline]
#[must_use]
pub fn as_bool<T: Truthy + ?Sized>(v: &T) -> bool {
    v.truthy()
}

macro_rules! impl_truthy_positive {
    ($zero:literal => $($t:ty),+) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn truthy(&self) -> bool {
                    *self > $zero
                }
            }
        )+
    };
}

impl_truthy_positive!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy_positive!(0.0 => f32, f64);

impl Truthy for bool {
    #[inline]
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn truthy(&self) -> bool {
        false
    }
}

fn text_truthy(bytes: &[u8]) -> bool {
    parse_bool(bytes).unwrap_or(!bytes.is_empty())
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        text_truthy(self.as_bytes())
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        text_truthy(self.as_bytes())
    }
}

impl Truthy for BStr {
    fn truthy(&self) -> bool {
        text_truthy(self)
    }
}

impl Truthy for BString {
    fn truthy(&self) -> bool {
        text_truthy(self)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn truthy(&self) -> bool {
        N != 0
    }
}

macro_rules! impl_truthy_non_empty {
    ($($t:ident<$($p:ident),+>),+ $(,)?) => {
        $(
            impl<$($p),+> Truthy for $t<$($p),+> {
                #[inline]
                fn truthy(&self) -> bool {
                    !self.is_empty()
                }
            }
        )+
    };
}

impl_truthy_non_empty!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>);

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::truthy)
    }
}

impl<T: Truthy, E> Truthy for Result<T, E> {
    #[inline]
    fn truthy(&self) -> bool {
        self.as_ref().is_ok_and(Truthy::truthy)
    }
}

macro_rules! impl_truthy_deref {
    ($($t:ty),+) => {
        $(
            impl<T: Truthy + ?Sized> Truthy for $t {
                #[inline]
                fn truthy(&self) -> bool {
                    (**self).truthy()
                }
            }
        )+
    };
}

impl_truthy_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
