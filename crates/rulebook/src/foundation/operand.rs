//! Nullable and non-nullable comparison operands
//!
//! An [`Operand`] is anything that can sit on either side of a comparison:
//! a plain value `T` (always present) or an `Option<T>` (maybe absent).
//! Predicates only ever see `Option<&T>` through [`Operand::present`], which
//! lets one predicate serve all four nullability combinations.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// A value that may be present or absent.
///
/// Implemented for the built-in scalar types and, through a blanket impl, for
/// `Option` of any operand whose `Value` is itself. Use
/// [`impl_operand!`](crate::impl_operand) to add your own types.
///
/// # Examples
///
/// ```
/// use rulebook::foundation::Operand;
///
/// assert_eq!(5_i32.present(), Some(&5));
/// assert_eq!(Some(5_i32).present(), Some(&5));
/// assert_eq!(None::<i32>.present(), None);
/// ```
pub trait Operand {
    /// The underlying comparable type.
    type Value;

    /// Returns the value, or `None` when it is absent.
    fn present(&self) -> Option<&Self::Value>;

    /// Returns true when the value is absent.
    #[inline]
    fn is_absent(&self) -> bool {
        self.present().is_none()
    }
}

impl<T> Operand for Option<T>
where
    T: Operand<Value = T>,
{
    type Value = T;

    #[inline]
    fn present(&self) -> Option<&Self::Value> {
        self.as_ref()
    }
}

crate::impl_operand!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    String,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    DateTime<Local>,
);
