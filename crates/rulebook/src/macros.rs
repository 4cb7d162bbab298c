//! Macros for plugging caller types into the rule engine.
//!
//! # Available Macros
//!
//! - [`impl_operand!`]: make a type usable as a comparison operand, together
//!   with its `Option` carrier
//!
//! # Examples
//!
//! ```
//! use rulebook::impl_operand;
//! use rulebook::foundation::Operand;
//!
//! #[derive(Debug, PartialEq, PartialOrd)]
//! struct Version(u32, u32);
//!
//! impl_operand!(Version);
//!
//! assert!(Some(Version(1, 2)).present().is_some());
//! ```

// ============================================================================
// OPERAND MACRO
// ============================================================================

/// Implements [`Operand`](crate::foundation::Operand) for one or more types.
///
/// Each listed type becomes an always-present operand whose `Value` is
/// itself. The nullable carrier `Option<T>` is covered by the blanket impl
/// in [`foundation::operand`](crate::foundation::operand).
///
/// Comparison predicates additionally need `PartialEq` (for `is_same_as`) or
/// `PartialOrd` (for the ordering family) and `Display` for failure messages.
#[macro_export]
macro_rules! impl_operand {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::Operand for $ty {
                type Value = $ty;

                #[inline]
                fn present(&self) -> ::core::option::Option<&Self::Value> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}
