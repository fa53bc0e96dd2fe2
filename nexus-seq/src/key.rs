//! Link type for node chains.
//!
//! Nodes link to their successor by arena slot index rather than by pointer.
//! A reserved sentinel (`NONE`) stands in for "no successor", so a link costs
//! one integer instead of an `Option<usize>`.

/// Trait for slot index types used as node links.
///
/// Provides a sentinel value (`NONE`) and conversion to/from `usize`.
/// Narrow key types shrink every node at the cost of a smaller key space:
/// a list keyed by `u8` holds at most 255 elements at once.
///
/// # Example
///
/// ```
/// use nexus_seq::Key;
///
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7).as_usize(), 7);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no link".
    ///
    /// For integer types this is `MAX`, which is never handed out as a slot.
    const NONE: Self;

    /// Creates a key from an arena slot index.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as an arena slot index.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
