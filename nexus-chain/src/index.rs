//! Sentinel-based node index.
//!
//! A chain link is either another node's index or the reserved `NONE`
//! sentinel (`MAX` of the integer type), which marks the end of a chain.
//! Using a sentinel instead of `Option<Idx>` keeps a node's link the size
//! of the index itself.

/// A copyable node index with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use nexus_chain::Index;
///
/// let idx: u32 = 5;
/// assert!(idx.is_some());
/// assert!(u32::NONE.is_none());
///
/// // Values colliding with the sentinel are rejected.
/// assert_eq!(u8::try_from_usize(255), None);
/// assert_eq!(u8::try_from_usize(254), Some(254));
/// ```
pub trait Index: Copy + Eq + core::fmt::Debug {
    /// Terminal marker. Never a valid storage slot.
    const NONE: Self;

    /// Returns `true` if this is the terminal marker.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this names a node.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the slot number this index refers to.
    fn as_usize(self) -> usize;

    /// Converts a slot number, returning `None` if it does not fit or would
    /// equal the sentinel.
    fn try_from_usize(val: usize) -> Option<Self>;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn try_from_usize(val: usize) -> Option<Self> {
                    <$ty>::try_from(val).ok().filter(|idx| *idx != Self::NONE)
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_index_sentinel {
        ($($ty:ty => $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert!(<$ty>::NONE.is_none());
                    assert!(!<$ty>::NONE.is_some());
                    assert!((0 as $ty).is_some());
                    assert!((<$ty>::MAX - 1).is_some());
                }
            )*
        };
    }

    test_index_sentinel!(
        u8 => u8_sentinel,
        u16 => u16_sentinel,
        u32 => u32_sentinel,
        u64 => u64_sentinel,
        usize => usize_sentinel
    );

    #[test]
    fn try_from_usize_rejects_sentinel() {
        assert_eq!(u8::try_from_usize(u8::MAX as usize), None);
        assert_eq!(u32::try_from_usize(u32::MAX as usize), None);
        assert_eq!(usize::try_from_usize(usize::MAX), None);
    }

    #[test]
    fn try_from_usize_rejects_overflow() {
        assert_eq!(u8::try_from_usize(256), None);
        assert_eq!(u16::try_from_usize(1 << 20), None);
    }

    #[test]
    fn try_from_usize_accepts_slots() {
        for i in [0usize, 1, 4, 1000] {
            assert_eq!(u32::try_from_usize(i).map(Index::as_usize), Some(i));
        }
    }
}
