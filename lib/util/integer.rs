use std::mem::{size_of, transmute_copy};
use std::{iter::Map, ops::RangeInclusive};

/// Trait for types that can be represented by a contiguous range of primitive integers.
///
/// # Safety
///
/// Must only be implemented for types that can be safely transmuted to and from [`Integer::Repr`].
pub unsafe trait Integer: Copy {
    /// The equivalent primitive integer type.
    type Repr: Primitive;

    /// The minimum repr.
    const MIN: Self::Repr;

    /// The maximum repr.
    const MAX: Self::Repr;

    /// Casts from [`Integer::Repr`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn new(i: Self::Repr) -> Self {
        assert!(Self::in_range(i));
        debug_assert_eq!(size_of::<Self>(), size_of::<Self::Repr>());
        unsafe { transmute_copy(&i) }
    }

    /// Casts to [`Integer::Repr`].
    #[inline(always)]
    fn get(self) -> Self::Repr {
        unsafe { transmute_copy(&self) }
    }

    /// Converts to another [`Integer`] if possible without data loss.
    #[inline(always)]
    fn convert<I: Integer>(self) -> Option<I> {
        let i = I::Repr::narrow(self.get().widen())?;
        I::in_range(i).then(|| I::new(i))
    }

    /// Whether a value is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn in_range(i: Self::Repr) -> bool {
        (Self::MIN..=Self::MAX).contains(&i)
    }

    /// An iterator over all values in the range [`Integer::MIN`]..=[`Integer::MAX`].
    #[inline(always)]
    #[allow(clippy::type_complexity)]
    fn iter() -> Map<RangeInclusive<Self::Repr>, fn(Self::Repr) -> Self>
    where
        RangeInclusive<Self::Repr>: Iterator<Item = Self::Repr>,
    {
        let new: fn(Self::Repr) -> Self = Self::new;
        (Self::MIN..=Self::MAX).map(new)
    }
}

/// Trait for primitive integer types.
pub trait Primitive: Integer<Repr = Self> + Ord {
    /// Losslessly widens to the largest signed primitive.
    fn widen(self) -> i128;

    /// Narrows from the largest signed primitive, if it fits.
    fn narrow(i: i128) -> Option<Self>;
}

macro_rules! impl_primitive_for {
    ($($i: ty),*) => {
        $(
            impl Primitive for $i {
                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn narrow(i: i128) -> Option<Self> {
                    i.try_into().ok()
                }
            }

            unsafe impl Integer for $i {
                type Repr = $i;
                const MIN: Self::Repr = <$i>::MIN;
                const MAX: Self::Repr = <$i>::MAX;
            }
        )*
    };
}

impl_primitive_for!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
