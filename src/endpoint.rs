/// An ordered numeric type that can bound an interval.
///
/// Besides ordering, an endpoint domain must name its extremes so that the index can
/// place sentinel breakpoints below and above every interval. Floating-point types have
/// true infinities for this; integral types fall back to their smallest and largest
/// representable values.
pub trait Endpoint: Copy + PartialOrd {
    /// Smallest finite value of the domain.
    const LOWEST: Self;
    /// Largest finite value of the domain.
    const HIGHEST: Self;
    /// Negative infinity, if the domain can represent it.
    const NEG_INFINITY: Option<Self> = None;
    /// Positive infinity, if the domain can represent it.
    const INFINITY: Option<Self> = None;

    /// The value sitting below every other value of the domain.
    fn lower_sentinel() -> Self {
        Self::NEG_INFINITY.unwrap_or(Self::LOWEST)
    }

    /// The value sitting above every other value of the domain.
    fn upper_sentinel() -> Self {
        Self::INFINITY.unwrap_or(Self::HIGHEST)
    }

    /// Whether `self` takes part in the total order (`NaN` does not).
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

macro_rules! integral_endpoint {
    ($($t:ty),*) => {
        $(
            impl Endpoint for $t {
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
            }
        )*
    };
}

macro_rules! float_endpoint {
    ($($t:ty),*) => {
        $(
            impl Endpoint for $t {
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
                const NEG_INFINITY: Option<Self> = Some(<$t>::NEG_INFINITY);
                const INFINITY: Option<Self> = Some(<$t>::INFINITY);
            }
        )*
    };
}

integral_endpoint!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_endpoint!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_sentinels_are_type_extremes() {
        assert_eq!(i32::lower_sentinel(), i32::MIN);
        assert_eq!(i32::upper_sentinel(), i32::MAX);
        assert_eq!(u8::lower_sentinel(), 0);
        assert_eq!(u8::upper_sentinel(), 255);
        assert_eq!(<u64 as Endpoint>::INFINITY, None);
    }

    #[test]
    fn float_sentinels_are_infinite() {
        assert_eq!(f64::lower_sentinel(), f64::NEG_INFINITY);
        assert_eq!(f64::upper_sentinel(), f64::INFINITY);
        assert_eq!(f32::lower_sentinel(), f32::NEG_INFINITY);
        assert!(f32::upper_sentinel() > f32::MAX);
    }

    #[test]
    fn nan_is_not_comparable() {
        assert!(!f64::NAN.is_comparable());
        assert!(f64::INFINITY.is_comparable());
        assert!(0i32.is_comparable());
    }
}
