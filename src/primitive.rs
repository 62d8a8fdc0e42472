use num::{Float, NumCast, Zero};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{AddAssign, SubAssign},
    str::FromStr,
};

/// Floating point primitive the clustering can be calculated with.
pub trait Primitive: AddAssign + Sum + SubAssign + Zero + Float + NumCast + FromStr
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static {
    /// Convert an element count into this primitive (used as divisor for means).
    fn from_count(cnt: usize) -> Self;
}
impl Primitive for f32 {
    #[inline(always)] fn from_count(cnt: usize) -> Self { cnt as f32 }
}
impl Primitive for f64 {
    #[inline(always)] fn from_count(cnt: usize) -> Self { cnt as f64 }
}
