use num_traits::{Float, NumAssignOps, ToPrimitive};
use std::fmt::{Debug, Display};

/// A trait representing the scalar types a computation graph can hold.
///
/// Values and gradients of every node share this type. The bounds cover the
/// arithmetic the operations need (`Float` brings `ln`, `sin`, `cos`, `zero`, `one`)
/// plus `Debug`/`Display` so nodes can be logged and rendered.
pub trait GradNumeric:
    Float // Includes Num + Copy + NumCast + PartialOrd + Neg
    + NumAssignOps // AddAssign for gradient accumulation
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Lossy conversion used when reporting a value inside an error.
    fn to_report(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl GradNumeric for f32 {}
impl GradNumeric for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_numeric<T: GradNumeric>(value: T) -> f64 {
        value.to_report()
    }

    #[test]
    fn test_f32_impl_grad_numeric() {
        assert_eq!(process_numeric(1.5f32), 1.5);
    }

    #[test]
    fn test_f64_impl_grad_numeric() {
        assert_eq!(process_numeric(-2.25f64), -2.25);
    }
}
