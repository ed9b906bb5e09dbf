// Element-wise math functions of one operand
pub mod ln;
pub mod sin;

pub use ln::ln_op;
pub use sin::sin_op;
