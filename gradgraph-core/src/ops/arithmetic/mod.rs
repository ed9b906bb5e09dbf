// Binary arithmetic operations
pub mod add;
pub mod mul;
pub mod sub;

pub use add::add_op;
pub use mul::mul_op;
pub use sub::sub_op;
