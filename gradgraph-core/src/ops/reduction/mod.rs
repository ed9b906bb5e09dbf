// Reductions over several operands, expressed with binary nodes
pub mod sum;

pub use sum::sum_op;
