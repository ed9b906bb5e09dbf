pub mod numeric;

pub use numeric::GradNumeric;
