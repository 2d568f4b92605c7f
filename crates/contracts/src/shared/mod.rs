pub mod embedded;
pub mod lenient;
pub mod number;
