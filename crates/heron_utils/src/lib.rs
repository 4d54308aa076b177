pub mod process;
pub mod term;
