pub mod degree;
