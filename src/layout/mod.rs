pub mod catalog;
pub mod geometry;
pub mod normalize;
pub mod parser;
