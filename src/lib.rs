pub mod error;
pub mod grid;
pub mod model;
pub mod ply_reader;
pub mod summary;
