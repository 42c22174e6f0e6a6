pub mod bounds;
pub mod vector3;
