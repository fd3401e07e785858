pub mod address;
pub mod image;
