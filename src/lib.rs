pub mod container;
pub mod error;
pub mod packer;
pub mod render;
pub mod types;
