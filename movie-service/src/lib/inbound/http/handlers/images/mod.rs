pub mod get_image;

pub use get_image::get_image;
