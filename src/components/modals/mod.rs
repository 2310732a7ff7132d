pub mod helpers;
pub mod image;

pub use image::ImageModal;
