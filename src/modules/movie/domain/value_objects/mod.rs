pub mod image_url;

pub use image_url::{ImageSize, ImageUrlBuilder};
