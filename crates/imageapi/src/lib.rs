pub mod providers;
pub mod types;
pub mod utils;

pub use providers::{create_image_edit, openai::models::ImageEditResponse};
pub use types::{EditedImage, ImageClient, ImageEditRequest, ImageFile, ImageProvider};
pub use utils::download_image;
