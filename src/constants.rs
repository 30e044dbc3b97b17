pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const ENDPOINT_ENV: &str = "OPENAI_BASE_URL";
pub const DEFAULT_PROMPT: &str = "high mountain";
pub const DEFAULT_NUMBER_OF_IMAGES: u32 = 1;
pub const MAX_NUMBER_OF_IMAGES: u32 = 10;
pub const SRC_DIR_NAME: &str = "src";
pub const RGBA_DIR_NAME: &str = "rgba";
pub const DEST_DIR_NAME: &str = "dest";
pub const SRC_IMAGE_FILE: &str = "src.png";
pub const MASK_IMAGE_FILE: &str = "mask.png";
pub const OUTPUT_IMAGE_FILE: &str = "outputimage.png";
pub const NORMALIZED_PREFIX: &str = "_";
pub const TARGET_WIDTH: u32 = 2048;
pub const TARGET_HEIGHT: u32 = 1024;
pub const CANVAS_WIDTH: u32 = 2042;
pub const CANVAS_HEIGHT: u32 = 1021;
pub const MAX_CONCURRENT_DOWNLOADS: usize = 4;
