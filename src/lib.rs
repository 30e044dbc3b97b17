//! Outpainting batch runner.
//!
//! Prepares a source/mask image pair, submits it to an image edit service,
//! then downloads and resizes every returned variant.
//!
//! ```no_run
//! use outpaint_lib::{run_outpaint, OpenAiEditService, OutpaintConfig};
//!
//! # async fn demo() -> outpaint_lib::Result<()> {
//! let config = OutpaintConfig::default().with_env();
//! let service = OpenAiEditService::new(
//!     config.api_key().unwrap_or_default(),
//!     &config.endpoint,
//!     config.model.clone(),
//!     config.size.clone(),
//! );
//! let report = run_outpaint(&config, &service).await?;
//! println!("{:?}", report.outputs);
//! # Ok(())
//! # }
//! ```

mod commands;
pub mod config;
mod constants;
pub mod error;
mod fs_utils;
pub mod image_ops;
mod models;
pub mod service;

pub use commands::outpaint::{run_outpaint, RunPhase};
pub use commands::prepare::prepare_inputs;
pub use commands::validate::validate_environment;

pub use config::{load_config_file, OutpaintConfig};

pub use constants::{
    API_KEY_ENV, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_OPENAI_ENDPOINT, ENDPOINT_ENV,
    MAX_NUMBER_OF_IMAGES, OUTPUT_IMAGE_FILE, TARGET_HEIGHT, TARGET_WIDTH,
};

pub use error::{ErrorKind, OutpaintError, Result};

pub use models::{ConfigFile, EditResult, RunReport};

pub use service::{EditService, OpenAiEditService};
