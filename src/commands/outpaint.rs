use std::fmt;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use futures::stream::{self, StreamExt, TryStreamExt};
use imageapi::utils::is_http_url;
use tracing::{debug, info, warn};

use crate::commands::validate::validate_environment;
use crate::config::OutpaintConfig;
use crate::error::{OutpaintError, Result};
use crate::fs_utils::output_path;
use crate::image_ops::{normalize_to_rgba, resize_in_place};
use crate::models::{EditResult, RunReport};
use crate::service::EditService;

/// Where a run currently is. Any failure moves straight to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Validating,
    Normalizing,
    Invoking,
    Downloading,
    Resizing,
    Done,
    Failed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Idle => "idle",
            RunPhase::Validating => "validating",
            RunPhase::Normalizing => "normalizing",
            RunPhase::Invoking => "invoking",
            RunPhase::Downloading => "downloading",
            RunPhase::Resizing => "resizing",
            RunPhase::Done => "done",
            RunPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

struct PhaseTracker {
    current: RunPhase,
}

impl PhaseTracker {
    fn new() -> Self {
        Self {
            current: RunPhase::Idle,
        }
    }

    fn enter(&mut self, next: RunPhase) {
        debug!(from = %self.current, to = %next, "run phase");
        self.current = next;
    }
}

/// Runs one outpainting batch: validate, normalize, request the edit, then
/// download and resize every returned variant.
///
/// Nothing is sent to `service` unless validation and normalization both
/// succeed.
pub async fn run_outpaint(config: &OutpaintConfig, service: &dyn EditService) -> Result<RunReport> {
    let mut phases = PhaseTracker::new();
    match run_phases(config, service, &mut phases).await {
        Ok(report) => {
            phases.enter(RunPhase::Done);
            Ok(report)
        }
        Err(err) => {
            let failed_in = phases.current;
            phases.enter(RunPhase::Failed);
            debug!(phase = %failed_in, "run aborted");
            Err(err)
        }
    }
}

async fn run_phases(
    config: &OutpaintConfig,
    service: &dyn EditService,
    phases: &mut PhaseTracker,
) -> Result<RunReport> {
    phases.enter(RunPhase::Validating);
    validate_environment(config)?;
    info!("environment validated");

    phases.enter(RunPhase::Normalizing);
    let image_path = config.normalized_src_path();
    let mask_path = config.normalized_mask_path();
    normalize(config.src_image_path(), image_path.clone()).await?;
    normalize(config.mask_image_path(), mask_path.clone()).await?;

    phases.enter(RunPhase::Invoking);
    info!("sending images for editing (this can take a few seconds)");
    let mut results = service
        .create_edit(
            &image_path,
            &mask_path,
            &config.prompt,
            config.number_of_images,
        )
        .await?;

    let requested = config.number_of_images;
    let received = results.len();
    if received < requested as usize {
        warn!("requested {requested} variants but received {received}");
    }
    results.truncate(requested as usize);

    phases.enter(RunPhase::Downloading);
    let mut outputs: Vec<PathBuf> = stream::iter(
        results
            .into_iter()
            .enumerate()
            .map(|(index, result)| fetch_result(config, service, index, result)),
    )
    .buffer_unordered(config.max_concurrent_downloads)
    .try_collect()
    .await?;
    outputs.sort();

    Ok(RunReport {
        requested,
        received,
        outputs,
    })
}

async fn normalize(input: PathBuf, output: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || normalize_to_rgba(&input, &output)).await?
}

/// Downloads one result, writes it over its destination file and resizes it
/// in place.
async fn fetch_result(
    config: &OutpaintConfig,
    service: &dyn EditService,
    index: usize,
    result: EditResult,
) -> Result<PathBuf> {
    let path = output_path(config, index);

    debug!(result = index + 1, phase = %RunPhase::Downloading);
    if let Some(revised) = &result.revised_prompt {
        debug!(result = index + 1, "service revised the prompt to: {revised}");
    }
    let bytes = match (result.url.as_deref(), result.b64_json.as_deref()) {
        (Some(url), _) if is_http_url(url) => service.download(url).await?,
        (_, Some(data)) => BASE64_ENGINE
            .decode(data.trim())
            .map_err(|source| OutpaintError::InlineDecode { index, source })?,
        _ => return Err(OutpaintError::MalformedResult { index }),
    };

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| OutpaintError::WriteOutput {
            path: path.clone(),
            source,
        })?;
    info!("result {} saved to {}", index + 1, path.display());

    debug!(result = index + 1, phase = %RunPhase::Resizing);
    let (width, height) = (config.target_width, config.target_height);
    let resize_path = path.clone();
    tokio::task::spawn_blocking(move || resize_in_place(&resize_path, width, height)).await??;

    Ok(path)
}
