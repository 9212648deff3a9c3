use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

use palette_map::{MapReport, PaletteMapper, RgbaBuffer};

use crate::error::AppError;
use crate::models::AppConfig;
use crate::rendering::{read_png, write_png};
use crate::services::output::output_path;

/// Result of remapping one file
#[derive(Debug, Clone)]
pub struct RemapOutcome {
    pub output: PathBuf,
    pub report: MapReport,
}

/// Applies a validated configuration to PNG files
pub struct RemapService {
    config: AppConfig,
    mapper: PaletteMapper,
}

impl RemapService {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let mapper = PaletteMapper::new(config.palette()?).options(config.to_options());

        tracing::debug!(
            palette = config.palette.len(),
            mode = ?config.mode,
            contrast_stretch = config.contrast_stretch,
            "Remap service ready"
        );
        Ok(Self { config, mapper })
    }

    /// Map an in-memory image.
    pub fn map_image(&self, image: &mut RgbaBuffer) -> MapReport {
        self.mapper.map(image)
    }

    /// Map `input` and write the result.
    ///
    /// Without an explicit `output`, the destination follows
    /// `overwrite_original`.
    pub fn remap_file(&self, input: &Path, output: Option<&Path>) -> Result<RemapOutcome, AppError> {
        self.remap_file_at(input, output, Local::now().naive_local())
    }

    /// [`remap_file`](Self::remap_file) with a fixed clock.
    pub fn remap_file_at(
        &self,
        input: &Path,
        output: Option<&Path>,
        now: NaiveDateTime,
    ) -> Result<RemapOutcome, AppError> {
        let mut image = read_png(input)?;
        let report = self.map_image(&mut image);

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| output_path(input, self.config.overwrite_original, now));
        write_png(&output, &image)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            mapped = report.mapped,
            "Wrote mapped image"
        );
        Ok(RemapOutcome { output, report })
    }

    /// Run the mapping on `input` without writing anything.
    pub fn analyze_file(&self, input: &Path) -> Result<MapReport, AppError> {
        let mut image = read_png(input)?;
        Ok(self.map_image(&mut image))
    }
}
