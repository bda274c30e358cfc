//! Conversion orchestrator: same-format short-circuit, output naming, and
//! the load→export pipeline.

use std::fs;

use tracing::info;

use shapehub_core::result::ConvertResult;
use shapehub_core::traits::kernel::GeometryKernel;
use shapehub_core::types::format::{InputFormat, OutputFormat};
use shapehub_core::types::outcome::ConversionOutcome;
use shapehub_core::types::request::ConversionRequest;

use crate::config::ConverterConfig;
use crate::exporter::{ShapeExporter, validate_stl_deflection};
use crate::loader::GeometryLoader;

/// Orchestrates single-file conversions against a geometry kernel.
///
/// Owns the kernel; each `convert` call is fully independent and leaves no
/// state behind — the loaded shape lives only for the span of the call.
pub struct Converter<K> {
    kernel: K,
    config: ConverterConfig,
}

impl<K: GeometryKernel> Converter<K> {
    /// Create a converter with default configuration.
    pub fn new(kernel: K) -> Self {
        Self::with_config(kernel, ConverterConfig::default())
    }

    /// Create a converter with explicit configuration.
    pub fn with_config(kernel: K, config: ConverterConfig) -> Self {
        Self { kernel, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert one file according to `request`.
    ///
    /// Resolves the input format, short-circuits when it already matches the
    /// requested output format, and otherwise runs load → (sew) → export.
    /// Produces exactly one [`ConversionOutcome`] on success; any resolver,
    /// loader, exporter, or filesystem error propagates unmodified — no
    /// retries, no rollback.
    pub fn convert(&self, request: &ConversionRequest) -> ConvertResult<ConversionOutcome> {
        let input_format = InputFormat::from_path(&request.input)?;

        // Fail fast on invalid STL parameters, before any kernel call or
        // filesystem write.
        if request.target == OutputFormat::Stl {
            validate_stl_deflection(request.stl_deflection)?;
        }

        if OutputFormat::from(input_format) == request.target {
            return self.short_circuit(request, input_format);
        }

        let loader = GeometryLoader::new(&self.kernel, self.config.sew_tolerance);
        let shape = loader.load(&request.input, input_format, request.sew)?;

        let output_name = format!(
            "{}_from{}.{}",
            request.file_stem(),
            input_format,
            request.target.extension()
        );
        fs::create_dir_all(&request.output_dir)?;
        let output_path = request.output_dir.join(output_name);

        ShapeExporter::new(&self.kernel).export(
            &shape,
            request.target,
            &output_path,
            request.stl_deflection,
        )?;

        info!(
            input = %request.input.display(),
            output = %output_path.display(),
            "Converted {} to {}",
            input_format,
            request.target
        );
        Ok(ConversionOutcome::Success {
            output: output_path,
        })
    }

    /// Same-format handling: copy verbatim in batch mode, explain in file
    /// mode. The output directory is created in both branches.
    fn short_circuit(
        &self,
        request: &ConversionRequest,
        format: InputFormat,
    ) -> ConvertResult<ConversionOutcome> {
        fs::create_dir_all(&request.output_dir)?;

        if request.batch_mode {
            let output = request.output_dir.join(request.file_name());
            fs::copy(&request.input, &output)?;
            info!(
                input = %request.input.display(),
                output = %output.display(),
                "Copied same-format file without conversion"
            );
            Ok(ConversionOutcome::Skipped { output })
        } else {
            Ok(ConversionOutcome::Message {
                text: format!("No point in converting a {format} file to a {format} file."),
            })
        }
    }
}
