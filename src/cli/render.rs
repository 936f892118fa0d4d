use std::fmt::Write as _;

use naiveconv::{Classification, KernelResolution};

use super::{config::OutputFormat, error::CliError};

/// Render a resolution in the requested format.
pub fn render(resolution: &KernelResolution, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(resolution)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resolution)?),
    }
}

pub fn render_text(resolution: &KernelResolution) -> String {
    let mut out = String::new();
    let identity = &resolution.identity;
    let _ = writeln!(out, "kernel:          {}", identity.kernel_name);
    let _ = writeln!(out, "file:            {}", identity.kernel_file);
    let _ = writeln!(out, "family:          {}", resolution.family);
    let _ = writeln!(out, "applicable:      {}", if resolution.applicable { "yes" } else { "no" });
    let _ = writeln!(out, "classification:  {}", describe(&resolution.classification));
    let _ = write!(out, "compile options: {}", identity.compile_options);
    out
}

fn describe(classification: &Classification) -> String {
    match classification {
        Classification::Native {
            input,
            accumulator,
            output,
        } => format!("native input={input:?} accumulator={accumulator:?} output={output:?}"),
        Classification::Cast { input, weights, output } => {
            format!("cast input={} weights={} output={}", input, weights, output)
        }
    }
}
