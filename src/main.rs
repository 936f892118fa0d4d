use anyhow::Result;
use clap::Parser;

use naiveconv::{log_tensor_strides, resolve};
use naiveconv_driver::cli::{CliConfig, render::render};
use naiveconv_instrumentation::prelude::*;

fn main() -> Result<()> {
    let cli_config = CliConfig::parse();

    let app_config = AppConfig::from_env()?.with_verbosity(cli_config.verbose);
    init_tracing(&app_config);

    let problem = cli_config.problem.to_problem()?;
    let ctx = cli_config.context.to_context()?;

    if cli_config.problem.has_geometry() {
        log_tensor_strides(&problem.input, &problem.weights, &problem.output);
    }

    let resolution = resolve(&ctx, &problem)?;
    if !resolution.applicable {
        warn!(family = %resolution.family, device = %ctx.device_name, "variant is not applicable on this context");
    }

    println!("{}", render(&resolution, cli_config.output_format)?);
    Ok(())
}
