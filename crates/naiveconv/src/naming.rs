//! Canonical kernel identifiers of the naive convolution family.
//!
//! Grammar, lower case and underscore separated:
//!
//! ```text
//! naive_conv_{packed|nonpacked}_{fwd|bwd|wrw}_{nchw|ncdhw|nhwc|ndhwc}_{types}
//! ```
//!
//! `{types}` is `{input}_{accumulator}_{output}` for plain problems and
//! `{input}_{weights}_{output}` kernel type names for fp8/cast problems.

use crate::{
    classify::{Classification, classify}, error::ResolveError, types::{KernelNaming, ProblemDescription}
};

/// Kernel identifier for an already classified problem.
pub fn kernel_name(problem: &ProblemDescription, classification: &Classification, naming: KernelNaming) -> String {
    let types = match classification {
        Classification::Native { input, accumulator, output } => {
            format!("{}_{}_{}", input.tag(), accumulator.tag(), output.tag())
        }
        Classification::Cast { input, weights, output } => format!(
            "{}_{}_{}",
            input.kernel_type_name(),
            weights.kernel_type_name(),
            output.kernel_type_name()
        ),
    };

    format!(
        "{}{}_{}_{}",
        naming.prefix(),
        problem.direction.tag(),
        problem.layout.tag(problem.spatial_dims),
        types
    )
}

/// Classify `problem` and build its kernel identifier.
pub fn build_kernel_name(problem: &ProblemDescription, naming: KernelNaming) -> Result<String, ResolveError> {
    let classification = classify(problem)?;
    Ok(kernel_name(problem, &classification, naming))
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
