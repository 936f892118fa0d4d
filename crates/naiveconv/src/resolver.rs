//! One-shot resolution of a naive convolution variant.

use serde::Serialize;

use crate::{
    classify::{Classification, classify}, error::ResolveError, gate::{KernelFamily, backend_enabled, family_for}, kernel_file::{compile_options_for, kernel_file}, naming::kernel_name, types::{ExecutionContext, ProblemDescription}
};

/// Everything a kernel build/launch layer needs to locate and instantiate a variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KernelIdentity {
    pub kernel_name: String,
    pub kernel_file: String,
    pub compile_options: String,
}

/// Identity plus the admission decision, derived from a single classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KernelResolution {
    pub family: KernelFamily,
    /// `false` means "try another variant", not a failure.
    pub applicable: bool,
    pub classification: Classification,
    pub identity: KernelIdentity,
}

/// Resolve `problem` on `ctx`.
///
/// Fails without partial output when the element types cannot be classified.
pub fn resolve(ctx: &ExecutionContext, problem: &ProblemDescription) -> Result<KernelResolution, ResolveError> {
    let classification = classify(problem)?;
    let family = family_for(ctx, problem, &classification);
    let file = kernel_file(ctx, problem);

    let resolution = KernelResolution {
        family,
        applicable: backend_enabled(ctx, family),
        classification,
        identity: KernelIdentity {
            kernel_name: kernel_name(problem, &classification, ctx.naming),
            kernel_file: file.file_name().to_string(),
            compile_options: compile_options_for(file, ctx, problem),
        },
    };

    tracing::debug!(
        target: "naiveconv::resolve",
        device = %ctx.device_name,
        family = %resolution.family,
        applicable = resolution.applicable,
        kernel = %resolution.identity.kernel_name,
        file = %resolution.identity.kernel_file,
        "resolved naive convolution variant"
    );

    Ok(resolution)
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
