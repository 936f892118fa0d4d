//! Backend admission for the naive convolution family.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    classify::{Classification, InputCategory, classify}, types::{ExecutionContext, ProblemDescription}
};

/// Devices with hand-written assembly naive kernels.
pub const ASSEMBLY_DEVICES: [&str; 2] = ["gfx906", "gfx908"];

/// Kernel family a variant is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelFamily {
    Assembly,
    Generic,
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelFamily::Assembly => write!(f, "assembly"),
            KernelFamily::Generic => write!(f, "generic"),
        }
    }
}

/// Family selected for `problem` on `ctx`.
///
/// Assembly requires an allow-listed device, code object V3, the default
/// layout and an fp32/fp16/bf16 input category. Problems that fail to
/// classify, int8 and fp8/cast problems always land in the generic family.
pub fn kernel_family(ctx: &ExecutionContext, problem: &ProblemDescription) -> KernelFamily {
    match classify(problem) {
        Ok(classification) => family_for(ctx, problem, &classification),
        Err(_) => KernelFamily::Generic,
    }
}

pub(crate) fn family_for(ctx: &ExecutionContext, problem: &ProblemDescription, classification: &Classification) -> KernelFamily {
    let device_ok = ASSEMBLY_DEVICES.contains(&ctx.device_name.as_str());
    let input_ok = matches!(
        classification.input_category(),
        Some(InputCategory::Fp32 | InputCategory::Fp16 | InputCategory::Bf16)
    );

    if device_ok && ctx.code_object.is_v3() && problem.layout.is_default() && input_ok {
        KernelFamily::Assembly
    } else {
        KernelFamily::Generic
    }
}

pub(crate) fn backend_enabled(ctx: &ExecutionContext, family: KernelFamily) -> bool {
    match family {
        KernelFamily::Assembly => ctx.use_asm_kernels,
        KernelFamily::Generic => ctx.use_hip_kernels,
    }
}

/// Whether the naive variant may run on `ctx`.
///
/// The backend of the selected family must be enabled; there is no fallback
/// to the other family.
pub fn is_applicable(ctx: &ExecutionContext, problem: &ProblemDescription) -> bool {
    backend_enabled(ctx, kernel_family(ctx, problem))
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
