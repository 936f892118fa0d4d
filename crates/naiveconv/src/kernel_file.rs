//! Source artifact and compile definitions of a resolved variant.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::types::{DataType, ExecutionContext, ProblemDescription};

/// fp8 clipping mode expected by `fp8_naive_conv.cpp`.
pub const FP8_CLIPPING: u32 = 1;
/// fp8 IEEE exponent-bias mode expected by `fp8_naive_conv.cpp`.
pub const FP8_IEEE_EXPONENT_BIAS: u32 = 0;
/// Metadata version symbol for assembly sources.
pub const ROCM_METADATA_VERSION: u32 = 5;

/// Source files of the naive convolution family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelFile {
    Generic,
    Fp8,
    /// Hand-written assembly kernels. Never selected by [`kernel_file`]: their
    /// symbol names do not follow the generic naming grammar, so selecting
    /// them yields empty code objects on code-object-V3 systems.
    Assembly,
}

impl KernelFile {
    pub const fn file_name(self) -> &'static str {
        match self {
            KernelFile::Generic => "naive_conv.cpp",
            KernelFile::Fp8 => "fp8_naive_conv.cpp",
            KernelFile::Assembly => "naive_conv_gcn.s",
        }
    }

    pub fn is_assembly(self) -> bool {
        self.file_name().ends_with(".s")
    }
}

impl fmt::Display for KernelFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Source file for `problem`.
// TODO: select KernelFile::Assembly for gfx906/gfx908 + code object V3 once the
// assembly symbols match `kernel_name`.
pub fn kernel_file(_ctx: &ExecutionContext, problem: &ProblemDescription) -> KernelFile {
    if problem.uses_fp8_or_cast() {
        KernelFile::Fp8
    } else {
        KernelFile::Generic
    }
}

/// Compile options for the file [`kernel_file`] selects.
pub fn compile_options(ctx: &ExecutionContext, problem: &ProblemDescription) -> String {
    compile_options_for(kernel_file(ctx, problem), ctx, problem)
}

/// Compile options for building `file` for `problem`.
///
/// The string is order-stable so it can key compiled-kernel caches.
pub fn compile_options_for(file: KernelFile, ctx: &ExecutionContext, problem: &ProblemDescription) -> String {
    if file.is_assembly() {
        return format!(" -Wa,-defsym,ROCM_METADATA_VERSION={ROCM_METADATA_VERSION}");
    }

    let mut options = ctx.general_compile_options.clone();
    if !problem.uses_fp8_or_cast() {
        return options;
    }

    let input = problem.logical_input();
    let output = problem.logical_output();

    push_type(&mut options, "INPUT_TYPE", input.data_type);
    push_type(&mut options, "WEIGHTS_TYPE", problem.weights.data_type);
    push_type(&mut options, "OUTPUT_TYPE", output.data_type);
    if let Some(cast) = input.cast_type {
        push_type(&mut options, "INPUT_CAST_TYPE", cast);
    }
    if let Some(cast) = problem.weights.cast_type {
        push_type(&mut options, "WEIGHTS_CAST_TYPE", cast);
    }
    if let Some(cast) = output.cast_type {
        push_type(&mut options, "OUTPUT_CAST_TYPE", cast);
    }
    push_define(&mut options, "MIOPEN_FP8_CLIPPING", FP8_CLIPPING);
    push_define(&mut options, "MIOPEN_FP8_IEEE_EXPONENT_BIAS", FP8_IEEE_EXPONENT_BIAS);
    // No accumulator define: the fp8 kernels default to double.
    options
}

fn push_type(options: &mut String, name: &str, data_type: DataType) {
    push_define(options, name, data_type.kernel_type_name());
}

fn push_define(options: &mut String, name: &str, value: impl Display) {
    options.push_str(&format!(" -D{name}={value}"));
}

#[cfg(test)]
#[path = "kernel_file_test.rs"]
mod tests;
