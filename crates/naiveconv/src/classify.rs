//! Element-type classification of a convolution problem.

use serde::{Deserialize, Serialize};

use crate::{
    error::ResolveError, types::{DataType, ProblemDescription}
};

/// Category of the input side of a non-cast problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputCategory {
    Fp32,
    Fp16,
    Bf16,
    Int8,
}

impl InputCategory {
    pub const fn tag(self) -> &'static str {
        match self {
            InputCategory::Fp32 => "float",
            InputCategory::Fp16 => "half",
            InputCategory::Bf16 => "ushort",
            InputCategory::Int8 => "int8_t",
        }
    }
}

/// Accumulator used by the naive kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accumulator {
    Fp64,
    Int32,
}

impl Accumulator {
    pub const fn for_input(input: InputCategory) -> Self {
        match input {
            InputCategory::Fp32 | InputCategory::Fp16 | InputCategory::Bf16 => Accumulator::Fp64,
            InputCategory::Int8 => Accumulator::Int32,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Accumulator::Fp64 => "double",
            Accumulator::Int32 => "int32_t",
        }
    }
}

/// Category of the output tensor of a non-cast problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputCategory {
    Fp32,
    Fp16,
    Bf16,
    Int8,
    Int32,
}

impl OutputCategory {
    pub const fn tag(self) -> &'static str {
        match self {
            OutputCategory::Fp32 => "float",
            OutputCategory::Fp16 => "half",
            OutputCategory::Bf16 => "ushort",
            OutputCategory::Int8 => "int8_t",
            OutputCategory::Int32 => "int32_t",
        }
    }
}

/// Result of classifying a problem's element types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Plain types, named by category with an explicit accumulator.
    Native {
        input: InputCategory,
        accumulator: Accumulator,
        output: OutputCategory,
    },
    /// fp8 or cast problem. Roles keep their logical types and the kernel
    /// picks its own accumulator.
    Cast { input: DataType, weights: DataType, output: DataType },
}

impl Classification {
    pub fn input_category(&self) -> Option<InputCategory> {
        match self {
            Classification::Native { input, .. } => Some(*input),
            Classification::Cast { .. } => None,
        }
    }
}

/// Classify the element types of `problem`.
pub fn classify(problem: &ProblemDescription) -> Result<Classification, ResolveError> {
    if problem.uses_fp8_or_cast() {
        return Ok(Classification::Cast {
            input: problem.logical_input().data_type,
            weights: problem.weights.data_type,
            output: problem.logical_output().data_type,
        });
    }

    let input = input_category(problem).ok_or_else(|| unsupported(problem))?;
    let output = output_category(problem).ok_or_else(|| unsupported(problem))?;

    Ok(Classification::Native {
        input,
        accumulator: Accumulator::for_input(input),
        output,
    })
}

fn unsupported(problem: &ProblemDescription) -> ResolveError {
    ResolveError::unsupported_data_type(format!(
        "in={} weights={} out={}",
        problem.in_type(),
        problem.weights_type(),
        problem.out_type()
    ))
}

/// Any two of the three roles sharing `data_type` is enough.
fn pair_matches(problem: &ProblemDescription, data_type: DataType) -> bool {
    let (i, w, o) = (problem.in_type(), problem.weights_type(), problem.out_type());
    (i == data_type && w == data_type) || (o == data_type && w == data_type) || (i == data_type && o == data_type)
}

fn input_category(problem: &ProblemDescription) -> Option<InputCategory> {
    [
        (DataType::Float, InputCategory::Fp32),
        (DataType::Half, InputCategory::Fp16),
        (DataType::BFloat16, InputCategory::Bf16),
        (DataType::Int8, InputCategory::Int8),
    ]
    .into_iter()
    .find_map(|(data_type, category)| pair_matches(problem, data_type).then_some(category))
}

fn output_category(problem: &ProblemDescription) -> Option<OutputCategory> {
    let int8_operands = problem.in_type() == DataType::Int8 && problem.weights_type() == DataType::Int8;
    match problem.out_type() {
        // Also covers int8 x int8 -> float promotion.
        DataType::Float => Some(OutputCategory::Fp32),
        DataType::Half => Some(OutputCategory::Fp16),
        DataType::BFloat16 => Some(OutputCategory::Bf16),
        DataType::Int8 if int8_operands => Some(OutputCategory::Int8),
        DataType::Int32 if int8_operands => Some(OutputCategory::Int32),
        DataType::Int8 | DataType::Int32 | DataType::Fp8 | DataType::BFp8 => None,
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
