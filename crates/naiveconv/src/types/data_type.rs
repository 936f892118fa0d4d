use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Element type of a convolution tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Float,
    Half,
    BFloat16,
    Int8,
    Int32,
    /// 8-bit float, e4m3 encoding.
    Fp8,
    /// 8-bit float, e5m2 encoding.
    BFp8,
}

impl DataType {
    /// Type name as spelled inside the kernel sources.
    ///
    /// Used verbatim by fp8/cast kernel names and by the `-D*_TYPE=` definitions.
    pub const fn kernel_type_name(self) -> &'static str {
        match self {
            DataType::Float => "float",
            DataType::Half => "half",
            DataType::BFloat16 => "bfloat16",
            DataType::Int8 => "int8_t",
            DataType::Int32 => "int",
            DataType::Fp8 => "miopen_f8",
            DataType::BFp8 => "miopen_bf8",
        }
    }

    pub const fn is_fp8_family(self) -> bool {
        matches!(self, DataType::Fp8 | DataType::BFp8)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Float => write!(f, "fp32"),
            DataType::Half => write!(f, "fp16"),
            DataType::BFloat16 => write!(f, "bf16"),
            DataType::Int8 => write!(f, "int8"),
            DataType::Int32 => write!(f, "int32"),
            DataType::Fp8 => write!(f, "fp8"),
            DataType::BFp8 => write!(f, "bf8"),
        }
    }
}

impl FromStr for DataType {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fp32" | "f32" | "float" | "float32" => Ok(DataType::Float),
            "fp16" | "f16" | "half" | "float16" => Ok(DataType::Half),
            "bf16" | "bfp16" | "bfloat16" => Ok(DataType::BFloat16),
            "int8" | "i8" | "int8_t" => Ok(DataType::Int8),
            "int32" | "i32" | "int" => Ok(DataType::Int32),
            "fp8" | "f8" => Ok(DataType::Fp8),
            "bf8" | "bfp8" => Ok(DataType::BFp8),
            other => Err(ResolveError::unsupported_data_type(other)),
        }
    }
}
