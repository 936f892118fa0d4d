//! Kernel-variant resolution for the naive convolution kernel family.
//!
//! Given a [`ProblemDescription`] and an [`ExecutionContext`], the resolver
//! classifies the element types, decides whether the variant may run on the
//! context, and derives the kernel identifier, source file and compile
//! options that a kernel build/launch layer needs.

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod gate;
pub mod group_stride;
pub mod kernel_file;
pub mod naming;
pub mod prefs;
pub mod resolver;
pub mod types;

pub use classify::{Accumulator, Classification, InputCategory, OutputCategory, classify};
pub use diagnostics::log_tensor_strides;
pub use error::ResolveError;
pub use gate::{KernelFamily, is_applicable, kernel_family};
pub use group_stride::group_stride_index;
pub use kernel_file::{KernelFile, compile_options, compile_options_for, kernel_file};
pub use naming::{build_kernel_name, kernel_name};
pub use resolver::{KernelIdentity, KernelResolution, resolve};
pub use types::{
    CodeObjectVersion, DataType, Direction, ExecutionContext, KernelNaming, Layout, ProblemDescription, SpatialDims, TensorDescriptor
};
