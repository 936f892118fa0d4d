pub mod context;
pub mod data_type;
pub mod problem;

pub use context::{CodeObjectVersion, ExecutionContext, KernelNaming};
pub use data_type::DataType;
pub use problem::{Direction, Layout, ProblemDescription, SpatialDims, TensorDescriptor};
