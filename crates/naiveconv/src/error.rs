use thiserror::Error;

/// Failures that abort resolution of a naive convolution variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unsupported data type: {0}")]
    UnsupportedDataType(String),
    #[error("unsupported convolution direction: {0}")]
    UnsupportedDirection(String),
    #[error("unsupported tensor layout: {0}")]
    UnsupportedLayout(String),
    #[error("tensor lengths {0:?} overflow the stride range")]
    StrideOverflow(Vec<usize>),
}

impl ResolveError {
    pub fn unsupported_data_type(detail: impl Into<String>) -> Self {
        Self::UnsupportedDataType(detail.into())
    }

    pub fn unsupported_direction(detail: impl Into<String>) -> Self {
        Self::UnsupportedDirection(detail.into())
    }

    pub fn unsupported_layout(detail: impl Into<String>) -> Self {
        Self::UnsupportedLayout(detail.into())
    }
}
