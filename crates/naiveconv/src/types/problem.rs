use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::data_type::DataType;
use crate::error::ResolveError;

/// Convolution direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    BackwardData,
    BackwardWeights,
}

impl Direction {
    /// Direction segment of a kernel name.
    pub const fn tag(self) -> &'static str {
        match self {
            Direction::Forward => "fwd",
            Direction::BackwardData => "bwd",
            Direction::BackwardWeights => "wrw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Direction {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fwd" | "forward" => Ok(Direction::Forward),
            "bwd" | "backward-data" | "backward_data" | "bwd-data" => Ok(Direction::BackwardData),
            "wrw" | "backward-weights" | "backward_weights" | "bwd-weights" => Ok(Direction::BackwardWeights),
            other => Err(ResolveError::unsupported_direction(other)),
        }
    }
}

/// Logical ordering of tensor axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Channel-major default layout (NCHW / NCDHW).
    Nchw,
    /// Channel-last layout (NHWC / NDHWC).
    Nhwc,
}

impl Layout {
    pub const fn is_default(self) -> bool {
        matches!(self, Layout::Nchw)
    }

    /// Layout segment of a kernel name for the given dimensionality.
    pub const fn tag(self, dims: SpatialDims) -> &'static str {
        match (self, dims) {
            (Layout::Nchw, SpatialDims::Two) => "nchw",
            (Layout::Nchw, SpatialDims::Three) => "ncdhw",
            (Layout::Nhwc, SpatialDims::Two) => "nhwc",
            (Layout::Nhwc, SpatialDims::Three) => "ndhwc",
        }
    }
}

impl FromStr for Layout {
    type Err = ResolveError;

    /// Accepts both the 2D and 3D spellings of each layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NCHW" | "NCDHW" => Ok(Layout::Nchw),
            "NHWC" | "NDHWC" => Ok(Layout::Nhwc),
            other => Err(ResolveError::unsupported_layout(other)),
        }
    }
}

/// Number of spatial dimensions of the convolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialDims {
    Two,
    Three,
}

impl SpatialDims {
    pub const fn count(self) -> usize {
        match self {
            SpatialDims::Two => 2,
            SpatialDims::Three => 3,
        }
    }
}

impl TryFrom<usize> for SpatialDims {
    type Error = ResolveError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(SpatialDims::Two),
            3 => Ok(SpatialDims::Three),
            other => Err(ResolveError::unsupported_layout(format!("{other} spatial dimensions"))),
        }
    }
}

/// Element type, optional cast override and geometry of one tensor.
///
/// Strides are kept in channel-major order whatever the logical layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TensorDescriptor {
    pub data_type: DataType,
    pub cast_type: Option<DataType>,
    pub lengths: Vec<usize>,
    pub strides: Vec<usize>,
}

impl TensorDescriptor {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            cast_type: None,
            lengths: Vec::new(),
            strides: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cast(mut self, cast_type: DataType) -> Self {
        self.cast_type = Some(cast_type);
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, lengths: Vec<usize>, strides: Vec<usize>) -> Self {
        self.lengths = lengths;
        self.strides = strides;
        self
    }

    /// Fully packed tensor of `layout` with `lengths` given as N, C, spatial...
    pub fn packed(data_type: DataType, layout: Layout, lengths: Vec<usize>) -> Result<Self, ResolveError> {
        let strides = match layout {
            Layout::Nchw => Self::packed_strides(&lengths),
            Layout::Nhwc => Self::channel_last_strides(&lengths),
        };
        match strides {
            Some(strides) => Ok(Self::new(data_type).with_geometry(lengths, strides)),
            None => Err(ResolveError::StrideOverflow(lengths)),
        }
    }

    /// Packed channel-major strides for `lengths`, `None` if a stride overflows.
    pub fn packed_strides(lengths: &[usize]) -> Option<Vec<usize>> {
        let mut strides = vec![1usize; lengths.len()];
        for i in (0..lengths.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1].checked_mul(lengths[i + 1])?;
        }
        Some(strides)
    }

    /// Strides of a packed channel-last tensor, listed in N, C, spatial... order.
    pub fn channel_last_strides(lengths: &[usize]) -> Option<Vec<usize>> {
        let [_, c_len, spatial @ ..] = lengths else {
            return Self::packed_strides(lengths);
        };

        let mut strides = vec![0; lengths.len()];
        strides[1] = 1;
        let mut running = *c_len;
        for (i, len) in spatial.iter().enumerate().rev() {
            strides[i + 2] = running;
            running = running.checked_mul(*len)?;
        }
        strides[0] = running;
        Some(strides)
    }
}

/// A fully specified convolution problem.
///
/// `input` and `output` are direction-relative: for backward directions the
/// `input` descriptor holds the incoming gradient. See
/// [`ProblemDescription::logical_input`] for the convolution's own x/y view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemDescription {
    pub direction: Direction,
    pub layout: Layout,
    pub spatial_dims: SpatialDims,
    pub input: TensorDescriptor,
    pub weights: TensorDescriptor,
    pub output: TensorDescriptor,
}

impl ProblemDescription {
    pub fn new(
        direction: Direction,
        layout: Layout,
        spatial_dims: SpatialDims,
        input: TensorDescriptor,
        weights: TensorDescriptor,
        output: TensorDescriptor,
    ) -> Self {
        Self {
            direction,
            layout,
            spatial_dims,
            input,
            weights,
            output,
        }
    }

    /// Problem whose tensors carry only element types.
    pub fn from_types(direction: Direction, layout: Layout, spatial_dims: SpatialDims, in_type: DataType, weights_type: DataType, out_type: DataType) -> Self {
        Self::new(
            direction,
            layout,
            spatial_dims,
            TensorDescriptor::new(in_type),
            TensorDescriptor::new(weights_type),
            TensorDescriptor::new(out_type),
        )
    }

    pub fn in_type(&self) -> DataType {
        self.input.data_type
    }

    pub fn weights_type(&self) -> DataType {
        self.weights.data_type
    }

    pub fn out_type(&self) -> DataType {
        self.output.data_type
    }

    /// True when any tensor is stored as fp8 or bf8.
    pub fn has_fp8_family_tensor(&self) -> bool {
        [self.in_type(), self.weights_type(), self.out_type()]
            .into_iter()
            .any(DataType::is_fp8_family)
    }

    /// True when any tensor carries a cast-type override.
    pub fn is_tensors_casted(&self) -> bool {
        self.input.cast_type.is_some() || self.weights.cast_type.is_some() || self.output.cast_type.is_some()
    }

    /// Selects the fp8/cast kernel path for naming, file and compile options.
    pub fn uses_fp8_or_cast(&self) -> bool {
        self.has_fp8_family_tensor() || self.is_tensors_casted()
    }

    /// The convolution's own input (x) tensor, independent of direction.
    pub fn logical_input(&self) -> &TensorDescriptor {
        match self.direction {
            Direction::Forward => &self.input,
            Direction::BackwardData | Direction::BackwardWeights => &self.output,
        }
    }

    /// The convolution's own output (y) tensor, independent of direction.
    pub fn logical_output(&self) -> &TensorDescriptor {
        match self.direction {
            Direction::Forward => &self.output,
            Direction::BackwardData | Direction::BackwardWeights => &self.input,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
