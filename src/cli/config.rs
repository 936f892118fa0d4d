use clap::Parser;

use naiveconv::{
    CodeObjectVersion, DataType, Direction, ExecutionContext, KernelNaming, Layout, ProblemDescription, ResolveError, SpatialDims, TensorDescriptor, prefs::naming_from_env
};

use super::error::CliError;

/// Command-line interface configuration for the naiveconv driver
#[derive(Debug, Parser)]
#[command(name = "naiveconv")]
#[command(about = "Resolve the naive convolution kernel variant for a problem", long_about = None)]
pub struct CliConfig {
    /// Problem description options
    #[command(flatten)]
    pub problem: ProblemArgs,

    /// Execution context options
    #[command(flatten)]
    pub context: ContextArgs,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Convolution problem options
#[derive(Debug, Parser)]
pub struct ProblemArgs {
    /// Convolution direction (fwd, bwd, wrw)
    #[arg(short = 'F', long, default_value = "fwd")]
    pub direction: Direction,

    /// Tensor layout (NCHW, NHWC, NCDHW, NDHWC)
    #[arg(short = 'I', long, default_value = "NCHW")]
    pub layout: Layout,

    /// Number of spatial dimensions (2 or 3)
    #[arg(long, default_value_t = 2)]
    pub spatial_dims: usize,

    /// Input element type (fp32, fp16, bf16, int8, int32, fp8, bf8)
    #[arg(long, default_value = "fp32")]
    pub in_type: DataType,

    /// Weights element type (defaults to the input type)
    #[arg(long)]
    pub weights_type: Option<DataType>,

    /// Output element type (defaults to the input type)
    #[arg(long)]
    pub out_type: Option<DataType>,

    /// Cast override for the input tensor
    #[arg(long)]
    pub in_cast: Option<DataType>,

    /// Cast override for the weights tensor
    #[arg(long)]
    pub weights_cast: Option<DataType>,

    /// Cast override for the output tensor
    #[arg(long)]
    pub out_cast: Option<DataType>,

    /// Input lengths N,C,spatial... (enables stride diagnostics)
    #[arg(long, value_delimiter = ',')]
    pub in_lengths: Vec<usize>,

    /// Weights lengths K,C,spatial...
    #[arg(long, value_delimiter = ',')]
    pub weights_lengths: Vec<usize>,

    /// Output lengths N,K,spatial...
    #[arg(long, value_delimiter = ',')]
    pub out_lengths: Vec<usize>,
}

/// Execution context options
#[derive(Debug, Parser)]
pub struct ContextArgs {
    /// Device identifier, e.g. gfx908
    #[arg(long, default_value = "gfx90a")]
    pub device: String,

    /// Disable the assembly kernel backend
    #[arg(long)]
    pub no_asm: bool,

    /// Disable the generic device kernel backend
    #[arg(long)]
    pub no_hip: bool,

    /// Code-object version of the target (2-5)
    #[arg(long, default_value_t = 3)]
    pub code_object: u32,

    /// Base compiler flags shared by all kernels
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub compile_options: String,

    /// Use packed kernel names (also NAIVECONV_DEBUG_USE_PACKED_KERNELS in debug builds)
    #[arg(long)]
    pub packed: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable summary (default)
    Text,
    /// JSON document
    Json,
}

impl ProblemArgs {
    /// Build the problem description from the parsed flags.
    pub fn to_problem(&self) -> Result<ProblemDescription, CliError> {
        let spatial_dims = SpatialDims::try_from(self.spatial_dims)?;
        let weights_type = self.weights_type.unwrap_or(self.in_type);
        let out_type = self.out_type.unwrap_or(self.in_type);

        let input = self.tensor("input", self.in_type, self.in_cast, &self.in_lengths, spatial_dims)?;
        let weights = self.tensor("weights", weights_type, self.weights_cast, &self.weights_lengths, spatial_dims)?;
        let output = self.tensor("output", out_type, self.out_cast, &self.out_lengths, spatial_dims)?;

        Ok(ProblemDescription::new(self.direction, self.layout, spatial_dims, input, weights, output))
    }

    fn tensor(
        &self,
        name: &'static str,
        data_type: DataType,
        cast_type: Option<DataType>,
        lengths: &[usize],
        spatial_dims: SpatialDims,
    ) -> Result<TensorDescriptor, CliError> {
        let mut desc = if lengths.is_empty() {
            TensorDescriptor::new(data_type)
        } else {
            let expected = spatial_dims.count() + 2;
            if lengths.len() != expected {
                return Err(CliError::LengthsMismatch {
                    tensor: name,
                    expected,
                    actual: lengths.len(),
                });
            }
            TensorDescriptor::packed(data_type, self.layout, lengths.to_vec())?
        };
        desc.cast_type = cast_type;
        Ok(desc)
    }

    /// True when lengths were supplied for every tensor.
    pub fn has_geometry(&self) -> bool {
        !self.in_lengths.is_empty() && !self.weights_lengths.is_empty() && !self.out_lengths.is_empty()
    }
}

impl ContextArgs {
    /// Build the execution context from the parsed flags.
    pub fn to_context(&self) -> Result<ExecutionContext, CliError> {
        let code_object = CodeObjectVersion::try_from(self.code_object).map_err(CliError::CodeObjectVersion)?;
        let naming = if self.packed { KernelNaming::Packed } else { naming_from_env() };

        Ok(ExecutionContext::new(self.device.clone())
            .with_asm_kernels(!self.no_asm)
            .with_hip_kernels(!self.no_hip)
            .with_compile_options(self.compile_options.clone())
            .with_code_object(code_object)
            .with_naming(naming))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("naiveconv").chain(args.iter().copied())).expect("arguments parse")
    }

    #[test]
    fn defaults_describe_fp32_forward_nchw() {
        let config = parse(&[]);
        let problem = config.problem.to_problem().expect("problem");
        assert_eq!(problem.direction, Direction::Forward);
        assert_eq!(problem.layout, Layout::Nchw);
        assert_eq!(problem.spatial_dims, SpatialDims::Two);
        assert_eq!(
            [problem.in_type(), problem.weights_type(), problem.out_type()],
            [DataType::Float; 3]
        );
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn role_types_default_to_input_type() {
        let config = parse(&["--in-type", "int8", "--out-type", "int32", "-F", "wrw", "-I", "NDHWC", "--spatial-dims", "3"]);
        let problem = config.problem.to_problem().expect("problem");
        assert_eq!(problem.weights_type(), DataType::Int8);
        assert_eq!(problem.out_type(), DataType::Int32);
        assert_eq!(problem.direction, Direction::BackwardWeights);
        assert_eq!(problem.layout, Layout::Nhwc);
    }

    #[test]
    fn invalid_layout_is_rejected_by_the_parser() {
        let result = CliConfig::try_parse_from(["naiveconv", "--layout", "CHWN"]);
        assert!(result.is_err());
    }

    #[test]
    fn unsupported_spatial_dims_fail_problem_construction() {
        let config = parse(&["--spatial-dims", "1"]);
        assert!(matches!(config.problem.to_problem(), Err(CliError::Resolve(_))));
    }

    #[test]
    fn lengths_must_match_dimensionality() {
        let config = parse(&["--in-lengths", "1,8,4"]);
        match config.problem.to_problem() {
            Err(CliError::LengthsMismatch { tensor, expected, actual }) => {
                assert_eq!(tensor, "input");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected lengths mismatch, got {other:?}"),
        }
    }

    #[test]
    fn casts_and_lengths_reach_the_descriptors() {
        let config = parse(&["-I", "NHWC", "--in-type", "fp16", "--in-cast", "fp8", "--in-lengths", "1,8,2,2"]);
        let problem = config.problem.to_problem().expect("problem");
        assert_eq!(problem.input.cast_type, Some(DataType::Fp8));
        assert_eq!(problem.input.strides, vec![32, 1, 16, 8]);
        assert!(problem.uses_fp8_or_cast());
    }

    #[test]
    fn oversized_lengths_are_an_error_not_a_panic() {
        let config = parse(&["--in-lengths", "4294967296,4294967296,4294967296,4294967296"]);
        assert!(matches!(
            config.problem.to_problem(),
            Err(CliError::Resolve(ResolveError::StrideOverflow(_)))
        ));
    }

    #[test]
    fn context_flags_map_onto_execution_context() {
        let config = parse(&["--device", "gfx906", "--no-asm", "--code-object", "4", "--compile-options", "-O3 -g", "--packed"]);
        let ctx = config.context.to_context().expect("context");
        assert_eq!(ctx.device_name, "gfx906");
        assert!(!ctx.use_asm_kernels);
        assert!(ctx.use_hip_kernels);
        assert_eq!(ctx.code_object, CodeObjectVersion::V4);
        assert_eq!(ctx.general_compile_options, "-O3 -g");
        assert_eq!(ctx.naming, KernelNaming::Packed);
    }

    #[test]
    fn out_of_range_code_object_is_reported() {
        let config = parse(&["--code-object", "7"]);
        assert!(matches!(config.context.to_context(), Err(CliError::CodeObjectVersion(7))));
    }
}
