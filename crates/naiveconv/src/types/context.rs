use serde::{Deserialize, Serialize};

/// Code-object (kernel metadata) version targeted by the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeObjectVersion {
    V2,
    V3,
    V4,
    V5,
}

impl CodeObjectVersion {
    pub const fn is_v3(self) -> bool {
        matches!(self, CodeObjectVersion::V3)
    }
}

impl TryFrom<u32> for CodeObjectVersion {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(CodeObjectVersion::V2),
            3 => Ok(CodeObjectVersion::V3),
            4 => Ok(CodeObjectVersion::V4),
            5 => Ok(CodeObjectVersion::V5),
            other => Err(other),
        }
    }
}

/// Packed vs nonpacked naive kernel naming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelNaming {
    #[default]
    NonPacked,
    /// Debug-only reference kernels that assume packed tensors.
    Packed,
}

impl KernelNaming {
    pub const fn prefix(self) -> &'static str {
        match self {
            KernelNaming::NonPacked => "naive_conv_nonpacked_",
            KernelNaming::Packed => "naive_conv_packed_",
        }
    }
}

/// Device and backend state that resolution is evaluated against.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub device_name: String,
    /// Assembly-kernel backend enabled.
    pub use_asm_kernels: bool,
    /// Generic device-code backend enabled.
    pub use_hip_kernels: bool,
    /// Compiler flags shared by every kernel built for this context.
    pub general_compile_options: String,
    pub code_object: CodeObjectVersion,
    pub naming: KernelNaming,
}

impl ExecutionContext {
    /// Both backends enabled, code object V3, no base flags, nonpacked names.
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
            use_asm_kernels: true,
            use_hip_kernels: true,
            general_compile_options: String::new(),
            code_object: CodeObjectVersion::V3,
            naming: KernelNaming::NonPacked,
        }
    }

    /// Like [`ExecutionContext::new`], with the naming mode taken from the environment.
    pub fn from_env(device_name: impl Into<String>) -> Self {
        Self::new(device_name).with_naming(crate::prefs::naming_from_env())
    }

    #[must_use]
    pub fn with_asm_kernels(mut self, enabled: bool) -> Self {
        self.use_asm_kernels = enabled;
        self
    }

    #[must_use]
    pub fn with_hip_kernels(mut self, enabled: bool) -> Self {
        self.use_hip_kernels = enabled;
        self
    }

    #[must_use]
    pub fn with_compile_options(mut self, options: impl Into<String>) -> Self {
        self.general_compile_options = options.into();
        self
    }

    #[must_use]
    pub fn with_code_object(mut self, code_object: CodeObjectVersion) -> Self {
        self.code_object = code_object;
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: KernelNaming) -> Self {
        self.naming = naming;
        self
    }
}
