use naiveconv_env::USE_PACKED_KERNELS;

use crate::types::KernelNaming;

/// Naming mode requested through `NAIVECONV_DEBUG_USE_PACKED_KERNELS`.
///
/// The packed reference kernels are only built into debug builds, so
/// release builds always return [`KernelNaming::NonPacked`].
pub fn naming_from_env() -> KernelNaming {
    if cfg!(debug_assertions) && USE_PACKED_KERNELS.get_or(false) {
        KernelNaming::Packed
    } else {
        KernelNaming::NonPacked
    }
}
