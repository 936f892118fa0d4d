use crate::types::TensorDescriptor;

/// Log the stride vectors of the three convolution tensors.
///
/// Write-only diagnostic for tensor-addressing mismatches; resolution does
/// not depend on it.
pub fn log_tensor_strides(input: &TensorDescriptor, weights: &TensorDescriptor, output: &TensorDescriptor) {
    for (name, desc) in [("in", input), ("weights", weights), ("out", output)] {
        tracing::info!(target: "naiveconv::strides", tensor = name, strides = ?desc.strides, "tensor strides");
    }
}
