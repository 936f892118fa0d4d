use super::*;
use crate::types::{CodeObjectVersion, DataType, Direction, Layout, SpatialDims, TensorDescriptor};

fn problem(data_type: DataType) -> ProblemDescription {
    ProblemDescription::from_types(Direction::Forward, Layout::Nchw, SpatialDims::Two, data_type, data_type, data_type)
}

fn ctx(device: &str, asm: bool, hip: bool) -> ExecutionContext {
    ExecutionContext::new(device).with_asm_kernels(asm).with_hip_kernels(hip)
}

#[test]
fn fp16_on_allow_listed_device_needs_assembly_backend() {
    let p = problem(DataType::Half);
    for device in ASSEMBLY_DEVICES {
        assert_eq!(kernel_family(&ctx(device, true, true), &p), KernelFamily::Assembly);
        assert!(is_applicable(&ctx(device, true, false), &p));
        assert!(!is_applicable(&ctx(device, false, true), &p));
    }
}

#[test]
fn int8_never_selects_assembly() {
    let p = problem(DataType::Int8);
    assert_eq!(kernel_family(&ctx("gfx908", true, true), &p), KernelFamily::Generic);
    assert!(is_applicable(&ctx("gfx908", false, true), &p));
    assert!(!is_applicable(&ctx("gfx908", true, false), &p));
}

#[test]
fn fp8_never_selects_assembly() {
    let p = ProblemDescription::from_types(Direction::Forward, Layout::Nchw, SpatialDims::Two, DataType::Fp8, DataType::Fp8, DataType::Float);
    assert_eq!(kernel_family(&ctx("gfx906", true, true), &p), KernelFamily::Generic);

    let mut casted = problem(DataType::Half);
    casted.output = TensorDescriptor::new(DataType::Half).with_cast(DataType::Fp8);
    assert_eq!(kernel_family(&ctx("gfx906", true, true), &casted), KernelFamily::Generic);
}

#[test]
fn assembly_requires_v3_default_layout_and_known_device() {
    let p = problem(DataType::Float);
    let v4 = ctx("gfx906", true, true).with_code_object(CodeObjectVersion::V4);
    assert_eq!(kernel_family(&v4, &p), KernelFamily::Generic);

    let nhwc = p.clone().with_layout(Layout::Nhwc);
    assert_eq!(kernel_family(&ctx("gfx906", true, true), &nhwc), KernelFamily::Generic);

    assert_eq!(kernel_family(&ctx("gfx90a", true, true), &p), KernelFamily::Generic);
    assert!(!is_applicable(&ctx("gfx90a", true, false), &p));
}

#[test]
fn mixed_precision_uses_input_category() {
    let p = ProblemDescription::from_types(Direction::Forward, Layout::Nchw, SpatialDims::Two, DataType::BFloat16, DataType::BFloat16, DataType::Float);
    assert_eq!(kernel_family(&ctx("gfx908", true, true), &p), KernelFamily::Assembly);
}

#[test]
fn unclassifiable_problem_is_gated_on_generic_backend() {
    let p = ProblemDescription::from_types(Direction::Forward, Layout::Nchw, SpatialDims::Two, DataType::Float, DataType::Half, DataType::BFloat16);
    assert_eq!(kernel_family(&ctx("gfx906", true, true), &p), KernelFamily::Generic);
    assert!(!is_applicable(&ctx("gfx906", true, false), &p));
}
