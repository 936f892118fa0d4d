use std::{sync::Arc, thread};

use super::*;
use crate::{
    gate::is_applicable, kernel_file::compile_options, naming::build_kernel_name, types::{DataType, Direction, KernelNaming, Layout, SpatialDims, TensorDescriptor}
};

fn fp32_problem() -> ProblemDescription {
    ProblemDescription::from_types(Direction::Forward, Layout::Nchw, SpatialDims::Two, DataType::Float, DataType::Float, DataType::Float)
}

#[test]
fn resolution_agrees_with_individual_operations() {
    let ctx = ExecutionContext::new("gfx908").with_compile_options("-O3");
    let problems = [
        fp32_problem(),
        ProblemDescription::from_types(Direction::BackwardWeights, Layout::Nhwc, SpatialDims::Three, DataType::Int8, DataType::Int8, DataType::Int32),
        ProblemDescription::from_types(Direction::BackwardData, Layout::Nchw, SpatialDims::Two, DataType::Fp8, DataType::Fp8, DataType::Half),
    ];

    for problem in &problems {
        let resolution = resolve(&ctx, problem).expect("resolves");
        assert_eq!(resolution.identity.kernel_name, build_kernel_name(problem, KernelNaming::NonPacked).expect("name"));
        assert_eq!(resolution.identity.kernel_file, kernel_file(&ctx, problem).file_name());
        assert_eq!(resolution.identity.compile_options, compile_options(&ctx, problem));
        assert_eq!(resolution.applicable, is_applicable(&ctx, problem));
    }
}

#[test]
fn assembly_family_on_allow_listed_device() {
    let resolution = resolve(&ExecutionContext::new("gfx906").with_asm_kernels(false), &fp32_problem()).expect("resolves");
    assert_eq!(resolution.family, KernelFamily::Assembly);
    assert!(!resolution.applicable);
    // The assembly file stays disabled even when the assembly family is chosen.
    assert_eq!(resolution.identity.kernel_file, "naive_conv.cpp");
}

#[test]
fn failed_classification_yields_no_partial_result() {
    let problem = ProblemDescription::from_types(Direction::Forward, Layout::Nchw, SpatialDims::Two, DataType::Float, DataType::Half, DataType::Int8);
    assert!(matches!(
        resolve(&ExecutionContext::new("gfx90a"), &problem),
        Err(ResolveError::UnsupportedDataType(_))
    ));
}

#[test]
fn context_naming_mode_is_honoured() {
    let ctx = ExecutionContext::new("gfx90a").with_naming(KernelNaming::Packed);
    let resolution = resolve(&ctx, &fp32_problem()).expect("resolves");
    assert_eq!(resolution.identity.kernel_name, "naive_conv_packed_fwd_nchw_float_double_float");
}

#[test]
fn concurrent_resolutions_are_identical() {
    let ctx = Arc::new(ExecutionContext::new("gfx908").with_compile_options("-O3"));
    let mut problem = fp32_problem();
    problem.input = TensorDescriptor::new(DataType::Half).with_cast(DataType::Fp8);
    let problem = Arc::new(problem);
    let expected = resolve(&ctx, &problem).expect("resolves");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            let problem = Arc::clone(&problem);
            thread::spawn(move || resolve(&ctx, &problem))
        })
        .collect();

    for handle in handles {
        let resolution = handle.join().expect("thread joins").expect("resolves");
        assert_eq!(resolution, expected);
    }
}
