use super::*;
use crate::parallel::Partition;

fn gradient_image(width: usize, height: usize) -> GrayImageU8 {
    GrayImageU8::from_fn(width, height, |x, y| ((x * 37 + y * 11) % 256) as u8)
}

#[test]
fn validate_rejects_kernel_larger_than_image() {
    let img = GrayImageU8::zeros(8, 4);
    let kernel = Kernel::box_filter(5).unwrap();
    let err = validate(&img.as_view(), &kernel).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {err}");
    assert!(validate(&GrayImageU8::zeros(5, 5).as_view(), &kernel).is_ok());
}

#[test]
fn empty_image_is_rejected_by_both_evaluators() {
    let img = GrayImageU8::zeros(0, 0);
    let kernel = Kernel::identity();
    for evaluator in Evaluator::ALL {
        let err = evaluator
            .run(&img.as_view(), &kernel, &ParallelFor::new())
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{}: {err}", evaluator.label());
    }
}

#[test]
fn impulse_response_reproduces_kernel() {
    // A single bright pixel far from the border spreads into a flipped copy of
    // the kernel; for a symmetric kernel that is the kernel itself.
    let mut img = GrayImageU8::zeros(9, 9);
    img.set(4, 4, 200);
    let kernel = Kernel::from_rows(&[[0.0f32, 0.25, 0.0], [0.25, 0.5, 0.25], [0.0, 0.25, 0.0]])
        .unwrap();
    let seq = convolve_sequential(&img.as_view(), &kernel).unwrap();
    let par = convolve_parallel(&img.as_view(), &kernel).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq.get(4, 4), 100);
    assert_eq!(seq.get(3, 4), 50);
    assert_eq!(seq.get(4, 5), 50);
    assert_eq!(seq.get(3, 3), 0);
    assert_eq!(seq.get(0, 0), 0);
}

#[test]
fn asymmetric_kernel_is_correlated_not_flipped() {
    // Weight only on the right neighbour: out(x, y) = src(x + 1, y).
    let img = gradient_image(6, 5);
    let kernel = Kernel::from_rows(&[[0.0f32, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]).unwrap();
    let out = convolve_sequential(&img.as_view(), &kernel).unwrap();
    for y in 0..5 {
        for x in 0..6 {
            let sx = (x + 1).min(5);
            assert_eq!(out.get(x, y), img.get(sx, y), "at ({x}, {y})");
        }
    }
}

#[test]
fn overflowing_sum_wraps_sequentially_and_saturates_in_parallel() {
    let img = GrayImageU8::filled(5, 5, 200);
    let kernel = Kernel::new(3, vec![0.25; 9]).unwrap(); // sums to 2.25 -> 450
    let seq = convolve_sequential(&img.as_view(), &kernel).unwrap();
    let par = convolve_parallel(&img.as_view(), &kernel).unwrap();
    assert!(seq.data().iter().all(|&v| v == (450u32 % 256) as u8));
    assert!(par.data().iter().all(|&v| v == 255));
}

#[test]
fn negative_sum_wraps_sequentially_and_clamps_in_parallel() {
    let img = GrayImageU8::filled(3, 3, 10);
    let kernel = Kernel::new(1, vec![-1.0]).unwrap();
    let seq = convolve_sequential(&img.as_view(), &kernel).unwrap();
    let par = convolve_parallel(&img.as_view(), &kernel).unwrap();
    assert!(seq.data().iter().all(|&v| v == 246));
    assert!(par.data().iter().all(|&v| v == 0));
}

#[test]
fn every_partition_matches_single_chunk() {
    let img = gradient_image(23, 17);
    let kernel = Kernel::box_filter(5).unwrap();
    let single = ParallelFor::new().with_partition(Partition::Single);
    let reference = convolve_parallel_with(&img.as_view(), &kernel, &single).unwrap();
    for partition in [
        Partition::Auto,
        Partition::Stripes(1),
        Partition::Stripes(7),
        Partition::ChunkLen(1),
        Partition::ChunkLen(23),
        Partition::ChunkLen(1000),
    ] {
        let executor = ParallelFor::new().with_partition(partition);
        let out = convolve_parallel_with(&img.as_view(), &kernel, &executor).unwrap();
        assert_eq!(out, reference, "partition {partition:?}");
    }
}

#[test]
fn strided_input_matches_packed_input() {
    let packed = gradient_image(6, 6);
    let mut raw = Vec::new();
    for row in packed.data().chunks(6) {
        raw.extend_from_slice(row);
        raw.extend_from_slice(&[255, 255]);
    }
    let strided = ImageU8::with_stride(6, 6, 8, &raw).unwrap();
    let kernel = Kernel::box_filter(3).unwrap();
    assert_eq!(
        convolve_sequential(&strided, &kernel).unwrap(),
        convolve_sequential(&packed.as_view(), &kernel).unwrap()
    );
    assert_eq!(
        convolve_parallel(&strided, &kernel).unwrap(),
        convolve_parallel(&packed.as_view(), &kernel).unwrap()
    );
}
