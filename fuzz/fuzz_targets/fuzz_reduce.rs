#![no_main]

use casteljau_pulse_engine::{reduce, Point};
use libfuzzer_sys::fuzz_target;

// Beliebige Bitmuster (inkl. NaN/Inf) dürfen nie zu einem Panic führen.
fuzz_target!(|data: &[u8]| {
    let floats: Vec<f32> = data
        .chunks_exact(4)
        .take(2 * 64 + 1)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    let Some((&t, coords)) = floats.split_first() else {
        return;
    };
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect();

    let result = reduce(&points, t);

    let n = points.len();
    assert_eq!(result.rounds, n);
    assert_eq!(result.all_points.len(), n * (n + 1) / 2);
    assert_eq!(result.all_segments.len(), n.saturating_sub(1) * n / 2);
});
