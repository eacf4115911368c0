use bezier_crossings::Point;
use once_cell::sync::Lazy;

/// Points generated randomly inside the editor's model space
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Point::new({(random()-0.5)*4:.5f}, {(random()-0.5)*4:.5f})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.00000,  0.00000),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-1.51139, -0.79100),
    (-1.10479, -0.59318),
    (-1.16022, -1.95591),
    (-1.07946,  0.78888),
];

/// Cubic curves, each given by indices into [`POINTS`]
static INDICES: [[usize; 4]; 10] = [
    [0, 1, 2, 3],
    [2, 3, 4, 5],
    [4, 5, 6, 7],
    [6, 7, 8, 9],
    [8, 9, 0, 1],
    [0, 4, 2, 6],
    [1, 5, 3, 7],
    [2, 6, 4, 8],
    [3, 7, 5, 9],
    [4, 8, 6, 0],
];

pub static CUBIC: Lazy<Vec<[Point; 4]>> = Lazy::new(|| {
    INDICES
        .iter()
        .map(|&indices| {
            indices.map(|i| {
                let (x, y) = POINTS[i];
                Point::new(x, y)
            })
        })
        .collect()
});
