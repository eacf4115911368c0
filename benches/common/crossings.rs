use bezier_crossings::{intersect, tessellate, CurveId, Editor, Point};
use criterion::{black_box, Criterion};
use crate::common::samples::CUBIC;

pub fn tessellation(c: &mut Criterion) {
    c.bench_function("tessellate", |b| {
        for curve in CUBIC.iter() {
            b.iter(|| black_box(tessellate(curve)))
        }
    });
}

pub fn intersection(c: &mut Criterion) {
    let polylines: Vec<Vec<Point>> = CUBIC.iter().map(|curve| tessellate(curve)).collect();
    c.bench_function("intersect", |b| {
        for pair in polylines.windows(2) {
            b.iter(|| black_box(intersect(&pair[0], &pair[1])))
        }
    });
}

pub fn drag(c: &mut Criterion) {
    let mut editor = Editor::default();
    for p in CUBIC[0] {
        editor.place_point(p).unwrap();
    }
    editor.switch_active_curve();
    for p in CUBIC[5] {
        editor.place_point(p).unwrap();
    }
    let start = editor.control_points(CurveId::First)[0];
    assert!(editor.begin_drag(start));

    c.bench_function("drag", |b| {
        let mut step = 0u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            let offset = f64::from(step % 100) / 100.0;
            editor.update_drag(start + Point::new(offset, -offset)).unwrap();
            black_box(editor.intersections().len())
        })
    });
}

pub fn all(c: &mut Criterion) {
    tessellation(c);
    intersection(c);
    drag(c);
}
