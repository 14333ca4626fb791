use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hsgos::{GosTable, IntegrationOptions, integrate_with};

fn synthetic_table() -> GosTable {
    let (nrow, ncol) = (128, 128);
    let rel_energy_axis = hsgos::axis::parametrized_energy_axis(100.0, 1.0, nrow);
    let qaxis = hsgos::axis::parametrized_qaxis(0.001, 0.1, ncol);
    let gos = (0..nrow * ncol)
        .map(|k| {
            let (row, column) = (k / ncol, k % ncol);
            (1.0 + 0.05 * row as f64) / (1.0 + 0.01 * (column * column) as f64)
        })
        .collect();
    GosTable::new("Fe", "L2,3", 708.0, rel_energy_axis, qaxis, gos).unwrap()
}

fn bench_integrate(c: &mut Criterion) {
    let table = synthetic_table();

    c.bench_function("integrate_fe_l23_parallel", |b| {
        b.iter(|| {
            black_box(
                integrate_with(
                    black_box(&table),
                    &IntegrationOptions::default(),
                    black_box(708.0),
                    black_box(0.02),
                    black_box(200.0),
                )
                .unwrap(),
            );
        });
    });

    let serial = IntegrationOptions {
        parallel: false,
        ..IntegrationOptions::default()
    };
    c.bench_function("integrate_fe_l23_serial", |b| {
        b.iter(|| {
            black_box(
                integrate_with(
                    black_box(&table),
                    &serial,
                    black_box(708.0),
                    black_box(0.02),
                    black_box(200.0),
                )
                .unwrap(),
            );
        });
    });
}

criterion_group!(benches, bench_integrate);
criterion_main!(benches);
