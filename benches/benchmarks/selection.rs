use crate::util::{product_rows, write_fixture};
use crate::SCENARIOS;
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use record_ingest::datasource::DataSource;
use record_ingest::selector::ProcessorSelector;
use std::io::Write;

fn bench_selection(c: &mut Criterion) {
    let selector = ProcessorSelector::new();
    let mut group = c.benchmark_group("ProcessorSelector::select");
    for (name, num_elements) in SCENARIOS {
        group.throughput(criterion::Throughput::Elements(num_elements));
        for (label, delimiter) in [("default", ";"), ("fallback", ",")] {
            let file = write_fixture!(name, ".csv", product_rows!(num_elements, delimiter));
            let datasource = DataSource::new(file.path());
            group.bench_with_input(
                BenchmarkId::new(label, num_elements), &datasource,
                |b, datasource| b.iter(|| {
                    selector
                        .select(black_box(datasource))
                        .expect("Benchmark: unable to select processor")
                }),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
