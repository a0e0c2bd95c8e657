use crate::util::product_rows;
use crate::SCENARIOS;
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use record_ingest::processors::csv::reader::CsvReader;
use record_ingest::processors::csv::CsvProcessorResult;
use record_ingest::record::Record;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("CsvReader::iter");
    for (_, num_elements) in SCENARIOS {
        let buffer = product_rows!(num_elements, ";");
        group.throughput(criterion::Throughput::Elements(num_elements));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_elements), &buffer,
            |b, buffer| b.iter(|| {
                let mut reader = CsvReader::try_new(black_box(buffer.as_bytes()), b';')
                    .expect("Benchmark: unable to create csv reader");
                reader.iter().collect::<CsvProcessorResult<Vec<Record>>>()
            }),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parsing);
