//! Criterion benchmarks for the Corvina marshalling layer.
//!
//! Covers the hot paths a backend adapter exercises:
//! - single-document serialization
//! - parallel batch serialization
//! - wire-document deserialization

use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use corvina::marshal::{deserialize, serialize, serialize_batch};
use corvina::schema::field::FieldDescriptor;
use corvina::schema::schema::DocumentFactory;
use corvina::value::field_value::{FieldValue, ValueKind};
use corvina::value::geo::GeoPoint;

fn bench_factory() -> DocumentFactory {
    DocumentFactory::builder("asset")
        .add_field(FieldDescriptor::new("title", ValueKind::Text))
        .unwrap()
        .add_field(FieldDescriptor::new("views", ValueKind::Long))
        .unwrap()
        .add_field(FieldDescriptor::new("price", ValueKind::Double))
        .unwrap()
        .add_field(FieldDescriptor::new("created", ValueKind::DateTime))
        .unwrap()
        .add_field(FieldDescriptor::new("location", ValueKind::Geo))
        .unwrap()
        .add_field(FieldDescriptor::new("tags", ValueKind::Text).multi_value(true))
        .unwrap()
        .build()
}

fn generate_documents(factory: &DocumentFactory, count: usize) -> Vec<corvina::document::Document> {
    let title = factory.get_field("title").unwrap().clone();
    let views = factory.get_field("views").unwrap().clone();
    let price = factory.get_field("price").unwrap().clone();
    let created = factory.get_field("created").unwrap().clone();
    let location = factory.get_field("location").unwrap().clone();
    let tags = factory.get_field("tags").unwrap().clone();

    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            let mut doc = factory.create_doc(format!("asset-{i}"));
            doc.set_value(&title, FieldValue::Text(format!("Asset number {i}")))
                .unwrap();
            doc.set_value(&views, FieldValue::Long(i as i64 * 31))
                .unwrap();
            doc.set_value(&price, FieldValue::Double(i as f64 * 0.25))
                .unwrap();
            doc.set_value(&created, FieldValue::DateTime(instant))
                .unwrap();
            doc.set_value(
                &location,
                FieldValue::Geo(GeoPoint::new(52.52, 13.405).unwrap()),
            )
            .unwrap();
            doc.set_values(
                &tags,
                vec![
                    FieldValue::Text("benchmark".to_string()),
                    FieldValue::Text(format!("batch-{}", i % 10)),
                ],
            )
            .unwrap();
            doc
        })
        .collect()
}

fn bench_serialize(c: &mut Criterion) {
    let factory = bench_factory();
    let docs = generate_documents(&factory, 1);

    c.bench_function("serialize_single", |b| {
        b.iter(|| serialize(black_box(&docs[0])).unwrap())
    });
}

fn bench_serialize_batch(c: &mut Criterion) {
    let factory = bench_factory();
    let docs = generate_documents(&factory, 1000);

    let mut group = c.benchmark_group("serialize_batch");
    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("1000_docs", |b| {
        b.iter(|| serialize_batch(black_box(&docs)).unwrap())
    });
    group.finish();
}

fn bench_deserialize(c: &mut Criterion) {
    let factory = bench_factory();
    let docs = generate_documents(&factory, 1);
    let wire = serialize(&docs[0]).unwrap();

    c.bench_function("deserialize_single", |b| {
        b.iter(|| deserialize(black_box(&wire), &factory, None).unwrap())
    });
}

criterion_group!(benches, bench_serialize, bench_serialize_batch, bench_deserialize);
criterion_main!(benches);
