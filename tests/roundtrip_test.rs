//! Integration tests for serialize/deserialize round-tripping.

use chrono::{TimeZone, Utc};
use corvina::prelude::*;

fn asset_factory() -> DocumentFactory {
    DocumentFactory::builder("asset")
        .add_field(FieldDescriptor::new("title", ValueKind::Text))
        .unwrap()
        .add_field(FieldDescriptor::new("views", ValueKind::Long))
        .unwrap()
        .add_field(FieldDescriptor::new("rank", ValueKind::Integer))
        .unwrap()
        .add_field(FieldDescriptor::new("price", ValueKind::Double))
        .unwrap()
        .add_field(FieldDescriptor::new("weight", ValueKind::Float))
        .unwrap()
        .add_field(FieldDescriptor::new("active", ValueKind::Boolean))
        .unwrap()
        .add_field(FieldDescriptor::new("created", ValueKind::DateTime))
        .unwrap()
        .add_field(FieldDescriptor::new("location", ValueKind::Geo))
        .unwrap()
        .add_field(FieldDescriptor::new("payload", ValueKind::Binary))
        .unwrap()
        .add_field(FieldDescriptor::new("tags", ValueKind::Text).multi_value(true))
        .unwrap()
        .build()
}

#[test]
fn test_roundtrip_all_kinds() -> Result<()> {
    let factory = asset_factory();
    let mut doc = factory.create_doc("a-1");

    let created = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    doc.set_value(
        &factory.get_field("title").unwrap().clone(),
        FieldValue::Text("Hello World".to_string()),
    )?;
    doc.set_value(
        &factory.get_field("views").unwrap().clone(),
        FieldValue::Long(123_456_789_000),
    )?;
    doc.set_value(
        &factory.get_field("rank").unwrap().clone(),
        FieldValue::Integer(-7),
    )?;
    doc.set_value(
        &factory.get_field("price").unwrap().clone(),
        FieldValue::Double(9.99),
    )?;
    // Exactly representable in f32 so the f32 -> f64 -> f32 trip is lossless.
    doc.set_value(
        &factory.get_field("weight").unwrap().clone(),
        FieldValue::Float(39.5),
    )?;
    doc.set_value(
        &factory.get_field("active").unwrap().clone(),
        FieldValue::Boolean(true),
    )?;
    doc.set_value(
        &factory.get_field("created").unwrap().clone(),
        FieldValue::DateTime(created),
    )?;
    doc.set_value(
        &factory.get_field("location").unwrap().clone(),
        FieldValue::Geo(GeoPoint::new(52.52, 13.405)?),
    )?;
    doc.set_value(
        &factory.get_field("payload").unwrap().clone(),
        FieldValue::Binary(vec![0x00, 0x01, 0x02]),
    )?;
    doc.set_values(
        &factory.get_field("tags").unwrap().clone(),
        vec![
            FieldValue::Text("zebra".to_string()),
            FieldValue::Text("alpha".to_string()),
            FieldValue::Text("mid".to_string()),
        ],
    )?;

    let wire = serialize(&doc)?;
    let restored = deserialize(&wire, &factory, None)?;

    assert_eq!(restored.id(), doc.id());
    assert_eq!(restored.doc_type(), doc.doc_type());
    for name in factory.field_names() {
        assert_eq!(
            restored.get_contextualized_slot(name, None),
            doc.get_contextualized_slot(name, None),
            "field '{name}' did not round-trip"
        );
    }

    // Multi-value element order is preserved.
    assert_eq!(
        restored.get_values("tags").unwrap(),
        &[
            FieldValue::Text("zebra".to_string()),
            FieldValue::Text("alpha".to_string()),
            FieldValue::Text("mid".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_roundtrip_datetime_is_timezone_independent() -> Result<()> {
    let factory = asset_factory();
    let created = factory.get_field("created").unwrap().clone();
    let instant = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    let mut doc = factory.create_doc("a-1");
    doc.set_value(&created, FieldValue::DateTime(instant))?;

    let wire = serialize(&doc)?;
    assert_eq!(
        wire.get("created"),
        Some(&WireValue::Text("2020-01-01T00:00:00Z".to_string()))
    );

    let restored = deserialize(&wire, &factory, None)?;
    assert_eq!(
        restored.get_value("created"),
        Some(&FieldValue::DateTime(instant))
    );
    Ok(())
}

#[test]
fn test_roundtrip_geo_and_malformed_geo() -> Result<()> {
    let factory = asset_factory();
    let location = factory.get_field("location").unwrap().clone();

    let mut doc = factory.create_doc("a-1");
    doc.set_value(&location, FieldValue::Geo(GeoPoint::new(52.52, 13.405)?))?;

    let wire = serialize(&doc)?;
    assert_eq!(
        wire.get("location"),
        Some(&WireValue::Text("52.52,13.405".to_string()))
    );

    let restored = deserialize(&wire, &factory, None)?;
    assert_eq!(
        restored.get_value("location").unwrap().as_geo(),
        Some(&GeoPoint::new(52.52, 13.405)?)
    );

    // A malformed geo value is data corruption: fatal, never a default point.
    let mut broken = WireDocument::new();
    broken.insert("_id_", WireValue::from("a-2"));
    broken.insert("_type_", WireValue::from("asset"));
    broken.insert("location", WireValue::from("not-a-point"));
    let err = deserialize(&broken, &factory, None).unwrap_err();
    assert!(matches!(err, CorvinaError::Coercion { .. }));

    Ok(())
}

#[test]
fn test_unknown_wire_keys_are_dropped() -> Result<()> {
    let factory = asset_factory();
    let mut doc = factory.create_doc("a-1");
    doc.set_value(
        &factory.get_field("title").unwrap().clone(),
        FieldValue::Text("Hello".to_string()),
    )?;

    let mut wire = serialize(&doc)?;
    wire.insert("future_field", WireValue::from("from a newer schema"));

    let restored = deserialize(&wire, &factory, None)?;
    assert_eq!(restored.len(), 1);
    assert!(!restored.has_value("future_field"));
    Ok(())
}

#[test]
fn test_empty_multi_value_is_omitted() -> Result<()> {
    let factory = asset_factory();
    let tags = factory.get_field("tags").unwrap().clone();

    let mut doc = factory.create_doc("a-1");
    doc.set_values(&tags, vec![])?;

    let wire = serialize(&doc)?;
    assert!(!wire.contains_key("tags"));
    assert_eq!(wire.len(), 2); // only the reserved id and type keys
    Ok(())
}

#[test]
fn test_reserved_key_field_names_cannot_enter_a_schema() {
    // A field named "score" would serialize under the reserved score key,
    // get skipped on deserialization and leak its value into the document's
    // search score, breaking the round-trip law without an error. The
    // factory closes that hole at schema-definition time.
    let err = DocumentFactory::builder("asset")
        .add_field(FieldDescriptor::new("score", ValueKind::Long))
        .unwrap_err();
    assert!(matches!(err, CorvinaError::Schema(_)));
}

#[test]
fn test_context_roundtrip() -> Result<()> {
    let factory = DocumentFactory::builder("asset")
        .add_field(FieldDescriptor::new("color", ValueKind::Text))
        .unwrap()
        .build();
    let color = factory.get_field("color").unwrap().clone();

    let mut doc = factory.create_doc("a-1");
    doc.set_value(&color, FieldValue::Text("red".to_string()))?;
    doc.set_contextualized_value(&color, "es", FieldValue::Text("rojo".to_string()))?;

    let wire = serialize(&doc)?;
    assert_eq!(wire.get("color"), Some(&WireValue::from("red")));
    assert_eq!(wire.get("es_color"), Some(&WireValue::from("rojo")));

    // Deserializing with the context restores both the contextualized and
    // the default value.
    let with_context = deserialize(&wire, &factory, Some("es"))?;
    assert_eq!(
        with_context.get_contextualized_value("color", Some("es")),
        Some(&FieldValue::Text("rojo".to_string()))
    );
    assert_eq!(
        with_context.get_contextualized_value("color", None),
        Some(&FieldValue::Text("red".to_string()))
    );

    // Without a context only the default value survives; the prefixed key
    // matches no schema field.
    let without_context = deserialize(&wire, &factory, None)?;
    assert_eq!(
        without_context.get_value("color"),
        Some(&FieldValue::Text("red".to_string()))
    );
    assert_eq!(without_context.field_contexts("color"), vec![None]);

    Ok(())
}

#[test]
fn test_complex_field_uses_stored_kind() -> Result<()> {
    // Complex field: faceted as text, stored as a long.
    let factory = DocumentFactory::builder("asset")
        .add_field(
            FieldDescriptor::new("rating", ValueKind::Text).complex(ValueKind::Text, ValueKind::Long),
        )
        .unwrap()
        .build();
    let rating = factory.get_field("rating").unwrap().clone();

    let mut doc = factory.create_doc("a-1");
    doc.set_value(&rating, FieldValue::Long(5))?;

    let wire = serialize(&doc)?;
    let restored = deserialize(&wire, &factory, None)?;
    assert_eq!(restored.get_value("rating"), Some(&FieldValue::Long(5)));
    Ok(())
}

#[test]
fn test_internal_field_roundtrip() -> Result<()> {
    let factory = DocumentFactory::builder("asset")
        .add_field(FieldDescriptor::new("hits", ValueKind::Long).internal(true))
        .unwrap()
        .build();
    let hits = factory.get_field("hits").unwrap().clone();

    let mut doc = factory.create_doc("a-1");
    doc.set_value(&hits, FieldValue::Long(12))?;

    let wire = serialize(&doc)?;
    assert!(wire.contains_key("_internal_hits"));

    let restored = deserialize(&wire, &factory, None)?;
    assert_eq!(restored.get_value("hits"), Some(&FieldValue::Long(12)));
    Ok(())
}

#[test]
fn test_batch_roundtrip() -> Result<()> {
    let factory = asset_factory();
    let title = factory.get_field("title").unwrap().clone();

    let docs: Vec<Document> = (0..100)
        .map(|i| {
            let mut doc = factory.create_doc(format!("a-{i}"));
            doc.set_value(&title, FieldValue::Text(format!("title {i}")))
                .unwrap();
            doc
        })
        .collect();

    let wires = serialize_batch(&docs)?;
    assert_eq!(wires.len(), docs.len());

    for (wire, doc) in wires.iter().zip(&docs) {
        let restored = deserialize(wire, &factory, None)?;
        assert_eq!(restored.id(), doc.id());
        assert_eq!(restored.get_value("title"), doc.get_value("title"));
    }
    Ok(())
}
