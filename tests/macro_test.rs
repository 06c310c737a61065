use rowbind::{
    Bindings, DecodeResult, MemoryCursor, Record, Value, bind_record, decode_rows, decode_with,
    row,
};

#[derive(Debug, Default, PartialEq)]
struct Person {
    name: String,
    age: i64,
    greeting: Option<String>,
}

bind_record! {
    Person {
        name => "name",
        age => "age",
        greeting => _,
    }
}

#[test]
fn test_macro_declared_record_decodes() -> DecodeResult<()> {
    let mut cursor = MemoryCursor::new(
        ["name", "age"],
        vec![row!["Bob", 40], row!["Jane", 35], row!["Ann", 28]],
    );

    let people: Vec<Person> = decode_rows(&mut cursor)?;
    assert_eq!(people.len(), 3);
    assert_eq!(people[2].name, "Ann");
    // Fields mapped to `_` stay out of resolution entirely.
    assert!(people.iter().all(|p| p.greeting.is_none()));
    Ok(())
}

#[test]
fn test_shape_reports_macro_bindings() {
    let shape = Person::shape();
    assert_eq!(shape.bound_count(), 2);

    let fields: Vec<_> = shape
        .fields()
        .iter()
        .map(|f| (f.name(), f.column()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("name", Some("name")),
            ("age", Some("age")),
            ("greeting", None),
        ]
    );
}

#[test]
fn test_resolved_bindings_serve_repeated_queries() -> DecodeResult<()> {
    let shape = Person::shape();
    let columns: Vec<String> = ["age", "name"].map(String::from).to_vec();
    let bindings = Bindings::resolve(&shape, &columns)?;

    for round in 0..3 {
        let mut cursor = MemoryCursor::new(
            ["age", "name"],
            vec![row![40 + round, "Bob"], row![35, "Jane"]],
        );
        let people: Vec<Person> = decode_with(&mut cursor, &shape, &bindings)?;
        assert_eq!(people[0].age, 40 + i64::from(round));
        assert_eq!(people[1].name, "Jane");
    }
    Ok(())
}

#[test]
fn test_row_macro_accepts_mixed_literals() {
    let cells = row![1, "x", 2.5, true, None::<i64>, Value::Null];
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[0], Value::Int(1));
    assert_eq!(cells[4], Value::Null);
    assert_eq!(cells[5], Value::Null);
}
