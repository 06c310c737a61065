use rowbind::utils::testing_utils::FailingCursor;
use rowbind::{
    DecodeError, DecodeResult, MemoryCursor, Value, bind_record, decode_rows, row,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Employee {
    id: i64,
    name: String,
    age: i64,
}

bind_record! {
    Employee {
        id => "id",
        name => "name",
        age => "age",
    }
}

fn employee_rows() -> Vec<Vec<Value>> {
    vec![row![1, "Bob", 40], row![2, "Jane", 35]]
}

#[test]
fn test_decode_into_records() -> DecodeResult<()> {
    let mut cursor = MemoryCursor::new(["id", "name", "age"], employee_rows());
    let employees: Vec<Employee> = decode_rows(&mut cursor)?;
    assert_eq!(
        employees,
        vec![
            Employee { id: 1, name: "Bob".to_string(), age: 40 },
            Employee { id: 2, name: "Jane".to_string(), age: 35 },
        ]
    );
    Ok(())
}

#[test]
fn test_projection_order_is_irrelevant() -> DecodeResult<()> {
    // The same data projected in a different column order decodes to the
    // same records, because binding goes by name.
    let mut forward = MemoryCursor::new(["id", "name", "age"], employee_rows());
    let mut shuffled = MemoryCursor::new(
        ["age", "id", "name"],
        vec![row![40, 1, "Bob"], row![35, 2, "Jane"]],
    );

    let a: Vec<Employee> = decode_rows(&mut forward)?;
    let b: Vec<Employee> = decode_rows(&mut shuffled)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_empty_result_decodes_to_empty_vec() -> DecodeResult<()> {
    let mut cursor = MemoryCursor::new(["id", "name", "age"], vec![]);
    let employees: Vec<Employee> = decode_rows(&mut cursor)?;
    assert!(employees.is_empty());
    Ok(())
}

#[test]
fn test_duplicate_result_column_is_rejected() {
    let mut cursor = MemoryCursor::new(
        ["id", "name", "name"],
        vec![row![1, "Bob", "Bobby"]],
    );
    let err = decode_rows::<Employee, _>(&mut cursor);
    assert!(matches!(
        err,
        Err(DecodeError::AmbiguousColumn { column }) if column == "name"
    ));
}

#[test]
fn test_unclaimed_column_is_rejected() {
    let mut cursor = MemoryCursor::new(
        ["id", "name", "age", "salary"],
        vec![row![1, "Bob", 40, 50_000.0]],
    );
    let err = decode_rows::<Employee, _>(&mut cursor);
    assert!(matches!(
        err,
        Err(DecodeError::UnclaimedColumn { column }) if column == "salary"
    ));
}

#[test]
fn test_narrow_shape_fails_closed() {
    // Two bound fields cannot account for a three-column projection.
    #[derive(Debug, Default)]
    struct Pair {
        id: i64,
        name: String,
    }

    bind_record! {
        Pair {
            id => "id",
            name => "name",
        }
    }

    let mut cursor = MemoryCursor::new(["id", "name", "age"], vec![row![1, "Bob", 40]]);
    let err = decode_rows::<Pair, _>(&mut cursor);
    assert!(matches!(
        err,
        Err(DecodeError::UnclaimedColumn { column }) if column == "age"
    ));
}

#[test]
fn test_missing_column_is_rejected() {
    let mut cursor = MemoryCursor::new(["id", "name"], vec![row![1, "Bob"]]);
    let err = decode_rows::<Employee, _>(&mut cursor);
    assert!(matches!(
        err,
        Err(DecodeError::MissingColumn { field: "age", column: "age" })
    ));
}

#[test]
fn test_cursor_failure_discards_decoded_rows() {
    // Two rows decode cleanly before the third scan fails; the whole call
    // still comes back as an error with no partial output.
    let rows = vec![row![1, "Bob", 40], row![2, "Jane", 35], row![3, "Ann", 28]];
    let inner = MemoryCursor::new(["id", "name", "age"], rows);
    let mut cursor = FailingCursor::new(inner, 2);

    let err = decode_rows::<Employee, _>(&mut cursor);
    assert!(matches!(err, Err(DecodeError::Cursor(_))));
}

#[test]
fn test_conversion_failure_discards_decoded_rows() {
    let rows = vec![row![1, "Bob", 40], row![2, "Jane", "not a number"]];
    let mut cursor = MemoryCursor::new(["id", "name", "age"], rows);

    let err = decode_rows::<Employee, _>(&mut cursor);
    match err {
        Err(DecodeError::Bind { row, column, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "age");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_wide_records_with_nullable_fields() -> DecodeResult<()> {
    #[derive(Debug, Default, PartialEq)]
    struct Account {
        id: i64,
        email: Option<String>,
        balance: f64,
        active: bool,
        avatar: Vec<u8>,
    }

    bind_record! {
        Account {
            id => "id",
            email => "email",
            balance => "balance",
            active => "active",
            avatar => "avatar",
        }
    }

    let mut cursor = MemoryCursor::new(
        ["id", "email", "balance", "active", "avatar"],
        vec![
            row![1, "bob@example.com", 12.5, true, vec![0xDEu8, 0xAD]],
            row![2, None::<String>, -3.25, false, Vec::<u8>::new()],
        ],
    );

    let accounts: Vec<Account> = decode_rows(&mut cursor)?;
    assert_eq!(accounts[0].email.as_deref(), Some("bob@example.com"));
    assert_eq!(accounts[1].email, None);
    assert_eq!(accounts[1].balance, -3.25);
    assert!(!accounts[1].active);
    assert_eq!(accounts[0].avatar, vec![0xDE, 0xAD]);
    Ok(())
}

#[test]
fn test_randomized_round_trip() -> DecodeResult<()> {
    use rand::Rng;

    let mut rng = rand::rng();
    let expected: Vec<Employee> = (0..200)
        .map(|_| {
            let name: String = (0..rng.random_range(1..16))
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect();
            Employee {
                id: rng.random::<i32>() as i64,
                name,
                age: rng.random_range(0..120),
            }
        })
        .collect();

    let rows = expected
        .iter()
        .map(|e| row![e.id, e.name.clone(), e.age])
        .collect();
    let mut cursor = MemoryCursor::new(["id", "name", "age"], rows);

    let decoded: Vec<Employee> = decode_rows(&mut cursor)?;
    assert_eq!(decoded, expected);
    Ok(())
}
