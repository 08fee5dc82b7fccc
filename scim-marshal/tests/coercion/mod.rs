use scim_marshal::{DecodeErrorKind, Object, Scim, Value, decode, value};
use scim_testhelpers::test;

fn object(v: Value) -> Object {
    match v {
        Value::Object(o) => o,
        other => panic!("expected an object, got {other}"),
    }
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Numbers {
    small: u8,
    unsigned: u32,
    signed: i32,
    wide: i64,
    single: f32,
    double: f64,
}

#[test]
fn same_type_is_assigned_directly() {
    let mut n = Numbers::default();
    decode(
        &object(value!({ "wide": (-7), "double": 1.5 })),
        &mut n,
    )
    .unwrap();
    assert_eq!(n.wide, -7);
    assert_eq!(n.double, 1.5);
}

#[test]
fn numbers_convert_without_range_checks() {
    let mut n = Numbers::default();
    decode(
        &object(value!({
            "small": 300,
            "unsigned": (-1),
            "signed": 1e20,
            "single": 2,
            "double": 9007199254740993u64
        })),
        &mut n,
    )
    .unwrap();
    assert_eq!(n.small, 44);
    assert_eq!(n.unsigned, u32::MAX);
    assert_eq!(n.signed, i32::MAX);
    assert_eq!(n.single, 2.0);
    assert_eq!(n.double, 9007199254740992.0);
}

#[test]
fn floats_truncate_toward_zero() {
    let mut n = Numbers::default();
    decode(
        &object(value!({ "signed": (-2.9), "small": 2.9, "unsigned": (-0.5) })),
        &mut n,
    )
    .unwrap();
    assert_eq!(n.signed, -2);
    assert_eq!(n.small, 2);
    assert_eq!(n.unsigned, 0);
}

#[test]
fn nan_becomes_zero() {
    let mut n = Numbers {
        wide: 5,
        ..Numbers::default()
    };
    decode(&object(value!({ "wide": (f64::NAN) })), &mut n).unwrap();
    assert_eq!(n.wide, 0);
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Typed {
    age: i64,
    name: String,
    active: bool,
}

#[test]
fn string_into_integer_is_a_type_mismatch() {
    let mut typed = Typed::default();
    let err = decode(&object(value!({ "age": "30" })), &mut typed).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::TypeMismatch { got: "String", .. }
    ));
    assert_eq!(typed.age, 0);
}

#[test]
fn every_kind_mismatch_is_reported() {
    let cases = [
        value!({ "name": 1 }),
        value!({ "name": true }),
        value!({ "active": "true" }),
        value!({ "active": 1 }),
        value!({ "age": false }),
        value!({ "age": { "years": 30 } }),
        value!({ "name": ["a"] }),
    ];
    for case in cases {
        let mut typed = Typed::default();
        let err = decode(&object(case.clone()), &mut typed)
            .expect_err(&format!("{case} should not decode"));
        assert!(
            matches!(err.kind, DecodeErrorKind::TypeMismatch { .. }),
            "{case}: {err}"
        );
        assert_eq!(typed, Typed::default());
    }
}

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(transparent)]
struct Email(String);

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(transparent)]
struct Level(u8);

#[derive(Debug, Default, PartialEq, Scim)]
struct Nominal {
    email: Email,
    level: Level,
    backup: Option<Email>,
}

#[test]
fn nominal_scalars_are_converted() {
    let mut nominal = Nominal::default();
    decode(
        &object(value!({ "email": "a@example.com", "level": 257, "backup": "b@example.com" })),
        &mut nominal,
    )
    .unwrap();
    assert_eq!(nominal.email, Email("a@example.com".into()));
    assert_eq!(nominal.level, Level(1));
    assert_eq!(nominal.backup, Some(Email("b@example.com".into())));
}

#[test]
fn nominal_scalars_keep_their_kind() {
    let mut nominal = Nominal::default();
    let err = decode(&object(value!({ "email": 5 })), &mut nominal).unwrap_err();
    assert_eq!(err.to_string(), "at .email: type mismatch: got u64, want Email");
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Boxed {
    name: Box<String>,
    nested: Option<Box<Typed>>,
}

#[test]
fn boxes_are_transparent() {
    let mut boxed = Boxed::default();
    decode(
        &object(value!({ "name": "n", "nested": { "age": 3 } })),
        &mut boxed,
    )
    .unwrap();
    assert_eq!(*boxed.name, "n");
    assert_eq!(boxed.nested.map(|t| t.age), Some(3));
}
