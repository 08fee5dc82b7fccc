use std::error::Error as _;

use scim_marshal::{
    Capability, DecodeErrorKind, DecodeIdentifier, DecodeSelf, Def, HookError, Object, Poke,
    Scim, Shape, ShapeFlags, Slot, Value, decode, value,
};
use scim_testhelpers::test;
use uuid::Uuid;

fn object(v: Value) -> Object {
    match v {
        Value::Object(o) => o,
        other => panic!("expected an object, got {other}"),
    }
}

/// Keeps the raw mapping it was decoded from.
#[derive(Debug, Default, PartialEq, Scim)]
#[scim(decode_self)]
struct Raw {
    seen: Option<Object>,
    name: String,
    fail: bool,
}

impl DecodeSelf for Raw {
    fn decode_self(&mut self, source: &Object) -> Result<(), HookError> {
        self.seen = Some(source.clone());
        if self.fail {
            return Err("refused".into());
        }
        Ok(())
    }
}

#[test]
fn self_decode_receives_the_mapping_verbatim() {
    let source = object(value!({ "name": "x", "extra": [1, null], "nested": { "a": true } }));
    let mut raw = Raw::default();
    decode(&source, &mut raw).unwrap();
    assert_eq!(raw.seen.as_ref(), Some(&source));
    assert_eq!(raw.name, "");
}

#[test]
fn self_decode_failure_is_returned_unmodified() {
    let mut raw = Raw {
        fail: true,
        ..Raw::default()
    };
    let err = decode(&object(value!({ "name": "x" })), &mut raw).unwrap_err();
    let DecodeErrorKind::DelegatedFailure {
        shape, capability, ..
    } = &err.kind
    else {
        panic!("expected a delegated failure, got {err}");
    };
    assert_eq!(shape.type_identifier, "Raw");
    assert_eq!(*capability, Capability::DecodeSelf);
    assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("refused"));
    insta::assert_snapshot!(err.to_string(), @"DecodeSelf for Raw failed: refused");
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Envelope {
    title: String,
    raw: Raw,
    raws: Vec<Raw>,
}

#[test]
fn self_decode_applies_where_the_type_is_nested() {
    let mut envelope = Envelope::default();
    decode(
        &object(value!({
            "title": "t",
            "raw": { "k": 1 },
            "raws": [{ "a": 1 }, { "b": 2 }]
        })),
        &mut envelope,
    )
    .unwrap();
    assert_eq!(envelope.title, "t");
    assert_eq!(envelope.raw.seen, Some(object(value!({ "k": 1 }))));
    assert_eq!(envelope.raws.len(), 2);
    assert_eq!(envelope.raws[1].seen, Some(object(value!({ "b": 2 }))));
}

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(rename_all = "camelCase")]
struct Resource {
    id: Uuid,
    external_id: Option<Uuid>,
}

#[test]
fn uuid_fields_decode_from_strings() {
    let mut resource = Resource::default();
    decode(
        &object(value!({
            "id": "2819c223-7f76-453a-919d-413861904646",
            "externalId": "00000000-0000-0000-0000-000000000001"
        })),
        &mut resource,
    )
    .unwrap();
    assert_eq!(
        resource.id.to_string(),
        "2819c223-7f76-453a-919d-413861904646"
    );
    assert_eq!(resource.external_id, Some(Uuid::from_u128(1)));
}

#[test]
fn uuid_parse_errors_are_delegated() {
    let mut resource = Resource::default();
    let err = decode(&object(value!({ "id": "not-a-uuid" })), &mut resource).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::DelegatedFailure {
            capability: Capability::DecodeIdentifier,
            ..
        }
    ));
    assert!(err.source().is_some());
    assert!(resource.id.is_nil());
}

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(transparent)]
struct UserId(Uuid);

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(rename_all = "camelCase")]
struct Membership {
    user_id: UserId,
    group_ids: Vec<UserId>,
}

#[test]
fn transparent_wrappers_keep_the_hooks_of_their_field() {
    let mut membership = Membership::default();
    decode(
        &object(value!({
            "userId": "2819c223-7f76-453a-919d-413861904646",
            "groupIds": ["00000000-0000-0000-0000-000000000002"]
        })),
        &mut membership,
    )
    .unwrap();
    assert_eq!(
        membership.user_id.0.to_string(),
        "2819c223-7f76-453a-919d-413861904646"
    );
    assert_eq!(membership.group_ids, [UserId(Uuid::from_u128(2))]);

    let err = decode(&object(value!({ "userId": "nope" })), &mut membership).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::DelegatedFailure {
            capability: Capability::DecodeIdentifier,
            ..
        }
    ));
    assert_eq!(err.path_string(), ".userId");
}

/// Accepts numbers and strings alike.
#[derive(Debug, Default, PartialEq, Scim)]
#[scim(transparent, identifier)]
struct ExternalId(String);

impl DecodeIdentifier for ExternalId {
    fn decode_identifier(&mut self, source: &Value) -> Result<(), HookError> {
        match source {
            Value::String(s) => self.0 = format!("s:{s}"),
            Value::Number(n) => self.0 = format!("n:{n}"),
            other => return Err(format!("unsupported {}", other.kind()).into()),
        }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Linked {
    external: ExternalId,
    others: Vec<ExternalId>,
}

#[test]
fn identifier_decode_preempts_kind_checks() {
    let mut linked = Linked::default();
    decode(
        &object(value!({ "external": 42, "others": ["a", 7] })),
        &mut linked,
    )
    .unwrap();
    assert_eq!(linked.external, ExternalId("n:42".into()));
    assert_eq!(
        linked.others,
        [ExternalId("s:a".into()), ExternalId("n:7".into())]
    );
}

/// Claims identifier decoding but never hands out the hook.
#[derive(Debug, Default)]
struct Broken;

impl Scim for Broken {
    const SHAPE: &'static Shape =
        &Shape::new::<Self>("Broken", Def::Opaque).with_flags(ShapeFlags::DECODE_IDENTIFIER);
}

impl Slot for Broken {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque
    }

    fn reset(&mut self) {}
}

#[derive(Debug, Default, Scim)]
struct HasBroken {
    key: Broken,
}

#[test]
fn claimed_but_missing_capability() {
    let mut target = HasBroken::default();
    let err = decode(&object(value!({ "key": "k" })), &mut target).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::CapabilityAssertionFailed {
            capability: Capability::DecodeIdentifier,
            ..
        }
    ));
    insta::assert_snapshot!(err.to_string(), @"at .key: Broken declares DecodeIdentifier but does not implement it");
}
