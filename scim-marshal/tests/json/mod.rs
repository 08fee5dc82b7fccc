use scim_marshal::{Scim, Value, from_value};
use scim_testhelpers::test;
use uuid::Uuid;

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(rename_all = "camelCase")]
struct User {
    schemas: Vec<String>,
    id: Uuid,
    user_name: String,
    name: Name,
    emails: Vec<MultiValued>,
    phone_numbers: Vec<MultiValued>,
    active: bool,
    meta: Meta,
}

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(rename_all = "camelCase")]
struct Name {
    formatted: Option<String>,
    family_name: String,
    given_name: String,
}

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(rename_all = "camelCase")]
struct MultiValued {
    value: String,
    r#type: String,
    primary: bool,
}

#[derive(Debug, Default, PartialEq, Scim)]
#[scim(rename_all = "camelCase")]
struct Meta {
    resource_type: String,
    created: String,
    version: Option<String>,
}

#[test]
fn decodes_a_parsed_scim_user() {
    let json = serde_json::json!({
        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
        "id": "2819c223-7f76-453a-919d-413861904646",
        "userName": "bjensen@example.com",
        "name": {
            "formatted": "Ms. Barbara J Jensen, III",
            "familyName": "Jensen",
            "givenName": "Barbara"
        },
        "emails": [
            { "value": "bjensen@example.com", "type": "work", "primary": true },
            { "value": "babs@jensen.org", "type": "home" }
        ],
        "phoneNumbers": null,
        "active": true,
        "meta": {
            "resourceType": "User",
            "created": "2010-01-23T04:56:22Z",
            "version": null
        }
    });

    let user: User = from_value(&Value::from(json)).unwrap();
    assert_eq!(user.schemas, ["urn:ietf:params:scim:schemas:core:2.0:User"]);
    assert_eq!(
        user.id,
        Uuid::parse_str("2819c223-7f76-453a-919d-413861904646").unwrap()
    );
    assert_eq!(user.name.given_name, "Barbara");
    assert_eq!(
        user.name.formatted.as_deref(),
        Some("Ms. Barbara J Jensen, III")
    );
    assert_eq!(user.emails.len(), 2);
    assert_eq!(user.emails[1].r#type, "home");
    assert!(!user.emails[1].primary);
    assert!(user.phone_numbers.is_empty());
    assert!(user.active);
    assert_eq!(user.meta.resource_type, "User");
    assert_eq!(user.meta.version.as_deref(), Some(""));
}
