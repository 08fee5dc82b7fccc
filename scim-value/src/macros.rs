/// Builds a [`Value`](crate::Value) with JSON-like syntax.
///
/// Keys must be string literals. Each value must be a single token tree:
/// literals, `null`, nested `[...]` / `{...}`, or a parenthesized expression
/// such as `(-1)` or `(name.clone())`.
///
/// ```
/// use scim_value::{Value, value};
///
/// let v = value!({ "id": "2819c223", "count": (-1), "tags": ["a", null] });
/// assert_eq!(v.get("count").and_then(Value::as_number).and_then(|n| n.as_i64()), Some(-1));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![ $( $crate::value!($elem) ),* ])
    };
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut object = $crate::Object::new();
        $(
            object.insert(::std::string::String::from($key), $crate::value!($val));
        )*
        $crate::Value::Object(object)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
