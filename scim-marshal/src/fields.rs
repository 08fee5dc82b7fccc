//! Flattened field lists, derived once per record type.

use core::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::{Field, Poke, PokeStruct, Shape, Slot, debug};

/// A field of a record as seen from a source mapping: flattened fields are
/// spliced in, skipped fields are gone.
#[derive(Clone, Debug)]
pub struct FlatField {
    /// The key this field binds to in a source mapping.
    pub key: String,
    /// Field indices from the record down to this field, one per level of
    /// flattening.
    pub path: Vec<usize>,
    /// The field itself.
    pub field: &'static Field,
}

type Cache = RwLock<HashMap<TypeId, Arc<[FlatField]>>>;

static CACHE: LazyLock<Cache> = LazyLock::new(Default::default);

/// The flattened, ordered field list of `shape`, empty for non-records.
///
/// Derived on first use and cached for the life of the process.
pub fn flat_fields(shape: &'static Shape) -> Arc<[FlatField]> {
    let id = shape.id.get();

    if let Ok(cache) = CACHE.read()
        && let Some(fields) = cache.get(&id)
    {
        return Arc::clone(fields);
    }

    let fields: Arc<[FlatField]> = enumerate(shape).into();
    debug!(
        "derived {} keys for {}: {:?}",
        fields.len(),
        shape,
        fields.iter().map(|f| f.key.as_str()).collect::<Vec<_>>()
    );
    if let Ok(mut cache) = CACHE.write() {
        cache.entry(id).or_insert_with(|| Arc::clone(&fields));
    }
    fields
}

fn enumerate(shape: &'static Shape) -> Vec<FlatField> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    let mut stack = vec![shape];
    collect(shape, &mut path, &mut stack, &mut out);
    #[cfg(feature = "tracing")]
    report_duplicates(shape, &out);
    out
}

fn collect(
    shape: &'static Shape,
    path: &mut Vec<usize>,
    stack: &mut Vec<&'static Shape>,
    out: &mut Vec<FlatField>,
) {
    let Some(def) = shape.as_struct() else {
        return;
    };
    for (index, field) in def.fields.iter().enumerate() {
        if field.is_skipped() {
            continue;
        }
        path.push(index);
        let inner = field.shape();
        let embeddable = field.is_flattened()
            && inner.as_struct().is_some()
            && !inner.decodes_self()
            && !stack.iter().any(|s| s.is(inner));
        if embeddable {
            stack.push(inner);
            collect(inner, path, stack, out);
            stack.pop();
        } else {
            out.push(FlatField {
                key: field.key(),
                path: path.clone(),
                field,
            });
        }
        path.pop();
    }
}

#[cfg(feature = "tracing")]
fn report_duplicates(shape: &'static Shape, fields: &[FlatField]) {
    for (i, a) in fields.iter().enumerate() {
        if fields[..i].iter().any(|b| b.key == a.key) {
            tracing::warn!(
                "{shape}: key {:?} is bound by more than one field, each receives the value",
                a.key
            );
        }
    }
}

/// Walks `path` down through flattened records to the field it names.
///
/// Returns `None` for skipped fields or if a flattened field is no longer a
/// record.
pub(crate) fn field_at<'a>(
    record: &'a mut dyn PokeStruct,
    path: &[usize],
) -> Option<&'a mut dyn Slot> {
    let (&last, parents) = path.split_last()?;
    let mut record = record;
    for &index in parents {
        let Poke::Struct(inner) = record.field_mut(index)?.poke() else {
            return None;
        };
        record = inner;
    }
    record.field_mut(last)
}
