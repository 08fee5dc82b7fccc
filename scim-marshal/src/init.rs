use crate::{Def, Poke, Shape, Slot, trace};

/// Prepares a freshly allocated nested target for decoding: lists and maps
/// are emptied, records are initialized field by field and optionals are
/// allocated and initialized.
///
/// An optional whose record type already appears on the initialization path
/// is left empty, so self-referential records terminate.
pub(crate) fn initialize(target: &mut dyn Slot) {
    init(target, &mut Vec::new());
}

fn init(target: &mut dyn Slot, stack: &mut Vec<&'static Shape>) {
    let shape = target.shape();
    match target.poke() {
        Poke::Struct(record) => {
            let Some(def) = shape.as_struct() else {
                return;
            };
            if on_path(stack, shape) {
                return;
            }
            stack.push(shape);
            for index in 0..def.fields.len() {
                if let Some(field) = record.field_mut(index) {
                    init(field, stack);
                }
            }
            stack.pop();
        }
        Poke::List(list) => list.clear(),
        Poke::Map(map) => map.clear(),
        Poke::Option(option) => {
            let Def::Option(def) = shape.def else {
                return;
            };
            if on_path(stack, def.inner()) {
                trace!("{shape}: recursive, left empty");
                option.set_none();
                return;
            }
            init(option.get_or_insert_default(), stack);
        }
        Poke::Scalar(_) | Poke::Dynamic(_) | Poke::Opaque => {}
    }
}

// Recursion between types always goes through a record, so records are the
// only shapes tracked.
fn on_path(stack: &[&'static Shape], shape: &'static Shape) -> bool {
    shape.as_struct().is_some() && stack.iter().any(|seen| seen.is(shape))
}
