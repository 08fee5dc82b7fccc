use crate::decoder::Decoder;
use crate::{
    Def, DecodeError, DecodeErrorKind, Object, PathSegment, Poke, Slot, Value, hooks, init, trace,
};

impl Decoder<'_> {
    /// Writes one non-null source value into `target`.
    ///
    /// Null sources leave the target untouched.
    pub(crate) fn coerce(&self, source: &Value, target: &mut dyn Slot) -> Result<(), DecodeError> {
        match target.poke() {
            Poke::Dynamic(value) if !source.is_null() => {
                value.clone_from(source);
                return Ok(());
            }
            Poke::Option(option) if !source.is_null() => {
                let allocated = !option.is_some();
                let result = self.coerce(source, option.get_or_insert_default());
                // An optional the source was rejected for outright stays empty.
                if allocated && result.as_ref().is_err_and(|err| err.path.is_empty()) {
                    option.set_none();
                }
                return result;
            }
            _ => {}
        }

        match source {
            Value::Null => Ok(()),
            Value::Array(_) => self.coerce_list(source, target),
            Value::Object(object) => self.coerce_object(object, target),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.coerce_scalar(source, target)
            }
        }
    }

    /// A mapping replaces the target with a fresh, initialized value and is
    /// decoded into it.
    fn coerce_object(&self, source: &Object, target: &mut dyn Slot) -> Result<(), DecodeError> {
        let shape = target.shape();
        if !shape.accepts_object() {
            return Err(DecodeError::mismatch(shape, "Object"));
        }
        target.reset();
        init::initialize(target);
        self.decode_object(source, target)
    }

    /// A list replaces the target list element by element. Mapping elements
    /// are decoded into fresh records, other elements are coerced, null
    /// elements keep the element default.
    fn coerce_list(&self, source: &Value, target: &mut dyn Slot) -> Result<(), DecodeError> {
        let items = source.as_array().unwrap_or_default();
        let shape = target.shape();
        let Poke::List(list) = target.poke() else {
            return Err(DecodeError::mismatch(shape, "Vec<Value>"));
        };
        if let Some(max) = self.options.sequence_limit()
            && items.len() > max
        {
            return Err(DecodeError::new(DecodeErrorKind::LimitExceeded {
                len: items.len(),
                max,
            }));
        }

        list.clear();
        list.reserve_exact(items.len());
        let mut errors = self.recorder();
        if let Some(records) = source.as_object_array() {
            trace!("{shape}: {} records", records.len());
            for (index, record) in records.into_iter().enumerate() {
                if let Err(err) = self.coerce_object(record, list.push_default()) {
                    errors.record(err.with_path(PathSegment::Index(index)));
                }
            }
        } else {
            trace!("{shape}: {} elements", items.len());
            for (index, item) in items.iter().enumerate() {
                if let Err(err) = self.coerce(item, list.push_default()) {
                    errors.record(err.with_path(PathSegment::Index(index)));
                }
            }
        }
        errors.finish()
    }

    /// Scalars are assigned directly when the target is the source's natural
    /// type. Otherwise an identifier hook takes over if declared, a
    /// different kind is a mismatch, and the same kind is converted.
    fn coerce_scalar(&self, source: &Value, target: &mut dyn Slot) -> Result<(), DecodeError> {
        let shape = target.shape();
        let natural = source.natural_type();

        if shape.type_identifier != natural && shape.decodes_identifier() {
            return hooks::decode_identifier(target, source);
        }

        let Poke::Scalar(scalar) = target.poke() else {
            return Err(DecodeError::mismatch(shape, natural));
        };
        if shape.type_identifier == natural {
            trace!("{shape}: assigned");
        } else {
            match shape.def {
                Def::Scalar(def) if def.kind.accepts(source.kind()) => {
                    trace!("{shape}: converted from {natural}");
                }
                _ => return Err(DecodeError::mismatch(shape, natural)),
            }
        }
        if scalar.set(source) {
            Ok(())
        } else {
            Err(DecodeError::mismatch(shape, natural))
        }
    }
}
