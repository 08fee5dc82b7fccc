use crate::{
    DecodeError, DecodeOptions, ErrorPolicy, Object, PathSegment, Poke, PokeMap, PokeStruct,
    Shape, Slot, Value, debug, fields, hooks, trace,
};

/// Keeps one error per record level while sibling fields keep decoding.
pub(crate) struct Recorder {
    policy: ErrorPolicy,
    error: Option<DecodeError>,
}

impl Recorder {
    pub(crate) fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            error: None,
        }
    }

    pub(crate) fn record(&mut self, error: DecodeError) {
        debug!("recorded: {error}");
        match self.policy {
            ErrorPolicy::LastWins => self.error = Some(error),
            ErrorPolicy::FirstWins => {
                self.error.get_or_insert(error);
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), DecodeError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// State shared by every level of one top-level call.
pub(crate) struct Decoder<'o> {
    pub(crate) options: &'o DecodeOptions,
}

impl<'o> Decoder<'o> {
    pub(crate) fn new(options: &'o DecodeOptions) -> Self {
        Self { options }
    }

    pub(crate) fn recorder(&self) -> Recorder {
        Recorder::new(self.options.policy())
    }

    /// Decodes a mapping into a target that is already usable: a record, a
    /// map, an optional or a dynamic value, or any type that decodes itself.
    pub(crate) fn decode_object(
        &self,
        source: &Object,
        target: &mut dyn Slot,
    ) -> Result<(), DecodeError> {
        let shape = target.shape();
        if shape.decodes_self() {
            return hooks::decode_self(target, source);
        }
        match target.poke() {
            Poke::Struct(record) => self.decode_record(shape, record, source),
            Poke::Map(map) => self.decode_map(map, source),
            Poke::Option(option) => self.decode_object(source, option.get_or_insert_default()),
            Poke::Dynamic(value) => {
                *value = Value::Object(source.clone());
                Ok(())
            }
            Poke::Scalar(_) | Poke::List(_) | Poke::Opaque => {
                Err(DecodeError::mismatch(shape, "Object"))
            }
        }
    }

    fn decode_record(
        &self,
        shape: &'static Shape,
        record: &mut dyn PokeStruct,
        source: &Object,
    ) -> Result<(), DecodeError> {
        let mut errors = self.recorder();
        for flat in fields::flat_fields(shape).iter() {
            let Some(value) = source.get(&flat.key) else {
                continue;
            };
            if value.is_null() {
                trace!("{shape}.{}: null, left unchanged", flat.key);
                continue;
            }
            let Some(slot) = fields::field_at(record, &flat.path) else {
                continue;
            };
            if let Err(err) = self.coerce(value, slot) {
                errors.record(err.with_path(PathSegment::Field(flat.key.clone())));
            }
        }
        errors.finish()
    }

    fn decode_map(&self, map: &mut dyn PokeMap, source: &Object) -> Result<(), DecodeError> {
        map.clear();
        let mut errors = self.recorder();
        for (key, value) in source {
            if value.is_null() {
                continue;
            }
            if let Err(err) = self.coerce(value, map.insert_default(key)) {
                errors.record(err.with_path(PathSegment::Key(key.clone())));
            }
        }
        errors.finish()
    }
}
