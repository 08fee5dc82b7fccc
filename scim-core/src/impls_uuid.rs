use scim_value::Value;
use uuid::Uuid;

use crate::{Def, DecodeIdentifier, HookError, Poke, Scim, Shape, ShapeFlags, Slot};

impl Scim for Uuid {
    const SHAPE: &'static Shape = &Shape::new::<Self>("Uuid", Def::Opaque)
        .with_flags(ShapeFlags::DECODE_IDENTIFIER);
}

impl Slot for Uuid {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque
    }

    fn reset(&mut self) {
        *self = Uuid::nil();
    }

    fn as_decode_identifier(&mut self) -> Option<&mut dyn DecodeIdentifier> {
        Some(self)
    }
}

impl DecodeIdentifier for Uuid {
    fn decode_identifier(&mut self, source: &Value) -> Result<(), HookError> {
        let Value::String(s) = source else {
            return Err(format!("expected a UUID string, got {}", source.kind()).into());
        };
        *self = Uuid::parse_str(s)?;
        Ok(())
    }
}
