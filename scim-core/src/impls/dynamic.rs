use scim_value::Value;

use crate::{Def, Poke, Scim, Shape, Slot};

impl Scim for Value {
    const SHAPE: &'static Shape = &Shape::new::<Self>("Value", Def::Dynamic);
}

impl Slot for Value {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Dynamic(self)
    }

    fn reset(&mut self) {
        *self = Value::Null;
    }
}
