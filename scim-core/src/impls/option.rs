use crate::{
    Def, DecodeIdentifier, DecodeSelf, OptionDef, Poke, PokeOption, Scim, Shape, Slot, shape_of,
};

impl<T: Scim> Scim for Option<T> {
    const SHAPE: &'static Shape = &Shape::new::<Self>(
        "Option",
        Def::Option(OptionDef {
            inner: shape_of::<T>,
        }),
    );
}

impl<T: Scim> Slot for Option<T> {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Option(self)
    }

    fn reset(&mut self) {
        *self = None;
    }
}

impl<T: Scim> PokeOption for Option<T> {
    fn is_some(&self) -> bool {
        Option::is_some(self)
    }

    fn set_none(&mut self) {
        *self = None;
    }

    fn get_or_insert_default(&mut self) -> &mut dyn Slot {
        self.get_or_insert_with(T::default)
    }
}

// Boxes are transparent: they have the shape of what they hold.
impl<T: Scim> Scim for Box<T> {
    const SHAPE: &'static Shape = T::SHAPE;
}

impl<T: Scim> Slot for Box<T> {
    fn shape(&self) -> &'static Shape {
        T::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        (**self).poke()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn as_decode_self(&mut self) -> Option<&mut dyn DecodeSelf> {
        (**self).as_decode_self()
    }

    fn as_decode_identifier(&mut self) -> Option<&mut dyn DecodeIdentifier> {
        (**self).as_decode_identifier()
    }
}
