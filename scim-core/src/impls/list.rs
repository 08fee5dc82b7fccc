use crate::{Def, ListDef, Poke, PokeList, Scim, Shape, Slot, shape_of};

impl<T: Scim> Scim for Vec<T> {
    const SHAPE: &'static Shape = &Shape::new::<Self>(
        "Vec",
        Def::List(ListDef {
            item: shape_of::<T>,
        }),
    );
}

impl<T: Scim> Slot for Vec<T> {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::List(self)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T: Scim> PokeList for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn reserve_exact(&mut self, additional: usize) {
        Vec::reserve_exact(self, additional);
    }

    fn push_default(&mut self) -> &mut dyn Slot {
        let index = Vec::len(self);
        self.push(T::default());
        &mut self[index]
    }
}
