use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::{Def, MapDef, Poke, PokeMap, Scim, Shape, Slot, shape_of};

impl<V: Scim, S: BuildHasher + Default + 'static> Scim for HashMap<String, V, S> {
    const SHAPE: &'static Shape = &Shape::new::<Self>(
        "HashMap",
        Def::Map(MapDef {
            value: shape_of::<V>,
        }),
    );
}

impl<V: Scim, S: BuildHasher + Default + 'static> Slot for HashMap<String, V, S> {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Map(self)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<V: Scim, S: BuildHasher + Default + 'static> PokeMap for HashMap<String, V, S> {
    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn insert_default(&mut self, key: &str) -> &mut dyn Slot {
        let value = self.entry(key.to_owned()).or_default();
        *value = V::default();
        value
    }
}

impl<V: Scim> Scim for BTreeMap<String, V> {
    const SHAPE: &'static Shape = &Shape::new::<Self>(
        "BTreeMap",
        Def::Map(MapDef {
            value: shape_of::<V>,
        }),
    );
}

impl<V: Scim> Slot for BTreeMap<String, V> {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Map(self)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<V: Scim> PokeMap for BTreeMap<String, V> {
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn insert_default(&mut self, key: &str) -> &mut dyn Slot {
        let value = self.entry(key.to_owned()).or_default();
        *value = V::default();
        value
    }
}

impl<V: Scim, S: BuildHasher + Default + 'static> Scim for IndexMap<String, V, S> {
    const SHAPE: &'static Shape = &Shape::new::<Self>(
        "IndexMap",
        Def::Map(MapDef {
            value: shape_of::<V>,
        }),
    );
}

impl<V: Scim, S: BuildHasher + Default + 'static> Slot for IndexMap<String, V, S> {
    fn shape(&self) -> &'static Shape {
        <Self as Scim>::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Map(self)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<V: Scim, S: BuildHasher + Default + 'static> PokeMap for IndexMap<String, V, S> {
    fn clear(&mut self) {
        IndexMap::clear(self);
    }

    fn insert_default(&mut self, key: &str) -> &mut dyn Slot {
        let value = self.entry(key.to_owned()).or_default();
        *value = V::default();
        value
    }
}
