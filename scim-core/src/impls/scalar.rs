use scim_value::{Number, Value};

use crate::{Def, Poke, PokeScalar, ScalarDef, ScalarKind, Scim, Shape, Slot};

macro_rules! impl_scalar_slot {
    ($t:ty, $kind:expr) => {
        impl Scim for $t {
            const SHAPE: &'static Shape =
                &Shape::new::<$t>(stringify!($t), Def::Scalar(ScalarDef::new($kind)));
        }

        impl Slot for $t {
            fn shape(&self) -> &'static Shape {
                <Self as Scim>::SHAPE
            }

            fn poke(&mut self) -> Poke<'_> {
                Poke::Scalar(self)
            }

            fn reset(&mut self) {
                *self = <$t>::default();
            }
        }
    };
}

macro_rules! impl_numeric {
    ($kind:expr => $($t:ty),*) => {
        $(
            impl_scalar_slot!($t, $kind);

            impl PokeScalar for $t {
                fn set(&mut self, value: &Value) -> bool {
                    let Value::Number(n) = value else {
                        return false;
                    };
                    *self = match *n {
                        Number::PosInt(v) => v as $t,
                        Number::NegInt(v) => v as $t,
                        Number::Float(v) => v as $t,
                    };
                    true
                }
            }
        )*
    };
}

impl_numeric!(ScalarKind::Integer => i8, i16, i32, i64, i128, isize);
impl_numeric!(ScalarKind::Unsigned => u8, u16, u32, u64, u128, usize);
impl_numeric!(ScalarKind::Float => f32, f64);

impl_scalar_slot!(bool, ScalarKind::Bool);

impl PokeScalar for bool {
    fn set(&mut self, value: &Value) -> bool {
        let Value::Bool(b) = value else {
            return false;
        };
        *self = *b;
        true
    }
}

impl_scalar_slot!(String, ScalarKind::String);

impl PokeScalar for String {
    fn set(&mut self, value: &Value) -> bool {
        let Value::String(s) = value else {
            return false;
        };
        self.clone_from(s);
        true
    }
}
