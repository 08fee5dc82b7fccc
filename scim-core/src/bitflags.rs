/// Defines a small `Copy` flag set over an unsigned integer.
///
/// Only the operations the shape tables need are generated: `empty()`,
/// `contains()`, `union()`, `|` and a `Debug` listing the set flags.
/// Everything is `const` so flag sets can be built inside `Shape` constants.
#[macro_export]
macro_rules! bitflags {
    (
        $(#[$outer:meta])*
        $vis:vis struct $Name:ident : $T:ty {
            $(
                $(#[$inner:meta])*
                const $FLAG:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $vis struct $Name($T);

        impl $Name {
            $(
                $(#[$inner])*
                pub const $FLAG: Self = Self($value);
            )*

            /// No flags set.
            #[inline]
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Returns `true` if every flag in `other` is set in `self`.
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }

            /// Both sets combined.
            #[inline]
            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl ::core::ops::BitOr for $Name {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl ::core::fmt::Debug for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut first = true;
                $(
                    if self.contains(Self::$FLAG) {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        f.write_str(stringify!($FLAG))?;
                        first = false;
                    }
                )*
                if first {
                    f.write_str("(empty)")?;
                }
                Ok(())
            }
        }
    };
}
