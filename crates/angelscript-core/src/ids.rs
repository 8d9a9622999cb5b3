//! Identifier types for compiled script entities.
//!
//! After a module is built, the engine hands out numeric identifiers for the
//! entities it compiled. Metadata is keyed by these identifiers, one newtype per
//! entity kind so a type id can never be used to look up a function.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Create an identifier from the engine's raw value.
            #[inline]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the underlying value.
            #[inline]
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifies a script-declared class or interface.
    ///
    /// # Example
    ///
    /// ```
    /// use angelscript_core::TypeId;
    ///
    /// let id = TypeId::new(0x4000_0001);
    /// assert_eq!(id.value(), 0x4000_0001);
    /// ```
    TypeId,
    "type"
);

entity_id!(
    /// Identifies a compiled script function.
    FunctionId,
    "func"
);

entity_id!(
    /// Index of a global variable within its module.
    VarIndex,
    "var"
);
