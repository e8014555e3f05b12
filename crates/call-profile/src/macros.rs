//! Declarative macro for enumerations carried as integer codes
//!
//! Every enumeration in a call profile travels as an `i32` code, both in the
//! extras bag and on the wire. `coded_enum!` declares the Rust enum together
//! with its code table.
//!
//! The generated type gets:
//!
//! - `code()` / `from_code()` for the raw integer mapping
//! - `ALL`, every value in declaration order
//! - `From<T> for i32` and `TryFrom<i32>` (failing with
//!   [`ProfileError::UnknownCode`](crate::error::ProfileError::UnknownCode))
//! - serde support that encodes the integer code rather than the variant
//!   index

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(into = "i32", try_from = "i32")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Integer code of this value
            pub const fn code(self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Look up a value by its integer code
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $(c if c == $code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::error::ProfileError;

            fn try_from(code: i32) -> $crate::error::Result<Self> {
                Self::from_code(code)
                    .ok_or_else(|| $crate::error::ProfileError::unknown_code($kind, code))
            }
        }
    };
}
