//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Variants carry a stable numeric identifier, iterate in definition order
/// and display as human-readable labels.
///
/// # Example
///
/// ```rust
/// common::define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!(Kind::Cube.u8(), 1);
/// assert_eq!(Kind::try_from(2).unwrap(), Kind::Sphere);
/// ```
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumIter,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[strum(serialize_all = "title_case")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }

        impl ::core::convert::TryFrom<u8> for $name {
            type Error = $crate::kind::UnknownKindError;

            fn try_from(value: u8) -> Result<$name, Self::Error> {
                match value {
                    $(
                        v if $name::$variant.u8() == v => {
                            Ok($name::$variant)
                        },
                    )*
                    v => Err($crate::kind::UnknownKindError {
                        name: ::core::stringify!($name),
                        value: v,
                    }),
                }
            }
        }

        $(
            impl $crate::FromParam<{ $value }> for $name {
                const VALUE: $name = $name::$variant;
            }
        )*
    };
}

/// Error of converting a numeric identifier into a kind enum.
#[derive(Clone, Copy, Debug, derive_more::Display, derive_more::Error)]
#[display("invalid `{name}` value: {value}")]
pub struct UnknownKindError {
    /// Name of the kind enum.
    pub name: &'static str,

    /// Rejected numeric identifier.
    pub value: u8,
}

/// Helper trait converting const parameter to a value.
pub trait FromParam<const PARAM: u8> {
    /// Value of the parameter.
    const VALUE: Self;
}
