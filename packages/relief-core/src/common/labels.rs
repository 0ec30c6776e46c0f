//! Fixed enumerations that travel as display strings.
//!
//! Every enumeration in the data model is shown, serialized and parsed with
//! the same label (`"Very High"`, `"self"`, `"Open"`), so the mapping is
//! declared once per type.

/// Declares a fieldless enum whose variants map 1:1 onto string labels.
///
/// Generates serde renames, `as_str`, `ALL`, `Display` and a
/// case-insensitive `FromStr` that fails with [`ParseEnumError`].
///
/// [`ParseEnumError`]: crate::error::ParseEnumError
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::error::ParseEnumError::new($kind, s))
            }
        }
    };
}

pub(crate) use labeled_enum;
