//! Macros for declaring SharePoint choice columns

/// Declares a closed source vocabulary
///
/// Each variant is bound to the exact display string SharePoint stores for
/// it, so the enum deserializes straight from list JSON and `ALL` lists the
/// complete domain of the column.
macro_rules! source_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value the column can hold
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the SharePoint display string
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

pub(crate) use source_enum;
