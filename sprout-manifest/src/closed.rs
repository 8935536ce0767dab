//! Closed value sets shared by the configuration model.
//!
//! Every enumeration the wizard offers (versions, database kinds, field
//! types, relationship kinds, ...) is a fixed set of wire strings. The
//! [`closed_set!`] macro declares the Rust enum together with its wire
//! names so that serde, validation and templates agree on one table.

/// A fixed enumeration with a known set of wire names.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The wire name of this variant.
    fn as_str(&self) -> &'static str;

    /// All wire names, in declaration order.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }

    /// Look a variant up by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == name)
    }
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant
            ),+
        }

        impl $crate::ClosedSet for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::ClosedSet::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::ClosedSet>::from_name(s).ok_or_else(|| {
                    format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        s,
                        <$name as $crate::ClosedSet>::names().join(", ")
                    )
                })
            }
        }
    };
}

pub(crate) use closed_set;
