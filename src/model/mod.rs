//! Types shared by the server API and the web client.
//!
//! Everything here compiles for both halves of the application, so it only depends on
//! `serde`, `chrono` and `thiserror`. OpenAPI schemas are derived when the `server`
//! feature is enabled.

/// Declares an enum persisted as a text column and serialized as the same text.
///
/// Each variant maps to its stored value and a human-readable label. Parsing an unknown
/// value yields [`ValidationError::UnknownValue`](crate::model::validation::ValidationError).
/// Attributes pass through to the enum and its variants, so `#[derive(Default)]` on the
/// enum pairs with `#[default]` on a variant.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$variant_meta:meta])* $variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value stored in the database and sent over the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::validation::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::model::validation::ValidationError::UnknownValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod api;
pub mod asset;
pub mod common_area;
pub mod financial;
pub mod location;
pub mod maintenance;
pub mod preventive;
pub mod record_list;
pub mod reservation;
pub mod supplier;
pub mod user;
pub mod validation;
