//! Macros for ergonomic table construction.

/// Generate a `State` implementation for simple enums.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`,
/// and serializes as its variant name. Variants listed under `final:`
/// report `is_final() == true`.
///
/// # Example
///
/// ```
/// use flowstate::core::State;
/// use flowstate::state_enum;
///
/// state_enum! {
///     pub enum Checkout {
///         Cart,
///         Payment,
///         Done,
///     }
///     final: [Done]
/// }
///
/// assert_eq!(Checkout::Payment.name(), "Payment");
/// assert!(Checkout::Done.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        $crate::__unit_enum_serde!($name { $($variant),* });

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` implementation for simple enums.
///
/// # Example
///
/// ```
/// use flowstate::core::Event;
/// use flowstate::event_enum;
///
/// event_enum! {
///     pub enum Button {
///         Next,
///         Back,
///     }
/// }
///
/// assert_eq!(Button::Back.name(), "Back");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        $crate::__unit_enum_serde!($name { $($variant),* });

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Serialize unit variants by name through the re-exported serde, so
/// callers need no serde dependency of their own.
#[doc(hidden)]
#[macro_export]
macro_rules! __unit_enum_serde {
    ($name:ident { $($variant:ident),* }) => {
        impl $crate::serde::Serialize for $name {
            fn serialize<Ser>(&self, serializer: Ser) -> ::std::result::Result<Ser::Ok, Ser::Error>
            where
                Ser: $crate::serde::Serializer,
            {
                let name = match self {
                    $(Self::$variant => stringify!($variant)),*
                };
                serializer.serialize_str(name)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<De>(deserializer: De) -> ::std::result::Result<Self, De::Error>
            where
                De: $crate::serde::Deserializer<'de>,
            {
                const VARIANTS: &[&str] = &[$(stringify!($variant)),*];
                let name: ::std::string::String =
                    $crate::serde::Deserialize::deserialize(deserializer)?;
                match name.as_str() {
                    $(stringify!($variant) => ::std::result::Result::Ok(Self::$variant),)*
                    other => ::std::result::Result::Err(
                        <De::Error as $crate::serde::de::Error>::unknown_variant(other, VARIANTS),
                    ),
                }
            }
        }
    };
}

/// Build an [`EventMap`](crate::core::EventMap) from `event => state` pairs.
///
/// A repeated event keeps its last destination.
///
/// # Example
///
/// ```
/// use flowstate::{event_enum, state_enum, transitions};
///
/// state_enum! {
///     enum Step { One, Two, Three }
/// }
///
/// event_enum! {
///     enum Go { Forward, Skip }
/// }
///
/// let row = transitions! {
///     Go::Forward => Step::Two,
///     Go::Skip => Step::Three,
/// };
/// assert_eq!(row.get(&Go::Skip), Some(&Step::Three));
/// ```
#[macro_export]
macro_rules! transitions {
    () => {
        ::std::collections::HashMap::new()
    };
    ($($event:expr => $state:expr),+ $(,)?) => {{
        let mut row = ::std::collections::HashMap::new();
        $(
            row.insert($event, $state);
        )+
        row
    }};
}
