/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Closed sets of string tokens.
//!
//! Conversion from the wire is strict: an absent, empty or unrecognized token is an
//! [`UnknownEnumValue`] error, never a fallback member.
//!
//! ```
//! use wire_http::enums::WireEnum;
//! use wire_http::wire_enum;
//!
//! wire_enum! {
//!     /// Lifecycle of a widget
//!     pub enum WidgetState {
//!         Active => "ACTIVE",
//!         Retired => "RETIRED",
//!     }
//! }
//!
//! assert_eq!(WidgetState::from_wire(Some("ACTIVE")), Ok(WidgetState::Active));
//! assert!(WidgetState::from_wire(Some("active")).is_err());
//! assert_eq!(WidgetState::Retired.as_wire(), "RETIRED");
//! ```

use thiserror::Error;

/// A wire token that is not a member of the enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} is not a valid {enum_name}", display_token(.token))]
pub struct UnknownEnumValue {
    enum_name: &'static str,
    token: Option<String>,
}

fn display_token(token: &Option<String>) -> String {
    match token.as_deref() {
        None => "an absent value".to_string(),
        Some("") => "an empty string".to_string(),
        Some(token) => format!("{token:?}"),
    }
}

impl UnknownEnumValue {
    /// Builds the error for `token` in the enum named `enum_name`.
    pub fn new(enum_name: &'static str, token: Option<&str>) -> Self {
        UnknownEnumValue {
            enum_name,
            token: token.map(str::to_string),
        }
    }

    /// Name of the enum.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected token, if one was present.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// An enum whose members map one-to-one onto wire tokens.
pub trait WireEnum: Sized + Copy + 'static {
    /// Name of the enum, used in errors.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const VALUES: &'static [Self];

    /// The token of this member.
    fn as_wire(&self) -> &'static str;

    /// Finds the member for `token`.
    fn from_wire(token: Option<&str>) -> Result<Self, UnknownEnumValue> {
        match token {
            Some(token) if !token.is_empty() => Self::VALUES
                .iter()
                .find(|value| value.as_wire() == token)
                .copied()
                .ok_or_else(|| UnknownEnumValue::new(Self::NAME, Some(token))),
            other => Err(UnknownEnumValue::new(Self::NAME, other)),
        }
    }

    /// Every token, in declaration order.
    fn tokens() -> Vec<&'static str> {
        Self::VALUES.iter().map(WireEnum::as_wire).collect()
    }
}

/// Defines an enum implementing [`WireEnum`], along with `FromStr`, `Display` and the
/// conversions used by the marshaller and unmarshaller.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::enums::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[$($name::$variant),+];

            fn as_wire(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::enums::UnknownEnumValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::enums::WireEnum>::from_wire(Some(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as $crate::enums::WireEnum>::as_wire(self))
            }
        }

        impl $crate::value::ToFieldValue for $name {
            fn to_field_value(&self) -> $crate::value::FieldValue<'_> {
                $crate::value::FieldValue::String(<Self as $crate::enums::WireEnum>::as_wire(self))
            }
        }

        impl $crate::value::FromWireValue for $name {
            fn from_wire_value(
                value: $crate::value::WireValue,
            ) -> ::std::result::Result<Self, $crate::error::FieldError> {
                let token = value.into_string()?;
                Ok(<Self as $crate::enums::WireEnum>::from_wire(Some(&token))?)
            }
        }
    };
}
