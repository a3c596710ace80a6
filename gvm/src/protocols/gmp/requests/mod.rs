//! The GMP request catalogue.
//!
//! One builder function per protocol operation, grouped by the dialect that
//! introduced it. Each dialect module re-exports everything of its predecessor,
//! so `requests::v226` holds the complete 22.6 catalogue. Builders validate
//! their arguments before producing a [`Request`](crate::Request); nothing here
//! performs I/O.

use std::borrow::Cow;
use std::fmt;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand, XmlCommandElement};

/// Defines a protocol enumeration implementing [`GvmEnum`], `FromStr` and
/// `Display`.
///
/// Each variant lists its snake case name, its wire value and optional
/// aliases accepted while parsing.
macro_rules! gvm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $snake:literal => $value:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::protocols::gmp::requests::GvmEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $snake,)+
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*],)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::protocols::gmp::requests::GvmEnum>::parse(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::protocols::gmp::requests::GvmEnum::value(*self))
            }
        }
    };
}

pub mod v224;
pub mod v225;
pub mod v226;
pub mod v227;
pub mod v228;

/// A closed set of protocol values with lenient string parsing.
pub trait GvmEnum: Sized + Copy + Eq + 'static {
    const TYPE_NAME: &'static str;
    /// Every variant in declaration order.
    const ALL: &'static [Self];

    /// The wire value.
    fn value(self) -> &'static str;

    /// The snake case variant name.
    fn name(self) -> &'static str;

    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Parse user input.
    ///
    /// `None` and the empty string yield `Ok(None)`. Input matches a variant by
    /// its wire value or an alias (ignoring case), or by its name after
    /// normalizing `&` to `and`, dropping commas and mapping spaces and hyphens
    /// to underscores. Anything else fails with [`Error::InvalidArgument`].
    fn from_string(value: Option<&str>) -> Result<Option<Self>> {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(None),
        };
        let normalized = normalize(value);
        Self::ALL
            .iter()
            .copied()
            .find(|variant| {
                variant.value().eq_ignore_ascii_case(value)
                    || variant.name() == normalized
                    || variant
                        .aliases()
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(value))
            })
            .map(Some)
            .ok_or_else(|| {
                let function = format!("{}::from_string", Self::TYPE_NAME);
                Error::invalid_message(
                    &function,
                    value,
                    format!(
                        "Invalid argument {} for {}. Allowed values are {}.",
                        value,
                        function,
                        AllowedValues(Self::ALL)
                    ),
                )
            })
    }

    /// Like [`from_string`](Self::from_string) but absent input is an error.
    fn parse(value: &str) -> Result<Self> {
        Self::from_string(Some(value))?
            .ok_or_else(|| Error::required(&format!("{}::from_string", Self::TYPE_NAME), "value"))
    }
}

fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .replace('&', "and")
        .replace(',', "")
        .replace([' ', '-'], "_")
}

struct AllowedValues<E: 'static>(&'static [E]);

impl<E: GvmEnum> fmt::Display for AllowedValues<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, variant) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(variant.value())?;
        }
        Ok(())
    }
}

/// Entity types which are sent to the server as a different wire type.
///
/// Audits are tasks and policies are scan configs on the wire. Operations
/// which distinguish them add a `usage_type` attribute.
pub trait WireEntityType: GvmEnum {
    fn wire_type(self) -> &'static str;

    /// The `usage_type` attribute of commands supporting it.
    fn usage_type(self) -> Option<&'static str>;
}

/// Values usable as entity identifiers.
pub trait EntityId {
    fn as_entity_id(&self) -> Cow<'_, str>;
}

impl EntityId for str {
    fn as_entity_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl EntityId for String {
    fn as_entity_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl EntityId for Uuid {
    fn as_entity_id(&self) -> Cow<'_, str> {
        Cow::Owned(self.hyphenated().to_string())
    }
}

impl<T: EntityId + ?Sized> EntityId for &T {
    fn as_entity_id(&self) -> Cow<'_, str> {
        (**self).as_entity_id()
    }
}

/// Fail with [`Error::RequiredArgument`] for an empty id.
pub(crate) fn required_id(function: &str, argument: &str, id: impl EntityId) -> Result<String> {
    let id = id.as_entity_id();
    if id.is_empty() {
        return Err(Error::required(function, argument));
    }
    Ok(id.into_owned())
}

/// Fail with [`Error::RequiredArgument`] for an empty string.
pub(crate) fn required<'a>(function: &str, argument: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::required(function, argument));
    }
    Ok(value)
}

/// Fail with [`Error::RequiredArgument`] for a missing or empty string.
pub(crate) fn required_opt<'a>(
    function: &str,
    argument: &str,
    value: Option<&'a str>,
) -> Result<&'a str> {
    required(function, argument, value.unwrap_or_default())
}

/// `<create_ENTITY><copy>ID</copy></create_ENTITY>`
pub(crate) fn clone_entity(entity: &str, id: impl EntityId) -> Result<Request> {
    let id = required_id(&format!("clone_{entity}"), &format!("{entity}_id"), id)?;
    let mut cmd = XmlCommand::new(format!("create_{entity}"));
    cmd.add_text_element("copy", id);
    Ok(cmd.into())
}

/// `<delete_ENTITY ENTITY_id="ID" ultimate="0|1"/>`
pub(crate) fn delete_entity(entity: &str, id: impl EntityId, ultimate: bool) -> Result<Request> {
    let argument = format!("{entity}_id");
    let id = required_id(&format!("delete_{entity}"), &argument, id)?;
    let mut cmd = XmlCommand::new(format!("delete_{entity}"));
    cmd.set_attribute(argument, id)
        .set_attribute("ultimate", to_bool(ultimate));
    Ok(cmd.into())
}

/// `<get_ENTITYs ENTITY_id="ID"/>`, open for further attributes.
pub(crate) fn get_entity(entity: &str, id: impl EntityId) -> Result<XmlCommand> {
    let argument = format!("{entity}_id");
    let id = required_id(&format!("get_{entity}"), &argument, id)?;
    let mut cmd = XmlCommand::new(format!("get_{entity}s"));
    cmd.set_attribute(argument, id);
    Ok(cmd)
}

/// Set a boolean attribute if a value was given.
pub(crate) fn set_bool(cmd: &mut XmlCommandElement, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        cmd.set_attribute(key, to_bool(value));
    }
}

/// Add a `<key>0|1</key>` child if a value was given.
pub(crate) fn add_bool_element(cmd: &mut XmlCommandElement, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        cmd.add_text_element(key, to_bool(value));
    }
}
