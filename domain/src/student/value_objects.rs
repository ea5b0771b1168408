//! Enrollment value objects
//!
//! [`Department`] and [`Degree`] are parsed once from user input, which must
//! name the symbol exactly (surrounding whitespace aside). On disk they
//! are written as their symbol names; older files that stored the ordinal
//! (`0`, `1`, `2`) are still accepted.

use crate::core::error::DomainError;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Shared parsing rules for the closed enrollment enums.
trait EnrollmentSymbol: Sized + Copy + 'static {
    /// Field name used in error messages
    const FIELD: &'static str;
    /// Variants in ordinal order
    const VARIANTS: &'static [Self];
    /// Symbol names in ordinal order
    const NAMES: &'static [&'static str];

    fn as_str(self) -> &'static str;

    fn parse_token(token: &str) -> Result<Self, DomainError> {
        let token = token.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str() == token)
            .ok_or_else(|| DomainError::InvalidEnumValue {
                field: Self::FIELD,
                value: token.to_string(),
                expected: Self::NAMES,
            })
    }

    fn from_ordinal(ordinal: u64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }
}

/// Accepts a symbol name or an ordinal
struct SymbolVisitor<T>(PhantomData<T>);

impl<T: EnrollmentSymbol> Visitor<'_> for SymbolVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} name ({}) or ordinal", T::FIELD, T::NAMES.join(", "))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::parse_token(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        T::from_ordinal(value).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        u64::try_from(value)
            .ok()
            .and_then(T::from_ordinal)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }
}

/// Academic department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Cse,
    Bba,
    Eee,
}

impl EnrollmentSymbol for Department {
    const FIELD: &'static str = "department";
    const VARIANTS: &'static [Self] = &[Department::Cse, Department::Bba, Department::Eee];
    const NAMES: &'static [&'static str] = &["CSE", "BBA", "EEE"];

    fn as_str(self) -> &'static str {
        match self {
            Department::Cse => "CSE",
            Department::Bba => "BBA",
            Department::Eee => "EEE",
        }
    }
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        EnrollmentSymbol::as_str(*self)
    }
}

/// Degree program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Bsc,
    Bba,
    Msc,
}

impl EnrollmentSymbol for Degree {
    const FIELD: &'static str = "degree";
    const VARIANTS: &'static [Self] = &[Degree::Bsc, Degree::Bba, Degree::Msc];
    const NAMES: &'static [&'static str] = &["BSC", "BBA", "MSC"];

    fn as_str(self) -> &'static str {
        match self {
            Degree::Bsc => "BSC",
            Degree::Bba => "BBA",
            Degree::Msc => "MSC",
        }
    }
}

impl Degree {
    pub fn as_str(&self) -> &'static str {
        EnrollmentSymbol::as_str(*self)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

impl std::str::FromStr for Degree {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SymbolVisitor(PhantomData))
    }
}

impl Serialize for Degree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Degree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SymbolVisitor(PhantomData))
    }
}
