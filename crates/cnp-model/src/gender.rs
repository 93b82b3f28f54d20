//! Gender and birth-century resolution for Romanian CNPs.
//!
//! The first digit of a CNP encodes both biological gender and birth
//! century:
//!
//! - **1/2**: male/female born 1900–1999
//! - **3/4**: male/female born 1800–1899
//! - **5/6**: male/female born 2000–2099
//! - **7/8**: male/female fiscal residents, whose birth century cannot be
//!   determined from the CNP alone
//!
//! Digits outside 1–8 carry no gender and no century; both resolvers
//! return `None` for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Biological gender encoded in the first digit of a CNP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Resolve the gender from the first digit of a CNP.
    ///
    /// Odd digits in 1–8 denote males, even digits females. Any other
    /// digit maps to no gender.
    pub fn from_cnp_digit(digit: u8) -> Option<Gender> {
        match digit {
            1 | 3 | 5 | 7 => Some(Gender::Male),
            2 | 4 | 6 | 8 => Some(Gender::Female),
            _ => None,
        }
    }

    /// Returns the full name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Returns the one-letter code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    /// Parse a gender string.
    /// Handles one-letter codes and full names (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "M" | "MALE" => Ok(Gender::Male),
            "F" | "FEMALE" => Ok(Gender::Female),
            _ => Err(ModelError::UnknownGender(s.to_string())),
        }
    }
}

/// Resolve the four-digit birth year from the first digit of a CNP and the
/// two-digit year fragment that follows it.
///
/// The fragment is the zero-padded year within the century, so `"05"`
/// combined with gender digit 1 resolves to 1905. Digits 7 and 8 mark
/// fiscal residents and resolve to `None`, as does any digit outside 1–6
/// and any fragment that is not exactly two decimal digits.
pub fn birth_year_from_cnp_digit(gender_digit: u8, year_fragment: &str) -> Option<i32> {
    if year_fragment.len() != 2 || !year_fragment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year_in_century: i32 = year_fragment.parse().ok()?;

    match gender_digit {
        1 | 2 => Some(1900 + year_in_century),
        3 | 4 => Some(1800 + year_in_century),
        5 | 6 => Some(2000 + year_in_century),
        _ => None,
    }
}
