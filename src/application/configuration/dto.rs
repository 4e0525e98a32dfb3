use serde::Serialize;
use std::fmt::{Debug, Display, Formatter};
use std::num::ParseIntError;

#[derive(Clone, Copy, Serialize, PartialEq)]
pub struct DurationInSeconds(pub u64);

impl DurationInSeconds {
    pub fn to_unsigned(self) -> u64 {
        self.0
    }

    pub fn to_signed(self) -> i64 {
        self.0 as i64
    }
}

impl Debug for DurationInSeconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}s ({}m/{}h/{}d)",
            self.0,
            self.0 / 60,
            self.0 / 60 / 60,
            self.0 / 60 / 60 / 24,
        )
    }
}

impl From<u64> for DurationInSeconds {
    fn from(value: u64) -> Self {
        DurationInSeconds(value)
    }
}

impl TryFrom<String> for DurationInSeconds {
    type Error = ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(DurationInSeconds::from(value.parse::<u64>()?))
    }
}

/// A secret that never shows up in logs.
#[derive(Clone, Serialize)]
pub struct HiddenString(String);

impl HiddenString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Display for HiddenString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "****")
    }
}

impl Debug for HiddenString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "****")
    }
}

impl From<String> for HiddenString {
    fn from(value: String) -> Self {
        HiddenString(value)
    }
}

impl From<&str> for HiddenString {
    fn from(value: &str) -> Self {
        HiddenString(value.to_string())
    }
}
