//! Status - Lifecycle Status and Offering Type Enums

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle status shared by plans, products, packages and modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Deprecated,
}

impl Status {
    /// Wire representation (`ACTIVE`, `INACTIVE`, `DEPRECATED`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Inactive => "INACTIVE",
            Status::Deprecated => "DEPRECATED",
        }
    }

    /// Translation key for the status label
    pub fn label_key(&self) -> &'static str {
        match self {
            Status::Active => "status.active",
            Status::Inactive => "status.inactive",
            Status::Deprecated => "status.deprecated",
        }
    }

    pub fn all() -> &'static [Status] {
        &[Status::Active, Status::Inactive, Status::Deprecated]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::all()
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Invalid {
                message: format!("unknown status: {s}"),
            })
    }
}

/// Commercial model of a plan or package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferingType {
    #[default]
    Subscription,
    OneTime,
    Trial,
}

impl OfferingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingType::Subscription => "SUBSCRIPTION",
            OfferingType::OneTime => "ONE_TIME",
            OfferingType::Trial => "TRIAL",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            OfferingType::Subscription => "offering.subscription",
            OfferingType::OneTime => "offering.one_time",
            OfferingType::Trial => "offering.trial",
        }
    }

    pub fn all() -> &'static [OfferingType] {
        &[
            OfferingType::Subscription,
            OfferingType::OneTime,
            OfferingType::Trial,
        ]
    }
}

impl fmt::Display for OfferingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OfferingType::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Invalid {
                message: format!("unknown offering type: {s}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_wire_names() {
        assert_eq!("ACTIVE".parse::<Status>().ok(), Some(Status::Active));
        assert_eq!("deprecated".parse::<Status>().ok(), Some(Status::Deprecated));
        assert!("ARCHIVED".parse::<Status>().is_err());
    }

    #[test]
    fn test_offering_type_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&OfferingType::OneTime).expect("serialize");
        assert_eq!(json, "\"ONE_TIME\"");
        assert_eq!(OfferingType::OneTime.to_string(), "ONE_TIME");
    }
}
