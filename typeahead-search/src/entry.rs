use std::str::FromStr;

use crate::error::Error;

/// The closed set of record kinds a corpus can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryType {
    Question,
    User,
    Topic,
    Board,
}

impl FromStr for EntryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(EntryType::Question),
            "user" => Ok(EntryType::User),
            "topic" => Ok(EntryType::Topic),
            "board" => Ok(EntryType::Board),
            other => Err(Error::UnknownEntryType(other.to_string())),
        }
    }
}

/// A boost multiplier target: either every entry of a type, or one entry id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoostKey {
    Type(EntryType),
    Id(String),
}

/// One indexed record: its type, id, base score, searchable data, and the
/// insertion sequence used to break ties between equally-ranked results.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub kind: EntryType,
    pub id: String,
    pub score: f64,
    pub data: String,
    pub seq: u64,
}
