use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A schedulable gathering with a location and three attendee lists.
///
/// Every field defaults when absent from the incoming JSON and unknown
/// fields are ignored, so clients may send partial payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    #[serde(serialize_with = "rfc3339::serialize")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(serialize_with = "rfc3339::serialize")]
    pub end_time: Option<DateTime<FixedOffset>>,
    pub location: Location,
    pub capacity: u32,
    pub invited: Vec<Person>,
    pub attending: Vec<Person>,
    pub declined: Vec<Person>,
    pub on_going: bool,
    pub soft_deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub address_one: String,
    pub address_two: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

/// Timestamps keep the client's offset; a zero offset is written as `Z`.
mod rfc3339 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::Serializer;

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => {
                serializer.serialize_some(&timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }
}
