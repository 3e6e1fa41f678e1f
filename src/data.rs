use crate::time::TimeRange;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ranges per Sunday-first storage key (`0 = Sunday .. 6 = Saturday`).
/// A missing key and an empty list both mean "no availability".
pub type DayAvailability = BTreeMap<u8, Vec<TimeRange>>;

pub const DEFAULT_GRANULARITY_MINUTES: u16 = 30;
pub const DEFAULT_SESSION_MINUTES: u16 = 60;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PreferredTimes {
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
}

/// A learner's weekly availability as read from the backend.
/// Only `availability` takes part in grid conversion; the rest passes through.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct WeeklyAvailability {
    #[cfg_attr(feature = "serde", serde(with = "storage_keys"))]
    pub availability: DayAvailability,
    pub granularity_minutes: u16,
    pub default_session_minutes: u16,
    pub preferred_times: PreferredTimes,
}

impl Default for WeeklyAvailability {
    fn default() -> WeeklyAvailability {
        WeeklyAvailability {
            availability: DayAvailability::new(),
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            default_session_minutes: DEFAULT_SESSION_MINUTES,
            preferred_times: PreferredTimes::default(),
        }
    }
}

impl WeeklyAvailability {
    pub fn new(availability: DayAvailability) -> Self {
        WeeklyAvailability {
            availability,
            ..Default::default()
        }
    }

    /// Ranges stored for `storage_key`, empty when the day is absent
    pub fn ranges_for(&self, storage_key: u8) -> &[TimeRange] {
        self.availability
            .get(&storage_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Partial write accepted by the backend's availability update.
/// Unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct WeeklyAvailabilityUpdate {
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", with = "storage_keys::option")
    )]
    pub availability: Option<DayAvailability>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub granularity_minutes: Option<u16>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default_session_minutes: Option<u16>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub preferred_times: Option<PreferredTimes>,
}

impl WeeklyAvailabilityUpdate {
    pub fn is_empty(&self) -> bool {
        self == &WeeklyAvailabilityUpdate::default()
    }

    /// Applies the set fields onto `weekly`
    pub fn apply_to(self, weekly: &mut WeeklyAvailability) {
        if let Some(availability) = self.availability {
            weekly.availability = availability;
        }
        if let Some(granularity) = self.granularity_minutes {
            weekly.granularity_minutes = granularity;
        }
        if let Some(session) = self.default_session_minutes {
            weekly.default_session_minutes = session;
        }
        if let Some(preferred) = self.preferred_times {
            weekly.preferred_times = preferred;
        }
    }
}

/// Storage keys travel as object keys (`"0"`..`"6"`). Keys that are not
/// small integers are dropped on read, which leaves that day empty.
#[cfg(feature = "serde")]
pub mod storage_keys {
    use super::DayAvailability;
    use crate::time::TimeRange;
    use log::debug;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(availability: &DayAvailability, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(availability.iter().map(|(key, ranges)| (key.to_string(), ranges)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DayAvailability, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<TimeRange>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, ranges)| match key.trim().parse::<u8>() {
                Ok(key) => Some((key, ranges)),
                Err(_) => {
                    debug!("ignoring availability for unknown day key {:?}", key);
                    None
                }
            })
            .collect())
    }

    pub mod option {
        use super::DayAvailability;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(
            availability: &Option<DayAvailability>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match availability {
                Some(availability) => super::serialize(availability, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DayAvailability>, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            struct Keyed(#[serde(with = "super")] DayAvailability);

            Ok(Option::<Keyed>::deserialize(deserializer)?.map(|keyed| keyed.0))
        }
    }
}
