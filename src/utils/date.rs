use chrono::{Local, NaiveDateTime, TimeZone, Utc};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// same layout as C asctime, e.g. "Wed Jun 30 21:49:08 1993"
pub const DISPLAY_FMT: &str = "%a %b %e %H:%M:%S %Y";

// renders a UTC timestamp in the local timezone for the console
pub fn to_local_display(time: NaiveDateTime) -> String {
    Utc.from_utc_datetime(&time).with_timezone(&Local).format(DISPLAY_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.format(DATE_FMT).to_string()
    }
}
