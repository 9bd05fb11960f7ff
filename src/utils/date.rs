use chrono::{Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const DAY_FMT: &str = "%Y-%m-%d";

// today returns the local calendar date used to stamp checkouts and returns
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn display_date(date: Option<NaiveDate>, fmt: &str) -> String {
    match date {
        Some(date) => format!("{}", date.format(fmt)),
        None => "-".to_string(),
    }
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", time.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

pub mod opt_day_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DAY_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        date.map(|d| format!("{}", d.format(DAY_FMT))).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_date {
            Some(s) => NaiveDate::parse_from_str(&s, DAY_FMT).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{display_date, opt_day_serializer, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
        #[serde(with = "opt_day_serializer")]
        on: Option<NaiveDate>,
    }

    #[test]
    fn test_should_serialize_dates() {
        let on = NaiveDate::from_ymd_opt(2024, 3, 9);
        let at = on.and_then(|d| d.and_hms_opt(4, 40, 35)).expect("valid time");
        let json = serde_json::to_string(&Stamped { at, on }).expect("should serialize");
        assert_eq!(r#"{"at":"2024-03-09T04:40:35","on":"2024-03-09"}"#, json);
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("should parse");
        assert_eq!(Stamped { at, on }, parsed);
    }

    #[test]
    fn test_should_serialize_missing_day_as_null() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9).and_then(|d| d.and_hms_opt(0, 0, 0)).expect("valid time");
        let json = serde_json::to_string(&Stamped { at, on: None }).expect("should serialize");
        assert!(json.ends_with(r#""on":null}"#));
    }

    #[test]
    fn test_should_display_date() {
        let on = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!("03/09/2024", display_date(on, "%m/%d/%Y"));
        assert_eq!("-", display_date(None, "%m/%d/%Y"));
    }
}
