//! Lenient serde helpers for values the backend sends either as numbers or strings

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

/// Price as `f64` from `12.5` or `"12.5"`
pub mod number_or_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrFloat::deserialize(deserializer)? {
            StringOrFloat::String(s) => s.trim().parse::<f64>().map_err(de::Error::custom),
            StringOrFloat::Float(f) => Ok(f),
        }
    }
}

/// Display text from `"1.5"` or `1.5`
pub mod text_or_number {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrFloat::deserialize(deserializer)? {
            StringOrFloat::String(s) => Ok(s),
            StringOrFloat::Float(f) => Ok(f.to_string()),
        }
    }
}

/// `Option<NaiveDate>` as `YYYY-MM-DD`
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(with = "super::number_or_string")]
        price: f64,
        #[serde(with = "super::text_or_number")]
        weight: String,
    }

    #[test]
    fn test_accepts_both_representations() {
        let a: Sample = serde_json::from_str(r#"{"price": "457.24", "weight": 2.5}"#).unwrap();
        assert_eq!(a.price, 457.24);
        assert_eq!(a.weight, "2.5");

        let b: Sample = serde_json::from_str(r#"{"price": 812, "weight": "1.200"}"#).unwrap();
        assert_eq!(b.price, 812.0);
        assert_eq!(b.weight, "1.200");
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        let res = serde_json::from_str::<Sample>(r#"{"price": "abc", "weight": "1"}"#);
        assert!(res.is_err());
    }
}
