use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Accepts an id as a JSON number, a numeric string, an empty string or
/// `null`. Admin forms submit ids as strings; empty means "no link".
pub fn id_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("invalid id: {s:?}")))
            }
        }
    }
}

/// Patch variant of [`id_or_string`]: an absent field (via `serde(default)`)
/// keeps the stored value, while an explicit `null` or `""` clears it.
pub fn id_patch<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    id_or_string(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::id_or_string")]
        id: Option<i64>,
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::id_patch")]
        id: Option<Option<i64>>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Payload = serde_json::from_str(r#"{"id": 2}"#).expect("number");
        assert_eq!(p.id, Some(2));

        let p: Payload = serde_json::from_str(r#"{"id": "2"}"#).expect("string");
        assert_eq!(p.id, Some(2));
    }

    #[test]
    fn empty_and_null_mean_no_id() {
        let p: Payload = serde_json::from_str(r#"{"id": ""}"#).expect("empty");
        assert_eq!(p.id, None);

        let p: Payload = serde_json::from_str(r#"{"id": null}"#).expect("null");
        assert_eq!(p.id, None);

        let p: Payload = serde_json::from_str(r#"{}"#).expect("absent");
        assert_eq!(p.id, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Payload>(r#"{"id": "abc"}"#).is_err());
    }

    #[test]
    fn patch_distinguishes_absent_from_cleared() {
        let p: Patch = serde_json::from_str(r#"{}"#).expect("absent");
        assert_eq!(p.id, None);

        let p: Patch = serde_json::from_str(r#"{"id": null}"#).expect("cleared");
        assert_eq!(p.id, Some(None));

        let p: Patch = serde_json::from_str(r#"{"id": "7"}"#).expect("set");
        assert_eq!(p.id, Some(Some(7)));
    }
}
