use derive_more::{Display, From, FromStr};
use getset::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, PartialEq, Eq, Debug, Display, From, FromStr, Serialize, Deserialize)]
pub struct MemberName(String);

impl MemberName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One legislator, as serialized into the output array.
/// Every field is a string; absent details are empty strings, not omitted keys.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct MemberRecord {
    name: MemberName,
    title: String,
    profile: String,
    /// Duplicate of `profile`, kept for consumers expecting a `url` key.
    url: String,
    /// Placeholder, always empty.
    #[builder(default)]
    dob: String,
    #[serde(rename = "type")]
    member_type: String,
    country: String,
    party: String,
    otherinfo: String,
}

impl MemberRecord {
    /// Profile URL when present, else the member name.
    pub fn dedupe_key(&self) -> &str {
        if self.profile.is_empty() {
            self.name.as_str()
        } else {
            &self.profile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberName, MemberRecord};

    fn record(name: &str, profile: &str) -> MemberRecord {
        MemberRecord::builder()
            .name(MemberName::from(name.to_owned()))
            .title("Senator".to_owned())
            .profile(profile.to_owned())
            .url(profile.to_owned())
            .member_type("current".to_owned())
            .country("Alaska".to_owned())
            .party(String::new())
            .otherinfo(String::new())
            .build()
    }

    #[test]
    fn dedupe_key_prefers_profile_url() {
        let record = record("Jane Doe", "https://akleg.gov/senator/jane-doe");
        assert_eq!(record.dedupe_key(), "https://akleg.gov/senator/jane-doe");
    }

    #[test]
    fn dedupe_key_falls_back_to_name() {
        let record = record("Jane Doe", "");
        assert_eq!(record.dedupe_key(), "Jane Doe");
    }

    #[test]
    fn serializes_with_the_expected_key_set() {
        let value = serde_json::to_value(record("Jane Doe", "")).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["country", "dob", "name", "otherinfo", "party", "profile", "title", "type", "url"]
        );
        assert_eq!(object["name"], "Jane Doe");
        assert_eq!(object["type"], "current");
        assert_eq!(object["dob"], "");
    }
}
