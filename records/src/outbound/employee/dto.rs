//! DTOs for decoding `employee` resource responses.
//!
//! The resource answers either with a `{"data": ...}` envelope or with the
//! bare payload, encodes ids as strings or integers, and may omit fields it
//! did not change. These DTOs absorb that looseness before mapping into
//! domain records in one pass.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{Record, RecordId};

/// Decode `body`, unwrapping a top-level `data` member when present.
///
/// Errors carry the underlying serde cause for whichever shape was tried.
pub(super) fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    let mut value: Value = serde_json::from_slice(body)?;
    let payload = match value.as_object_mut().and_then(|object| object.remove("data")) {
        Some(data) => data,
        None => value,
    };
    serde_json::from_value(payload)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum WireIdDto {
    Text(String),
    Number(i64),
}

impl From<WireIdDto> for RecordId {
    fn from(value: WireIdDto) -> Self {
        match value {
            WireIdDto::Text(text) => Self::new(text),
            WireIdDto::Number(number) => Self::new(number.to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecordDto {
    #[serde(default)]
    pub(super) id: Option<WireIdDto>,
    #[serde(default, rename = "_id")]
    pub(super) object_id: Option<WireIdDto>,
    #[serde(default)]
    pub(super) first_name: Option<String>,
    #[serde(default)]
    pub(super) last_name: Option<String>,
    #[serde(default)]
    pub(super) phone: Option<String>,
    #[serde(default)]
    pub(super) email: Option<String>,
    #[serde(default)]
    pub(super) address: Option<String>,
    #[serde(default)]
    pub(super) state: Option<String>,
    #[serde(default)]
    pub(super) district: Option<String>,
    #[serde(default)]
    pub(super) city: Option<String>,
    #[serde(default)]
    pub(super) zip_code: Option<String>,
}

impl RecordDto {
    /// Map into a record, taking fields the answer omitted from `fallback`.
    pub(super) fn into_domain(self, fallback: &Record) -> Record {
        let pick = |value: Option<String>, field: &String| value.unwrap_or_else(|| field.clone());
        Record {
            id: self
                .id
                .or(self.object_id)
                .map(RecordId::from)
                .or_else(|| fallback.id.clone()),
            first_name: pick(self.first_name, &fallback.first_name),
            last_name: pick(self.last_name, &fallback.last_name),
            phone: pick(self.phone, &fallback.phone),
            email: pick(self.email, &fallback.email),
            address: pick(self.address, &fallback.address),
            state: pick(self.state, &fallback.state),
            district: pick(self.district, &fallback.district),
            city: pick(self.city, &fallback.city),
            zip_code: pick(self.zip_code, &fallback.zip_code),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) message: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Covers envelope and id decoding.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!({"data": [{"id": 1, "firstName": "Ann"}]}))]
    #[case(json!([{"id": "1", "firstName": "Ann"}]))]
    #[case(json!({"message": "ok", "data": [{"_id": 1, "firstName": "Ann"}]}))]
    fn list_accepts_wrapped_and_bare_arrays(#[case] body: serde_json::Value) {
        let decoded: Vec<RecordDto> =
            decode_envelope(body.to_string().as_bytes()).expect("list decodes");
        let records: Vec<_> = decoded
            .into_iter()
            .map(|dto| dto.into_domain(&Record::empty()))
            .collect();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records.first().and_then(|record| record.id.clone()),
            Some(RecordId::new("1"))
        );
        assert_eq!(
            records.first().map(|record| record.first_name.as_str()),
            Some("Ann")
        );
    }

    #[rstest]
    #[case(json!({"_id": "abc", "id": "abc", "firstName": "Ann"}), "abc")]
    #[case(json!({"id": 5, "_id": "mongo-5", "firstName": "Ann"}), "5")]
    #[case(json!({"_id": "mongo-5", "firstName": "Ann"}), "mongo-5")]
    fn plain_id_wins_over_object_id(#[case] body: serde_json::Value, #[case] expected: &str) {
        let wrapped = json!({ "data": [body] }).to_string();
        let decoded: Vec<RecordDto> = decode_envelope(wrapped.as_bytes()).expect("list decodes");
        let ids: Vec<_> = decoded
            .into_iter()
            .map(|dto| dto.into_domain(&Record::empty()).id)
            .collect();
        assert_eq!(ids, [Some(RecordId::new(expected))]);
    }

    #[test]
    fn decode_errors_keep_the_underlying_cause() {
        let error = decode_envelope::<Vec<RecordDto>>(br#"{"data": [{"id": true}]}"#)
            .expect_err("boolean id is rejected");
        let message = error.to_string();
        assert!(message.contains("WireIdDto"), "unexpected cause: {message}");

        let error = decode_envelope::<Vec<RecordDto>>(br#"{"data": {"id": 1}}"#)
            .expect_err("object is not a list");
        assert!(error.to_string().contains("invalid type: map, expected a sequence"));
    }

    #[test]
    fn missing_fields_fall_back_to_submitted_values() {
        let fallback = Record {
            first_name: "Ann".to_owned(),
            city: "Austin".to_owned(),
            ..Record::empty()
        };
        let dto: RecordDto = serde_json::from_value(json!({"id": 9, "city": "Dallas"}))
            .expect("record decodes");

        let record = dto.into_domain(&fallback);

        assert_eq!(record.id, Some(RecordId::new("9")));
        assert_eq!(record.first_name, "Ann");
        assert_eq!(record.city, "Dallas");
    }

    #[test]
    fn null_fields_fall_back_as_well() {
        let fallback = Record {
            email: "ann@example.com".to_owned(),
            ..Record::empty()
        };
        let dto: RecordDto =
            serde_json::from_value(json!({"email": null})).expect("record decodes");
        assert_eq!(dto.into_domain(&fallback).email, "ann@example.com");
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBodyDto = serde_json::from_value(json!({"error": "x"})).expect("decodes");
        assert_eq!(body.message, None);
    }
}
