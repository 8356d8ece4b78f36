//! Normalization of collection responses.
//!
//! The backend returns collections either as a bare array or as an object holding the array
//! under a per-resource key, e.g. `{"status": "ok", "institutions": [...]}`. Every collection
//! read goes through [`parse_collection`] instead of sniffing the shape at the call site.

use serde_json::Value;

use crate::{api::error::ApiError, model::Resource};

/// Decode a collection response body into `R` entries.
///
/// # Returns
/// - `Ok(Vec<R>)` - The body was a bare array, or an object with an array under `R::ENVELOPE`
/// - `Err(ApiError::UnexpectedShape)` - Any other shape
/// - `Err(ApiError::Decode)` - The array held entries that do not decode into `R`
pub fn parse_collection<R: Resource>(value: Value) -> Result<Vec<R>, ApiError> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove(R::ENVELOPE) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ApiError::UnexpectedShape { resource: R::NAME }),
        },
        _ => return Err(ApiError::UnexpectedShape { resource: R::NAME }),
    };

    entries
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<R>, _>>()
        .map_err(|e| ApiError::Decode {
            resource: R::NAME,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_collection;
    use crate::{api::error::ApiError, model::institution::InstitutionDto};

    #[test]
    fn accepts_bare_array() {
        let institutions =
            parse_collection::<InstitutionDto>(json!([{"id": "1", "name": "Acme U"}])).unwrap();

        assert_eq!(institutions.len(), 1);
        assert_eq!(institutions[0].name, "Acme U");
    }

    #[test]
    fn accepts_enveloped_array() {
        let institutions = parse_collection::<InstitutionDto>(json!({
            "status": "ok",
            "institutions": [
                {"id": "1", "name": "Acme U", "country": "US"},
                {"id": "2", "name": "Globex Institute"}
            ]
        }))
        .unwrap();

        assert_eq!(institutions.len(), 2);
        assert_eq!(institutions[0].country.as_deref(), Some("US"));
    }

    #[test]
    fn rejects_object_without_envelope_key() {
        let result = parse_collection::<InstitutionDto>(json!({"status": "ok", "items": []}));

        assert_eq!(
            result,
            Err(ApiError::UnexpectedShape {
                resource: "institutions"
            })
        );
    }

    #[test]
    fn rejects_scalars_and_non_array_envelopes() {
        assert!(matches!(
            parse_collection::<InstitutionDto>(json!("ok")),
            Err(ApiError::UnexpectedShape { .. })
        ));
        assert!(matches!(
            parse_collection::<InstitutionDto>(json!({"institutions": {"id": "1"}})),
            Err(ApiError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn reports_entries_that_do_not_decode() {
        let result = parse_collection::<InstitutionDto>(json!([{"id": "1"}]));

        assert!(matches!(
            result,
            Err(ApiError::Decode {
                resource: "institutions",
                ..
            })
        ));
    }
}
