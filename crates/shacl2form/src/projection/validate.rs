//! Field-level checks run before an edited property is submitted.

use super::entry::PropertyEntry;
use crate::error::ValidationError;
use crate::model::ontology::standard;

/// Check a property's values against its shape constraints.
///
/// An empty result means the values are acceptable. Only the first value is
/// checked against `sh:maxLength`, and only for string properties.
pub fn validate_property_values(property: &PropertyEntry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(max_length) = property.max_length.filter(|n| *n > 0) {
        if property.datatype.as_deref() == Some(standard::XSD_STRING) {
            let first = property.values.first().and_then(|v| {
                v.value
                    .as_ref()
                    .and_then(|value| value.as_str())
                    .filter(|s| !s.is_empty())
                    .or(v.id.as_deref())
            });
            if let Some(first) = first {
                let actual = first.chars().count();
                if actual as u64 > max_length {
                    errors.push(ValidationError::MaxLengthExceeded { max_length, actual });
                }
            }
        }
    }

    if let Some(min_count) = property.min_values_count.filter(|n| *n > 0) {
        let actual = property.values.len();
        if (actual as u64) < min_count {
            errors.push(ValidationError::MinCountNotMet { min_count, actual });
        }
    }

    errors
}
