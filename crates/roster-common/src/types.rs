//! Domain primitive types used across the roster workspace.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a student record.
///
/// The key is opaque to the client; it is only ever echoed back to the
/// service when addressing a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(u64);

impl StudentId {
    /// Creates a student ID from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value of the ID.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student record as delivered by the REST service.
///
/// All address fields are flat strings. The service is loose about numeric
/// fields: `zipcode` and `number` may arrive as JSON strings or numbers, so
/// both are deserialized through [`string_or_number`]. Records are fetched
/// fresh on every screen activation and never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned record key.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Profile image URI, if one was uploaded.
    #[serde(rename = "profileImg", default)]
    pub profile_img: Option<String>,
    /// Postal code.
    #[serde(deserialize_with = "string_or_number")]
    pub zipcode: String,
    /// Federal state / region code.
    pub state: String,
    /// City name.
    pub city: String,
    /// Neighborhood name.
    pub neighborhood: String,
    /// Street name.
    pub street: String,
    /// Street number.
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    /// Free-text address complement.
    #[serde(default)]
    pub complement: Option<String>,
}

impl Student {
    /// Returns the complement, or the empty string when absent.
    #[must_use]
    pub fn complement_or_empty(&self) -> &str {
        self.complement.as_deref().unwrap_or("")
    }

    /// Returns the profile image URI, treating an empty string as absent.
    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_img.as_deref().filter(|uri| !uri.is_empty())
    }
}

/// Deserializes a field that may be either a JSON string or a JSON number
/// into its string form. String input is passed through unchanged so that
/// leading zeros (common in postal codes) survive.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 42,
            "name": "Ana",
            "profileImg": "https://img.example.com/ana.png",
            "zipcode": "01001000",
            "state": "SP",
            "city": "Sao Paulo",
            "neighborhood": "Se",
            "street": "Praca da Se",
            "number": "100",
            "complement": "apto 12"
        }"#
    }

    #[test]
    fn deserializes_full_record() {
        let student: Student = serde_json::from_str(sample_json()).expect("valid payload");
        assert_eq!(student.id, StudentId::new(42));
        assert_eq!(student.name, "Ana");
        assert_eq!(student.zipcode, "01001000");
        assert_eq!(student.complement_or_empty(), "apto 12");
        assert_eq!(
            student.profile_image(),
            Some("https://img.example.com/ana.png")
        );
    }

    #[test]
    fn accepts_numeric_zipcode_and_number() {
        let student: Student = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Bruno",
                "zipcode": 4547001,
                "state": "SP",
                "city": "Sao Paulo",
                "neighborhood": "Itaim",
                "street": "Rua X",
                "number": 55
            }"#,
        )
        .expect("numeric fields accepted");
        assert_eq!(student.zipcode, "4547001");
        assert_eq!(student.number, "55");
    }

    #[test]
    fn string_zipcode_keeps_leading_zeros() {
        let student: Student = serde_json::from_str(sample_json()).expect("valid payload");
        assert!(student.zipcode.starts_with('0'));
    }

    #[test]
    fn missing_complement_renders_empty() {
        let student: Student = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Carla",
                "zipcode": "22041011",
                "state": "RJ",
                "city": "Rio de Janeiro",
                "neighborhood": "Copacabana",
                "street": "Av. Atlantica",
                "number": "500"
            }"#,
        )
        .expect("complement optional");
        assert_eq!(student.complement, None);
        assert_eq!(student.complement_or_empty(), "");
    }

    #[test]
    fn empty_profile_image_counts_as_absent() {
        let student: Student = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Davi",
                "profileImg": "",
                "zipcode": "1",
                "state": "MG",
                "city": "Belo Horizonte",
                "neighborhood": "Centro",
                "street": "Rua A",
                "number": "1"
            }"#,
        )
        .expect("valid payload");
        assert_eq!(student.profile_image(), None);
    }
}
