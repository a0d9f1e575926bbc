use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Request DTO for `/suggest`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestRequestDto {
    /// Free-text activity, e.g. "weekend trip" or "help me sleep"
    #[validate(
        length(min = 1, message = "Activity must not be empty"),
        custom(function = "not_blank")
    )]
    #[schema(example = "weekend trip")]
    pub activity: String,

    /// Budget as text or number; empty means no budget
    #[serde(deserialize_with = "budget_from_any")]
    #[schema(value_type = String, example = "300 EUR")]
    pub budget: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    #[serde(default)]
    #[schema(example = 52.16)]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    #[serde(default)]
    #[schema(example = 4.49)]
    pub lng: Option<f64>,

    #[serde(default)]
    #[schema(example = "Leiden")]
    pub town: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Activity must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Accept the budget as a string, a number or null
fn budget_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "budget must be a string or a number, got {}",
            other
        ))),
    }
}

/// Where the user is, as far as the request tells
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Sentence placed in the prompt
    pub clause: String,
    pub known: bool,
}

impl SuggestRequestDto {
    pub fn has_budget(&self) -> bool {
        !self.budget.is_empty()
    }

    /// Coordinates count only when both are present
    fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }

    fn town(&self) -> Option<&str> {
        self.town.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn location(&self) -> Location {
        let clause = match (self.town(), self.coordinates()) {
            (Some(town), Some((lat, lng))) => format!(
                "The user is in {} (latitude {:.4}, longitude {:.4}).",
                town, lat, lng
            ),
            (Some(town), None) => format!("The user is in {}.", town),
            (None, Some((lat, lng))) => {
                format!("The user is at latitude {:.4}, longitude {:.4}.", lat, lng)
            }
            (None, None) => {
                return Location {
                    clause: "The user's location is unknown, so keep every suggestion location-independent."
                        .to_string(),
                    known: false,
                }
            }
        };

        Location {
            clause,
            known: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: Value) -> SuggestRequestDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_budget_accepts_string_number_and_null() {
        assert_eq!(dto(json!({"activity": "a", "budget": " 300 EUR "})).budget, "300 EUR");
        assert_eq!(dto(json!({"activity": "a", "budget": 250})).budget, "250");
        assert_eq!(dto(json!({"activity": "a", "budget": 12.5})).budget, "12.5");
        assert_eq!(dto(json!({"activity": "a", "budget": null})).budget, "");
        assert!(!dto(json!({"activity": "a", "budget": "   "})).has_budget());
    }

    #[test]
    fn test_budget_is_required_and_scalar() {
        assert!(serde_json::from_value::<SuggestRequestDto>(json!({"activity": "a"})).is_err());
        assert!(
            serde_json::from_value::<SuggestRequestDto>(json!({"activity": "a", "budget": [1]}))
                .is_err()
        );
    }

    #[test]
    fn test_validation() {
        assert!(dto(json!({"activity": "sleep", "budget": ""})).validate().is_ok());
        assert!(dto(json!({"activity": "", "budget": ""})).validate().is_err());
        assert!(dto(json!({"activity": "   ", "budget": ""})).validate().is_err());
        assert!(dto(json!({"activity": "a", "budget": "", "lat": 91.0}))
            .validate()
            .is_err());
        assert!(dto(json!({"activity": "a", "budget": "", "lng": -180.5}))
            .validate()
            .is_err());
    }

    #[test]
    fn test_long_activity_and_town_are_accepted() {
        let long = dto(json!({
            "activity": "a".repeat(300),
            "budget": "",
            "town": "Llanfairpwllgwyngyll ".repeat(10),
        }));

        assert!(long.validate().is_ok());
    }

    #[test]
    fn test_location_clause() {
        let both = dto(json!({"activity": "a", "budget": "", "town": "Leiden", "lat": 52.16, "lng": 4.49}));
        assert_eq!(
            both.location(),
            Location {
                clause: "The user is in Leiden (latitude 52.1600, longitude 4.4900).".to_string(),
                known: true,
            }
        );

        let town = dto(json!({"activity": "a", "budget": "", "town": " Utrecht "}));
        assert_eq!(town.location().clause, "The user is in Utrecht.");

        let coords = dto(json!({"activity": "a", "budget": "", "lat": -33.9, "lng": 18.4}));
        assert_eq!(
            coords.location().clause,
            "The user is at latitude -33.9000, longitude 18.4000."
        );
        assert!(coords.location().known);
    }

    #[test]
    fn test_location_unknown() {
        // a lone coordinate or blank town does not locate the user
        let partial = dto(json!({"activity": "a", "budget": "", "lat": 10.0, "town": "  "}));
        let location = partial.location();

        assert!(!location.known);
        assert!(location.clause.contains("location is unknown"));
    }
}
