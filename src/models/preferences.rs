use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Local,
    Tourist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Dietary {
    Halal,
    #[default]
    NoPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    PublicTransport,
    Taxi,
    #[default]
    OwnVehicle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    WheelchairFriendly,
    #[default]
    NoPreference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub name: String,
    pub user_type: UserType,
    pub dietary: Dietary,
    pub transport: Transport,
    pub accessibility: Accessibility,
}

impl UserPreferences {
    /// Value the backend expects for its `dietary` query parameter.
    pub fn dietary_param(&self) -> &'static str {
        match self.dietary {
            Dietary::Halal => "Halal only",
            Dietary::NoPreference => "No preference",
        }
    }

    pub fn accessibility_param(&self) -> &'static str {
        match self.accessibility {
            Accessibility::WheelchairFriendly => "Wheelchair-friendly",
            Accessibility::NoPreference => "No preference",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format_matches_stored_blob() {
        let prefs = UserPreferences {
            name: "Ann".to_string(),
            user_type: UserType::Tourist,
            dietary: Dietary::Halal,
            transport: Transport::PublicTransport,
            accessibility: Accessibility::WheelchairFriendly,
        };

        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ann",
                "userType": "tourist",
                "dietary": "halal",
                "transport": "public-transport",
                "accessibility": "wheelchair-friendly"
            })
        );
    }

    #[test]
    fn test_backend_params() {
        let prefs = UserPreferences {
            name: "Ann".to_string(),
            user_type: UserType::Local,
            dietary: Dietary::NoPreference,
            transport: Transport::Taxi,
            accessibility: Accessibility::WheelchairFriendly,
        };
        assert_eq!(prefs.dietary_param(), "No preference");
        assert_eq!(prefs.accessibility_param(), "Wheelchair-friendly");
    }
}
