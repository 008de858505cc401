use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// ABO/Rh blood group. Discriminants are the stable ids seeded into
/// `blood_groups`, so the enum decodes straight from `donors.blood_group_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, sqlx::Type, ToSchema)]
#[repr(i32)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive = 1,
    #[serde(rename = "A-")]
    ANegative = 2,
    #[serde(rename = "B+")]
    BPositive = 3,
    #[serde(rename = "B-")]
    BNegative = 4,
    #[serde(rename = "AB+")]
    AbPositive = 5,
    #[serde(rename = "AB-")]
    AbNegative = 6,
    #[serde(rename = "O+")]
    OPositive = 7,
    #[serde(rename = "O-")]
    ONegative = 8,
}

impl BloodGroup {
    /// All groups in id order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn code(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a code ("O+"), a numeric id ("7"), or a code whose "+" was turned
/// into a space by form/query decoding ("O ").
impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed_start = raw.trim_start();
        let normalized = match trimmed_start.strip_suffix(' ') {
            Some(stem)
                if !stem.trim().is_empty()
                    && !stem.ends_with(['+', '-'])
                    && !stem.trim().chars().all(|c| c.is_ascii_digit()) =>
            {
                format!("{}+", stem.trim_end())
            }
            _ => trimmed_start.trim_end().to_string(),
        };

        if let Ok(id) = normalized.parse::<i32>() {
            return Self::from_id(id).ok_or_else(|| format!("Unknown blood group id: {}", id));
        }

        Self::from_code(&normalized).ok_or_else(|| format!("Unknown blood group: {}", raw))
    }
}

impl<'de> Deserialize<'de> for BloodGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(i32),
            Code(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => BloodGroup::from_id(id)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown blood group id: {}", id))),
            Raw::Code(code) => code.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        let ids: Vec<i32> = BloodGroup::ALL.iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(BloodGroup::from_id(7), Some(BloodGroup::OPositive));
        assert_eq!(BloodGroup::from_id(9), None);
    }

    #[test]
    fn test_parse_accepts_code_id_and_query_decoded_plus() {
        assert_eq!("O+".parse::<BloodGroup>(), Ok(BloodGroup::OPositive));
        assert_eq!("ab-".parse::<BloodGroup>(), Ok(BloodGroup::AbNegative));
        assert_eq!("7".parse::<BloodGroup>(), Ok(BloodGroup::OPositive));
        assert_eq!("O ".parse::<BloodGroup>(), Ok(BloodGroup::OPositive));
        assert_eq!("AB ".parse::<BloodGroup>(), Ok(BloodGroup::AbPositive));
        assert_eq!("O-".parse::<BloodGroup>(), Ok(BloodGroup::ONegative));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("C+".parse::<BloodGroup>().is_err());
        assert!("0".parse::<BloodGroup>().is_err());
        assert!("".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");

        let from_code: BloodGroup = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(from_code, BloodGroup::BPositive);

        let from_id: BloodGroup = serde_json::from_str("8").unwrap();
        assert_eq!(from_id, BloodGroup::ONegative);

        assert!(serde_json::from_str::<BloodGroup>("\"Z\"").is_err());
    }
}
