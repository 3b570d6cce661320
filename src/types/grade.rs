use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Grade points as awarded by KNEC: `A` = 12 down to `E` = 1. A subject the
/// student did not sit counts 0.
pub type Points = u8;

pub const MAX_POINTS: Points = 12;

/// The twelve KCSE letter grades, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    E,
}

impl Grade {
    pub const ALL: [Grade; 12] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::DMinus,
        Grade::E,
    ];

    pub fn points(self) -> Points {
        match self {
            Grade::A => 12,
            Grade::AMinus => 11,
            Grade::BPlus => 10,
            Grade::B => 9,
            Grade::BMinus => 8,
            Grade::CPlus => 7,
            Grade::C => 6,
            Grade::CMinus => 5,
            Grade::DPlus => 4,
            Grade::D => 3,
            Grade::DMinus => 2,
            Grade::E => 1,
        }
    }

    /// Maps a point value back onto the scale. Anything at or above 12 is an
    /// `A`, anything at or below 1 is an `E`.
    pub fn from_points(points: Points) -> Grade {
        match points {
            12..=u8::MAX => Grade::A,
            11 => Grade::AMinus,
            10 => Grade::BPlus,
            9 => Grade::B,
            8 => Grade::BMinus,
            7 => Grade::CPlus,
            6 => Grade::C,
            5 => Grade::CMinus,
            4 => Grade::DPlus,
            3 => Grade::D,
            2 => Grade::DMinus,
            _ => Grade::E,
        }
    }

    /// Mean grade for an aggregate over seven subjects. The mean is rounded
    /// half-up before bucketing, so 84 is an `A` and 80 (11.43) an `A-`.
    pub fn mean_of_seven(total_points: u32) -> Grade {
        let rounded = (total_points as f64 / 7.0).round();
        Grade::from_points(rounded.clamp(0.0, MAX_POINTS as f64) as Points)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGradeError(pub String);

impl fmt::Display for ParseGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a KCSE grade: {:?}", self.0)
    }
}

impl std::error::Error for ParseGradeError {}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_uppercase();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str() == normalized)
            .ok_or_else(|| ParseGradeError(raw.to_string()))
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn grade_points_follow_the_knec_table() {
        assert_eq!(Grade::A.points(), 12);
        assert_eq!(Grade::AMinus.points(), 11);
        assert_eq!(Grade::B.points(), 9);
        assert_eq!(Grade::CPlus.points(), 7);
        assert_eq!(Grade::E.points(), 1);
    }

    #[test]
    fn no_two_grades_share_a_point_value() {
        let distinct = Grade::ALL
            .iter()
            .map(|grade| grade.points())
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), Grade::ALL.len());
        for grade in Grade::ALL {
            assert_eq!(Grade::from_points(grade.points()), grade);
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(" a- ".parse::<Grade>(), Ok(Grade::AMinus));
        assert_eq!("b+".parse::<Grade>(), Ok(Grade::BPlus));
        assert!("F".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
        assert!("A+".parse::<Grade>().is_err());
    }

    #[test]
    fn mean_of_seven_buckets_monotonically() {
        assert_eq!(Grade::mean_of_seven(84), Grade::A);
        assert_eq!(Grade::mean_of_seven(81), Grade::A);
        assert_eq!(Grade::mean_of_seven(80), Grade::AMinus);
        assert_eq!(Grade::mean_of_seven(49), Grade::CPlus);
        assert_eq!(Grade::mean_of_seven(7), Grade::E);
        assert_eq!(Grade::mean_of_seven(0), Grade::E);

        let mut previous = Grade::mean_of_seven(0);
        for total in 1..=84 {
            let current = Grade::mean_of_seven(total);
            assert!(current.points() >= previous.points());
            previous = current;
        }
    }

    #[test]
    fn grades_serialize_as_letters() {
        let rendered = serde_json::to_string(&Grade::BMinus).expect("grade should serialize");
        assert_eq!(rendered, "\"B-\"");
        let parsed: Grade = serde_json::from_str("\"c-\"").expect("grade should parse");
        assert_eq!(parsed, Grade::CMinus);
    }
}
