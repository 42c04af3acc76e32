use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::InvalidValueError;

/// Statistic applied to the metric of a customized metric specification.
///
/// This is a closed set: parsing anything other than the five exact labels
/// fails, matching what the service itself accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricStatistic {
    Average,
    Minimum,
    Maximum,
    SampleCount,
    Sum,
}

impl MetricStatistic {
    /// The exact wire label of this statistic.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricStatistic::Average => "Average",
            MetricStatistic::Minimum => "Minimum",
            MetricStatistic::Maximum => "Maximum",
            MetricStatistic::SampleCount => "SampleCount",
            MetricStatistic::Sum => "Sum",
        }
    }

    /// All statistics, in label order.
    pub fn values() -> &'static [MetricStatistic] {
        &[
            MetricStatistic::Average,
            MetricStatistic::Minimum,
            MetricStatistic::Maximum,
            MetricStatistic::SampleCount,
            MetricStatistic::Sum,
        ]
    }
}

impl Display for MetricStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricStatistic {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidValueError {
                msg: "cannot create a MetricStatistic from an empty value".to_string(),
            });
        }
        match s {
            "Average" => Ok(MetricStatistic::Average),
            "Minimum" => Ok(MetricStatistic::Minimum),
            "Maximum" => Ok(MetricStatistic::Maximum),
            "SampleCount" => Ok(MetricStatistic::SampleCount),
            "Sum" => Ok(MetricStatistic::Sum),
            other => {
                debug!("Rejecting unknown metric statistic: {}", other);
                Err(InvalidValueError {
                    msg: format!("{} is not a valid MetricStatistic", other),
                })
            }
        }
    }
}

impl TryFrom<&str> for MetricStatistic {
    type Error = InvalidValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for statistic in MetricStatistic::values() {
            let parsed: MetricStatistic = statistic.as_str().parse().unwrap();
            assert_eq!(parsed, *statistic);
            assert_eq!(parsed.to_string(), statistic.as_str());
        }
    }

    #[test]
    fn empty_label_is_rejected() {
        let result = "".parse::<MetricStatistic>();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result = "Bogus".parse::<MetricStatistic>();
        assert_eq!(
            result.unwrap_err().msg,
            "Bogus is not a valid MetricStatistic"
        );
    }

    #[test]
    fn label_parsing_is_case_sensitive() {
        assert!("average".parse::<MetricStatistic>().is_err());
    }

    #[test]
    fn serializes_to_exact_label() {
        let json = serde_json::to_string(&MetricStatistic::SampleCount).unwrap();
        assert_eq!(json, "\"SampleCount\"");
    }
}
