//! Per-coordinate results of a batch run.

use std::path::PathBuf;

use super::error::ItemError;

/// What happened to a coordinate that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print-only mode: URL resolved, nothing fetched or written.
    Resolved { url: String },
    /// Artifact fetched and written to `path`.
    Downloaded {
        url: String,
        path: PathBuf,
        bytes: u64,
    },
}

impl Outcome {
    /// The resolved download URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Resolved { url } | Self::Downloaded { url, .. } => url,
        }
    }
}

/// Result for one input coordinate, in input order.
#[derive(Debug)]
pub struct ItemOutcome {
    /// The coordinate exactly as supplied.
    pub coordinate: String,
    pub result: Result<Outcome, ItemError>,
}

impl ItemOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// All outcomes of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    outcomes: Vec<ItemOutcome>,
}

impl BatchSummary {
    #[must_use]
    pub fn new(outcomes: Vec<ItemOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in input order.
    #[must_use]
    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Coordinates that got past the parser, whatever happened next.
    #[must_use]
    pub fn parsed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o.result, Err(ItemError::Parse(_))))
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::ParseError;
    use crate::transport::FetchError;

    fn item(coordinate: &str, result: Result<Outcome, ItemError>) -> ItemOutcome {
        ItemOutcome {
            coordinate: coordinate.to_string(),
            result,
        }
    }

    #[test]
    fn test_summary_counts() {
        let summary = BatchSummary::new(vec![
            item(
                "g:a:1",
                Ok(Outcome::Resolved {
                    url: "https://r/g/a/1/a-1.jar".into(),
                }),
            ),
            item("bad", Err(ParseError::too_few_fields("bad", 1).into())),
            item(
                "g:b:1",
                Err(FetchError::http_status("https://r/g/b/1/b-1.jar", 404).into()),
            ),
        ]);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.parsed(), 2);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchSummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.parsed(), 0);
        assert_eq!(summary.failed(), 0);
    }

    #[test]
    fn test_outcome_url() {
        let outcome = Outcome::Downloaded {
            url: "https://r/x.jar".into(),
            path: PathBuf::from("/tmp/x.jar"),
            bytes: 3,
        };
        assert_eq!(outcome.url(), "https://r/x.jar");
    }
}
