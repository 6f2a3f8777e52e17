//! Sprint report data structures
//!
//! This module contains the core data structures for loading and working
//! with `res.json` report files produced by the upstream evaluation
//! pipeline.

use serde::Deserialize;
use std::io;
use std::path::PathBuf;

/// One INVEST criterion with its score and justification.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestCriterion {
    pub name: String,
    pub score: u8,
    pub justification: String,
}

/// INVEST evaluation for a story: criteria in the order the report lists
/// them (Independent, Negotiable, ... in a well-formed report).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvestEvaluation {
    pub criteria: Vec<InvestCriterion>,
}

impl InvestEvaluation {
    /// Mean criterion score, 0.0 for an empty evaluation.
    pub fn average_score(&self) -> f64 {
        if self.criteria.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.criteria.iter().map(|c| u32::from(c.score)).sum();
        f64::from(sum) / self.criteria.len() as f64
    }
}

// Custom deserializer: the wire format is a JSON object keyed by criterion
// name. Each value is either an object with puntaje/justificacion fields or,
// in older report files, a bare integer score. A plain map type would lose
// the criterion order, so collect into a Vec by hand.
impl<'de> serde::Deserialize<'de> for InvestEvaluation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CriterionValue {
            Score(u8),
            Full {
                #[serde(rename = "puntaje")]
                score: u8,
                #[serde(rename = "justificacion", default)]
                justification: String,
            },
        }

        struct InvestVisitor;

        impl<'de> Visitor<'de> for InvestVisitor {
            type Value = InvestEvaluation;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map from criterion name to score or score object")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut criteria = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, CriterionValue>()? {
                    let criterion = match value {
                        CriterionValue::Score(score) => InvestCriterion {
                            name,
                            score,
                            justification: String::new(),
                        },
                        CriterionValue::Full {
                            score,
                            justification,
                        } => InvestCriterion {
                            name,
                            score,
                            justification,
                        },
                    };
                    if criterion.score > 5 {
                        return Err(de::Error::custom(format!(
                            "INVEST score {} for '{}' is out of the 0-5 range",
                            criterion.score, criterion.name
                        )));
                    }
                    criteria.push(criterion);
                }
                Ok(InvestEvaluation { criteria })
            }
        }

        deserializer.deserialize_map(InvestVisitor)
    }
}

/// Complexity above which a story counts as problematic, and below which an
/// average INVEST score does too.
const PROBLEMATIC_THRESHOLD: f64 = 2.5;

/// A user story from the report, plus the derived hours estimate.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Story {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "complejidad")]
    pub complexity: f64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "evaluacion_invest", default)]
    pub invest: InvestEvaluation,
    #[serde(rename = "posibles_mejoras", default)]
    pub improvements: Vec<String>,
    /// Computed by the estimation engine, never read from the file.
    #[serde(skip)]
    pub estimated_hours: f64,
}

impl Story {
    /// A story is flagged when it is complex or its INVEST evaluation is
    /// weak.
    pub fn is_problematic(&self) -> bool {
        self.complexity > PROBLEMATIC_THRESHOLD
            || (!self.invest.criteria.is_empty()
                && self.invest.average_score() < PROBLEMATIC_THRESHOLD)
    }

    #[cfg(test)]
    pub fn for_tests(id: u64, title: &str, complexity: f64) -> Self {
        Self {
            id,
            title: title.to_string(),
            complexity,
            url: None,
            invest: InvestEvaluation::default(),
            improvements: Vec::new(),
            estimated_hours: 0.0,
        }
    }
}

/// Sprint identification, used for the report header and link construction.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Metadata {
    #[serde(rename = "organizacion")]
    pub organization: String,
    #[serde(rename = "proyecto")]
    pub project: String,
    pub sprint: String,
}

/// Report document structure
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub metadata: Metadata,
    #[serde(rename = "data")]
    pub stories: Vec<Story>,
}

impl Report {
    /// Load a report from a JSON file
    pub fn load(path: &PathBuf) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Sum of all attached estimates.
    pub fn total_estimated_hours(&self) -> f64 {
        self.stories.iter().map(|s| s.estimated_hours).sum()
    }

    /// Average complexity weighted by estimated hours, 0.0 when no hours
    /// have been attached yet.
    pub fn weighted_avg_complexity(&self) -> f64 {
        let total_hours = self.total_estimated_hours();
        if total_hours <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self
            .stories
            .iter()
            .map(|s| s.complexity * s.estimated_hours)
            .sum();
        weighted / total_hours
    }

    /// Story count per complexity value, ascending by complexity.
    pub fn complexity_distribution(&self) -> Vec<(f64, usize)> {
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for story in &self.stories {
            match counts.iter_mut().find(|(c, _)| *c == story.complexity) {
                Some((_, n)) => *n += 1,
                None => counts.push((story.complexity, 1)),
            }
        }
        counts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        counts
    }

    /// Count of stories flagged as problematic.
    pub fn problematic_count(&self) -> usize {
        self.stories.iter().filter(|s| s.is_problematic()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "metadata": {
            "organizacion": "acme",
            "proyecto": "rocket",
            "sprint": "\\rocket\\Iteration\\Sprint 14"
        },
        "data": [
            {
                "id": 101,
                "titulo": "Login page",
                "complejidad": 2.5,
                "url": "https://dev.azure.com/acme/rocket/_workitems/edit/101",
                "evaluacion_invest": {
                    "Independiente": {"puntaje": 4, "justificacion": "Standalone"},
                    "Testeable": {"puntaje": 3, "justificacion": "Has criteria"}
                },
                "posibles_mejoras": ["Split the OAuth flow"]
            },
            {
                "id": 102,
                "titulo": "Billing export",
                "complejidad": 5,
                "evaluacion_invest": {
                    "Independiente": 2,
                    "Testeable": 1
                }
            }
        ]
    }"#;

    fn create_temp_report_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_report_load_success() {
        let (_file, path) = create_temp_report_file(SAMPLE);
        let report = Report::load(&path).unwrap();
        assert_eq!(report.metadata.organization, "acme");
        assert_eq!(report.metadata.project, "rocket");
        assert_eq!(report.stories.len(), 2);
        assert_eq!(report.stories[0].id, 101);
        assert_eq!(report.stories[0].title, "Login page");
        assert_eq!(report.stories[0].complexity, 2.5);
        assert_eq!(report.stories[0].improvements.len(), 1);
        assert_eq!(report.stories[1].url, None);
        // Estimates are never read from the file
        assert_eq!(report.stories[0].estimated_hours, 0.0);
    }

    #[test]
    fn test_invest_criteria_preserve_order() {
        let (_file, path) = create_temp_report_file(SAMPLE);
        let report = Report::load(&path).unwrap();
        let names: Vec<&str> = report.stories[0]
            .invest
            .criteria
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Independiente", "Testeable"]);
        assert_eq!(report.stories[0].invest.criteria[0].score, 4);
        assert_eq!(
            report.stories[0].invest.criteria[0].justification,
            "Standalone"
        );
    }

    #[test]
    fn test_invest_bare_score_format() {
        // Older report files store bare integers instead of score objects
        let (_file, path) = create_temp_report_file(SAMPLE);
        let report = Report::load(&path).unwrap();
        let invest = &report.stories[1].invest;
        assert_eq!(invest.criteria[0].score, 2);
        assert_eq!(invest.criteria[0].justification, "");
    }

    #[test]
    fn test_invest_score_out_of_range() {
        let json = r#"{"Independiente": {"puntaje": 9, "justificacion": ""}}"#;
        let result: Result<InvestEvaluation, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_invest_average_score() {
        let json = r#"{"A": 4, "B": 3, "C": 5}"#;
        let invest: InvestEvaluation = serde_json::from_str(json).unwrap();
        assert!((invest.average_score() - 4.0).abs() < 1e-9);
        assert_eq!(InvestEvaluation::default().average_score(), 0.0);
    }

    #[test]
    fn test_report_load_file_not_found() {
        let path = PathBuf::from("/nonexistent/path/res.json");
        let result = Report::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_report_load_invalid_json() {
        let (_file, path) = create_temp_report_file("{ invalid json }");
        let result = Report::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_report_load_missing_metadata() {
        let (_file, path) = create_temp_report_file(r#"{"data": []}"#);
        let result = Report::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_story_is_problematic() {
        let (_file, path) = create_temp_report_file(SAMPLE);
        let report = Report::load(&path).unwrap();
        // complexity 2.5 with average INVEST 3.5: fine
        assert!(!report.stories[0].is_problematic());
        // complexity 5 and average INVEST 1.5: flagged twice over
        assert!(report.stories[1].is_problematic());
        assert_eq!(report.problematic_count(), 1);
    }

    #[test]
    fn test_problematic_ignores_missing_invest() {
        let story = Story::for_tests(1, "simple", 1.0);
        assert!(!story.is_problematic());
    }

    #[test]
    fn test_summary_metrics() {
        let (_file, path) = create_temp_report_file(SAMPLE);
        let mut report = Report::load(&path).unwrap();
        assert_eq!(report.total_estimated_hours(), 0.0);
        assert_eq!(report.weighted_avg_complexity(), 0.0);

        report.stories[0].estimated_hours = 10.0;
        report.stories[1].estimated_hours = 30.0;
        assert_eq!(report.total_estimated_hours(), 40.0);
        // (2.5*10 + 5*30) / 40 = 4.375
        assert!((report.weighted_avg_complexity() - 4.375).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_distribution_sorted() {
        let json = r#"{
            "metadata": {"organizacion": "o", "proyecto": "p", "sprint": "s"},
            "data": [
                {"id": 1, "titulo": "a", "complejidad": 5},
                {"id": 2, "titulo": "b", "complejidad": 1.5},
                {"id": 3, "titulo": "c", "complejidad": 5},
                {"id": 4, "titulo": "d", "complejidad": 3}
            ]
        }"#;
        let (_file, path) = create_temp_report_file(json);
        let report = Report::load(&path).unwrap();
        assert_eq!(
            report.complexity_distribution(),
            vec![(1.5, 1), (3.0, 1), (5.0, 2)]
        );
    }
}
