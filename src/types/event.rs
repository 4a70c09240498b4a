//! Insight event types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Business area an event belongs to
///
/// Ordered by declaration, which is also the reporting order of [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Fraud,
    Ops,
    Safety,
    Sales,
    Health,
    Marketing,
}

impl Category {
    /// All categories in their canonical reporting order
    pub const ALL: [Category; 6] = [
        Category::Fraud,
        Category::Ops,
        Category::Safety,
        Category::Sales,
        Category::Health,
        Category::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fraud => "Fraud",
            Category::Ops => "Ops",
            Category::Safety => "Safety",
            Category::Sales => "Sales",
            Category::Health => "Health",
            Category::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown category '{}'", s)))
    }
}

/// Event severity, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Numeric rank used for sorting (Low=1, Medium=2, High=3)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown severity '{}'", s)))
    }
}

/// Where an event happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, city: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            city,
        }
    }
}

/// Scoring attached to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// 0-100
    pub score: u8,
    /// 0.0-1.0
    pub confidence: f64,
    /// Unit-less business impact, may be negative
    pub impact: i64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            score: 50,
            confidence: 0.5,
            impact: 0,
        }
    }
}

/// A stored insight event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub location: Location,
    pub metrics: Metrics,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl InsightEvent {
    /// Check field-level invariants shared by create and update
    pub fn validate(&self) -> Result<(), DashboardError> {
        validate_fields(
            &self.title,
            &self.description,
            &self.location,
            &self.metrics,
        )
    }
}

/// Fields supplied by a caller creating an event
///
/// `id` and `createdAt` are absent on purpose: the repository assigns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    pub location: Location,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        severity: Severity,
        location: Location,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            severity,
            location,
            metrics: Metrics::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, score: u8, confidence: f64, impact: i64) -> Self {
        self.metrics = Metrics {
            score,
            confidence,
            impact,
        };
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        validate_fields(
            &self.title,
            &self.description,
            &self.location,
            &self.metrics,
        )
    }
}

/// Partial update of an event
///
/// Every field is optional; only present fields are merged. Unknown JSON
/// keys (including `id` and `createdAt`) are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self == &EventPatch::default()
    }

    /// Merge present fields into `event`
    pub fn apply_to(self, event: &mut InsightEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(severity) = self.severity {
            event.severity = severity;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(metrics) = self.metrics {
            event.metrics = metrics;
        }
        if let Some(tags) = self.tags {
            event.tags = tags;
        }
    }
}

fn validate_fields(
    title: &str,
    description: &str,
    location: &Location,
    metrics: &Metrics,
) -> Result<(), DashboardError> {
    if title.trim().is_empty() {
        return Err(DashboardError::InvalidArgument(
            "title must not be empty".to_string(),
        ));
    }
    if description.trim().is_empty() {
        return Err(DashboardError::InvalidArgument(
            "description must not be empty".to_string(),
        ));
    }
    if !(-90.0..=90.0).contains(&location.latitude) {
        return Err(DashboardError::InvalidArgument(format!(
            "latitude {} outside [-90, 90]",
            location.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&location.longitude) {
        return Err(DashboardError::InvalidArgument(format!(
            "longitude {} outside [-180, 180]",
            location.longitude
        )));
    }
    if metrics.score > 100 {
        return Err(DashboardError::InvalidArgument(format!(
            "score {} outside [0, 100]",
            metrics.score
        )));
    }
    if !(0.0..=1.0).contains(&metrics.confidence) {
        return Err(DashboardError::InvalidArgument(format!(
            "confidence {} outside [0, 1]",
            metrics.confidence
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewEvent {
        NewEvent::new(
            "Card testing burst",
            "Dozens of low-value authorizations in a minute",
            Category::Fraud,
            Severity::High,
            Location::new(40.7, -74.0, Some("New York, NY".to_string())),
        )
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(Severity::High.rank(), 3);
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("fraud".parse::<Category>().unwrap(), Category::Fraud);
        assert_eq!(" Marketing ".parse::<Category>().unwrap(), Category::Marketing);
        assert!("Legal".parse::<Category>().is_err());
    }

    #[test]
    fn test_new_event_defaults_from_json() {
        let json = serde_json::json!({
            "title": "t",
            "description": "d",
            "category": "Ops",
            "severity": "Low",
            "location": {"lat": 1.0, "lng": 2.0}
        });
        let event: NewEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event.metrics, Metrics::default());
        assert!(event.tags.is_empty());
        assert!(event.location.city.is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(sample().validate().is_ok());

        let mut bad = sample();
        bad.title = "   ".to_string();
        assert!(bad.validate().is_err());

        let mut bad = sample();
        bad.location.latitude = 91.0;
        assert!(bad.validate().is_err());

        let mut bad = sample();
        bad.location.longitude = -180.5;
        assert!(bad.validate().is_err());

        assert!(sample().with_metrics(101, 0.5, 0).validate().is_err());
        assert!(sample().with_metrics(50, 1.5, 0).validate().is_err());
        assert!(sample().with_metrics(50, 0.5, -9000).validate().is_ok());
    }

    #[test]
    fn test_patch_ignores_identity_fields() {
        let json = serde_json::json!({
            "id": "999",
            "createdAt": "2020-01-01T00:00:00Z",
            "severity": "Medium"
        });
        let patch: EventPatch = serde_json::from_value(json).unwrap();
        assert_eq!(patch.severity, Some(Severity::Medium));
        assert!(patch.title.is_none());
        assert!(!patch.is_empty());
        assert!(EventPatch::default().is_empty());
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let event = InsightEvent {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            category: Category::Sales,
            severity: Severity::Low,
            created_at: Utc::now(),
            updated_at: None,
            location: Location::new(0.0, 0.0, None),
            metrics: Metrics::default(),
            tags: vec![],
            created_by: Some("admin@test.com".to_string()),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none());
        assert_eq!(value["createdBy"], "admin@test.com");
        assert_eq!(value["location"]["lat"], 0.0);
    }
}
