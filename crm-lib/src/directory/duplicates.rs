//! Duplicate client detection
//!
//! Two clients are a candidate pair when their name, email or phone agree.
//! Each agreeing field (company counts when one name contains the other)
//! adds to the similarity score, which in turn sets the risk level.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::entities::CLIENT_ENTITY;
use super::entities::Client;
use crate::model::Record;
use crate::model::Value;

pub const DUPLICATE_ENTITY: &str = "duplicate";

const BASE_SIMILARITY: u8 = 65;
const FIELD_WEIGHT: u8 = 10;

/// How likely a pair is to be the same person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// High from 90%, medium from 80%.
    pub fn from_similarity(similarity: u8) -> Self {
        match similarity {
            90.. => RiskLevel::High,
            80..=89 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detection threshold selected on the Duplicate Checker page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateThreshold {
    /// High risk only.
    #[default]
    High,
    /// Medium and high risk.
    Medium,
    /// Every candidate pair.
    All,
}

impl DuplicateThreshold {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Some(DuplicateThreshold::High),
            "medium" => Some(DuplicateThreshold::Medium),
            "all" => Some(DuplicateThreshold::All),
            _ => None,
        }
    }

    pub fn admits(self, level: RiskLevel) -> bool {
        match self {
            DuplicateThreshold::High => level == RiskLevel::High,
            DuplicateThreshold::Medium => level >= RiskLevel::Medium,
            DuplicateThreshold::All => true,
        }
    }
}

/// Two clients that look like the same person.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicatePair {
    pub id: i32,
    pub similarity: u8,
    pub clients: [Client; 2],
    pub matching_fields: Vec<&'static str>,
    pub risk_level: RiskLevel,
}

impl DuplicatePair {
    /// Project into a table row.
    ///
    /// `clients` is a list of embedded client records and `matchingFields`
    /// a list of field names.
    pub fn to_record(&self) -> Record {
        let clients: Vec<Value> = self
            .clients
            .iter()
            .map(|c| {
                Value::from(
                    Record::new(CLIENT_ENTITY)
                        .set("id", c.id)
                        .set("name", c.full_name())
                        .set("email", c.email.as_str())
                        .set("phone", c.phone.as_str())
                        .set("company", c.company.as_str()),
                )
            })
            .collect();

        Record::new(DUPLICATE_ENTITY)
            .set("id", self.id)
            .set("similarity", i32::from(self.similarity))
            .set("clients", clients)
            .set("matchingFields", self.matching_fields.clone())
            .set("riskLevel", self.risk_level.as_str())
    }
}

/// Every candidate pair among `clients`, numbered from 1 in scan order.
///
/// The lower-id client of a pair comes first.
pub fn find_duplicates(clients: &[Client]) -> Vec<DuplicatePair> {
    let mut ordered: Vec<&Client> = clients.iter().collect();
    ordered.sort_by_key(|c| c.id);

    let mut pairs = Vec::new();
    for (i, a) in ordered.iter().enumerate() {
        for b in &ordered[i + 1..] {
            let fields = matching_fields(a, b);
            if !fields.iter().any(|f| matches!(*f, "name" | "email" | "phone")) {
                continue;
            }

            let similarity = similarity(fields.len());
            pairs.push(DuplicatePair {
                id: pairs.len() as i32 + 1,
                similarity,
                clients: [Client::clone(a), Client::clone(b)],
                matching_fields: fields,
                risk_level: RiskLevel::from_similarity(similarity),
            });
        }
    }
    pairs
}

fn similarity(matches: usize) -> u8 {
    let bonus = u8::try_from(matches)
        .unwrap_or(u8::MAX)
        .saturating_mul(FIELD_WEIGHT);
    BASE_SIMILARITY.saturating_add(bonus).min(100)
}

fn matching_fields(a: &Client, b: &Client) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if same_text(&a.full_name(), &b.full_name()) {
        fields.push("name");
    }
    if same_text(&a.email, &b.email) {
        fields.push("email");
    }
    if same_text(&a.phone, &b.phone) {
        fields.push("phone");
    }
    if related_company(&a.company, &b.company) {
        fields.push("company");
    }
    fields
}

fn same_text(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

fn related_company(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_and_risk() {
        assert_eq!(similarity(1), 75);
        assert_eq!(similarity(3), 95);
        assert_eq!(similarity(4), 100);
        assert_eq!(RiskLevel::from_similarity(95), RiskLevel::High);
        assert_eq!(RiskLevel::from_similarity(85), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_similarity(75), RiskLevel::Low);
    }

    #[test]
    fn test_threshold() {
        assert!(DuplicateThreshold::High.admits(RiskLevel::High));
        assert!(!DuplicateThreshold::High.admits(RiskLevel::Medium));
        assert!(DuplicateThreshold::Medium.admits(RiskLevel::Medium));
        assert!(!DuplicateThreshold::Medium.admits(RiskLevel::Low));
        assert!(DuplicateThreshold::All.admits(RiskLevel::Low));
        assert_eq!(DuplicateThreshold::parse("ALL"), Some(DuplicateThreshold::All));
        assert_eq!(DuplicateThreshold::parse("some"), None);
    }

    #[test]
    fn test_company_alone_is_not_a_match() {
        assert!(related_company("Design Studio", "design studio inc"));
        assert!(!related_company("", "Tech Corp"));
        assert!(!same_text("  ", "  "));
    }
}
