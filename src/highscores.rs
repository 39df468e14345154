//! Best score record
//!
//! Persisted as `{ "best_score": n }`.

use serde::{Deserialize, Serialize};

/// The single persisted high score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    #[serde(default)]
    pub best_score: u64,
}

impl BestScore {
    pub fn new(best_score: u64) -> Self {
        Self { best_score }
    }

    /// Check if a final score beats the record (strictly)
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best_score
    }

    /// Parse a stored record; anything unreadable counts as no record
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<BestScore>(json) {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Ignoring unreadable best score record: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifies_strictly() {
        let best = BestScore::new(50);
        assert!(!best.qualifies(50));
        assert!(best.qualifies(51));
        assert!(!BestScore::default().qualifies(0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(BestScore::from_json(r#"{"best_score": 42}"#), BestScore::new(42));
        assert_eq!(BestScore::from_json(r#"{}"#), BestScore::default());
        assert_eq!(BestScore::from_json("not json"), BestScore::default());
        assert_eq!(BestScore::from_json(r#"{"best_score": -3}"#), BestScore::default());
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(BestScore::new(7).to_json().unwrap(), r#"{"best_score":7}"#);
    }
}
