use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::RecordId;

/// What happened to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Change<T> {
    Added {
        record: T,
    },
    Updated {
        before: T,
        after: T,
        /// Top-level JSON fields whose values differ, sorted by name
        fields: Vec<String>,
    },
    Removed {
        record: T,
    },
}

impl<T: Serialize> Change<T> {
    /// An update, with the changed field names worked out from the JSON forms
    pub fn updated(before: T, after: T) -> Self {
        let fields = changed_fields(&before, &after);
        Self::Updated {
            before,
            after,
            fields,
        }
    }
}

/// One line of the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry<T> {
    pub at: DateTime<Utc>,
    /// Storage key of the collection the record belongs to
    pub collection: String,
    pub id: RecordId,
    pub change: Change<T>,
}

impl<T> AuditEntry<T> {
    /// Stamp a change with the current time
    pub fn new(collection: &str, id: RecordId, change: Change<T>) -> Self {
        Self {
            at: Utc::now(),
            collection: collection.to_string(),
            id,
            change,
        }
    }
}

fn changed_fields<T: Serialize>(before: &T, after: &T) -> Vec<String> {
    let (Ok(Value::Object(old)), Ok(Value::Object(new))) =
        (serde_json::to_value(before), serde_json::to_value(after))
    else {
        return Vec::new();
    };

    let mut fields: Vec<String> = old
        .iter()
        .filter(|(key, value)| new.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .chain(new.keys().filter(|key| !old.contains_key(key.as_str())).cloned())
        .collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money, NewExpense};
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::from_new(
            RecordId::new("e-1"),
            NewExpense::new(
                Money::from_cents(1250),
                "Lunch",
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ),
        )
    }

    #[test]
    fn test_updated_lists_changed_fields() {
        let before = lunch();
        let mut after = before.clone();
        after.description = "Late lunch".into();
        after.amount = Money::from_cents(1500);

        match Change::updated(before, after) {
            Change::Updated { fields, .. } => assert_eq!(fields, vec!["amount", "description"]),
            other => panic!("unexpected change: {:?}", other),
        }
    }

    #[test]
    fn test_unchanged_update_has_no_fields() {
        let change = Change::updated(lunch(), lunch());
        assert!(matches!(change, Change::Updated { fields, .. } if fields.is_empty()));
    }

    #[test]
    fn test_line_shape() {
        let entry = AuditEntry::new(
            "coinwise_expenses",
            RecordId::new("e-1"),
            Change::Removed { record: lunch() },
        );
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["collection"], "coinwise_expenses");
        assert_eq!(value["id"], "e-1");
        assert_eq!(value["change"]["kind"], "removed");
        assert_eq!(value["change"]["record"]["amount"], 12.5);

        let back: AuditEntry<Expense> = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }
}
