use contracts::domain::booking::PaymentTerms;
use serde_json::{Map, Value};

use super::resource::{Column, ColumnKind};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{HasStatus, Searchable};
use crate::shared::payment_math::format_money;

/// Statuses that still need someone's attention; counted for menu badges.
pub const PENDING_STATUSES: [&str; 4] = ["pending", "new", "unread", "open"];

/// One row of a backend collection, kept as raw JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn from_value(value: Value) -> Option<Record> {
        match value {
            Value::Object(map) => Some(Record(map)),
            _ => None,
        }
    }

    /// `id`, or `_id` for document-store backends.
    pub fn id(&self) -> Option<String> {
        ["id", "_id"]
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }

    pub fn text(&self, key: &str) -> String {
        self.0.get(key).map(scalar_text).unwrap_or_default()
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Cell text for `column`.
    pub fn display(&self, column: &Column) -> String {
        match column.kind {
            ColumnKind::Text | ColumnKind::Status => self.text(column.key),
            ColumnKind::Date => {
                let raw = self.text(column.key);
                if raw.is_empty() {
                    raw
                } else {
                    format_datetime(&raw)
                }
            }
            ColumnKind::Money => self
                .number(column.key)
                .map(format_money)
                .unwrap_or_else(|| self.text(column.key)),
        }
    }

    pub fn payment_terms(&self) -> PaymentTerms {
        PaymentTerms {
            total_amount: self.number("totalAmount").unwrap_or_default(),
            advance_paid: self.number("advancePaid").unwrap_or_default(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status()
            .map(|s| PENDING_STATUSES.iter().any(|p| p.eq_ignore_ascii_case(&s)))
            .unwrap_or(false)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

impl Searchable for Record {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.0.values().any(|value| match value {
            Value::String(_) | Value::Number(_) => scalar_text(value).to_lowercase().contains(&needle),
            _ => false,
        })
    }
}

impl HasStatus for Record {
    fn status(&self) -> Option<String> {
        Some(self.text("status")).filter(|s| !s.is_empty())
    }
}

/// Rows of a list response: a bare array, or an object wrapping one in
/// `data` or `items`. Non-object rows are dropped.
pub fn extract_records(body: Value) -> Vec<Record> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("data").or_else(|| map.remove("items")) {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    rows.into_iter().filter_map(Record::from_value).collect()
}

pub fn pending_count(records: &[Record]) -> usize {
    records.iter().filter(|r| r.is_pending()).count()
}
