// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Field set and accessor.
//
// A `FieldSet` is built once from raw JSON and is read-only afterwards. The
// accessor methods apply the presence rules: an absent value, an empty or
// whitespace-only string, and the sentinel "Not Assessed" all read as `None`.

use std::collections::HashMap;

use chrono::NaiveDate;
use echoreport_core::UnitPolicy;
use echoreport_core::error::{EchoReportError, Result};
use serde_json::Value;
use tracing::debug;

use crate::schema::{self, FieldKind};

/// Placeholder the exam form stores for fields the operator skipped.
pub const NOT_ASSESSED: &str = "Not Assessed";

/// Rendered in place of a missing or unreadable date.
pub const DATE_MASK: &str = "____/____/____";

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// A validated field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Boolean-like selection, read back as `Yes` / `No`.
    Flag(bool),
    /// Selected labels of a checkbox group, in declaration order.
    Choices(Vec<String>),
}

/// Whether a raw value should be treated as absent.
pub fn is_suppressed(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == NOT_ASSESSED
}

/// Reformat `YYYY-MM-DD` as `DD/MM/YYYY`. Malformed input yields `None`.
pub fn format_display_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT)
        .ok()
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}

/// Exam field values keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: HashMap<String, FieldValue>,
}

impl FieldSet {
    /// An empty field set: every read is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a JSON object against the schema.
    ///
    /// Unknown keys and values of the wrong shape are dropped. Only a
    /// non-object top level is an error.
    pub fn from_json(raw: &Value) -> Result<Self> {
        let object = raw.as_object().ok_or_else(|| {
            EchoReportError::FieldSet(format!("expected a JSON object, got {}", json_type(raw)))
        })?;

        let mut values = HashMap::with_capacity(object.len());
        for (key, value) in object {
            let Some(kind) = schema::lookup(key) else {
                debug!(field = %key, "ignoring undeclared field");
                continue;
            };
            match coerce(kind, value) {
                Some(v) => {
                    values.insert(key.clone(), v);
                }
                None => debug!(field = %key, kind = ?kind, "dropping value of unexpected shape"),
            }
        }

        debug!(accepted = values.len(), offered = object.len(), "field set validated");
        Ok(Self { values })
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The stored text of `id` without presence filtering.
    pub fn raw_text(&self, id: &str) -> Option<&str> {
        match self.values.get(id)? {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::Flag(true) => Some("Yes"),
            FieldValue::Flag(false) => Some("No"),
            FieldValue::Choices(_) => None,
        }
    }

    /// The text of `id`, or `None` when absent, empty or "Not Assessed".
    pub fn text(&self, id: &str) -> Option<&str> {
        self.raw_text(id)
            .filter(|v| !is_suppressed(v))
            .map(str::trim)
    }

    /// Selected labels of a multi-select group, in declaration order.
    pub fn choices(&self, id: &str) -> &[String] {
        match self.values.get(id) {
            Some(FieldValue::Choices(c)) => c,
            _ => &[],
        }
    }

    /// Selections joined with `", "`, or `None` when nothing is selected.
    pub fn joined_choices(&self, id: &str) -> Option<String> {
        let choices = self.choices(id);
        (!choices.is_empty()).then(|| choices.join(", "))
    }

    /// Whether a boolean-like field reads as yes.
    pub fn is_affirmative(&self, id: &str) -> bool {
        self.text(id)
            .is_some_and(|v| v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true"))
    }

    /// A measurement with its declared unit appended.
    ///
    /// Under `UnitPolicy::Lenient` the unit is appended before the presence
    /// check, so a field with no magnitude still reads as the bare unit.
    pub fn measurement(&self, id: &str, policy: UnitPolicy) -> Option<String> {
        let unit = match schema::lookup(id) {
            Some(FieldKind::Measurement { unit }) => unit,
            _ => return self.text(id).map(str::to_owned),
        };
        let composed = match policy {
            UnitPolicy::RequireMagnitude => format!("{} {unit}", self.text(id)?),
            UnitPolicy::Lenient => {
                format!("{} {unit}", self.raw_text(id).unwrap_or_default().trim())
            }
        };
        let composed = composed.trim().to_owned();
        (!is_suppressed(&composed)).then_some(composed)
    }

    /// The date in `id` reformatted as `DD/MM/YYYY`.
    pub fn display_date(&self, id: &str) -> Option<String> {
        self.text(id).and_then(format_display_date)
    }
}

fn coerce(kind: FieldKind, value: &Value) -> Option<FieldValue> {
    match (kind, value) {
        (_, Value::Null) => None,
        (FieldKind::Text | FieldKind::Date | FieldKind::Select, Value::String(s)) => {
            Some(FieldValue::Text(s.clone()))
        }
        (FieldKind::Measurement { .. }, Value::String(s)) => {
            Some(FieldValue::Text(s.trim().to_owned()))
        }
        (FieldKind::Measurement { .. }, Value::Number(n)) => {
            Some(FieldValue::Text(n.to_string()))
        }
        (FieldKind::Select, Value::Bool(b)) => Some(FieldValue::Flag(*b)),
        (FieldKind::MultiSelect { options }, Value::Array(items)) => {
            let selected: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            ordered_choices(options, &selected)
        }
        (FieldKind::MultiSelect { options }, Value::String(s)) => ordered_choices(options, &[s.as_str()]),
        _ => None,
    }
}

/// Keep the declared options that were selected, in declaration order.
fn ordered_choices(options: &[&str], selected: &[&str]) -> Option<FieldValue> {
    for label in selected {
        if !options.contains(label) {
            debug!(option = %label, "dropping undeclared option");
        }
    }
    let ordered: Vec<String> = options
        .iter()
        .filter(|opt| selected.contains(*opt))
        .map(|opt| (*opt).to_owned())
        .collect();
    (!ordered.is_empty()).then_some(FieldValue::Choices(ordered))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
