//! Parameterized form state
//!
//! Every order-entry screen is described by a [`FormSpec`]; one
//! [`FormState`] drives any of them. Values are kept as entered (text) and
//! checked against the field kinds on [`FormState::validate`].

mod presets;

pub use presets::{
    detail_edit_form, inventory_securing_form, line_changes, order_creation_form, order_search_form,
    search_criteria,
};

use crate::utils::time::parse_order_date;
use crate::utils::validation::{validate_digits, validate_text_len};
use serde::Serialize;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use std::collections::BTreeMap;

/// What a field accepts
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum FieldKind {
    Text { max_len: usize },
    /// Digits only, at most `max_len` of them (staff code, order form number)
    Code { max_len: usize },
    /// Whole number in `min..=max`; thousands separators allowed
    Integer { min: i64, max: i64 },
    /// Non-negative yen amount; thousands separators allowed
    Amount,
    /// `YYYY/MM/DD` or `YYYY-MM-DD`
    Date,
    Choice(Vec<String>),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<String>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Check one value; `Err` carries the message shown next to the field
    fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(format!("{} is required", self.name));
            }
            return Ok(());
        }

        match &self.kind {
            FieldKind::Text { max_len } => {
                validate_text_len(value, self.name, *max_len).map_err(|e| e.message)
            }
            FieldKind::Code { max_len } => validate_digits(value, self.name)
                .and_then(|_| validate_text_len(value, self.name, *max_len))
                .map_err(|e| e.message),
            FieldKind::Integer { min, max } => match parse_whole(value) {
                Some(n) if (*min..=*max).contains(&n) => Ok(()),
                Some(n) => Err(format!("{} must be between {} and {} (got {})", self.name, min, max, n)),
                None => Err(format!("{} must be a whole number", self.name)),
            },
            FieldKind::Amount => match parse_whole(value) {
                Some(n) if n >= 0 => Ok(()),
                _ => Err(format!("{} must be a non-negative amount", self.name)),
            },
            FieldKind::Date => parse_order_date(value).map(|_| ()).map_err(|e| e.message),
            FieldKind::Choice(options) => {
                if options.iter().any(|o| o == value) {
                    Ok(())
                } else {
                    Err(format!("{} must be one of: {}", self.name, options.join(", ")))
                }
            }
        }
    }
}

/// Strict whole-number parse; only `,` separators are tolerated
fn parse_whole(value: &str) -> Option<i64> {
    value.replace(',', "").parse().ok()
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormSpec {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Current values of one form
#[derive(Debug, Clone)]
pub struct FormState<'a> {
    spec: &'a FormSpec,
    values: BTreeMap<&'static str, String>,
}

impl<'a> FormState<'a> {
    /// Start from the spec's defaults (empty where none is given)
    pub fn new(spec: &'a FormSpec) -> Self {
        let mut state = Self {
            spec,
            values: BTreeMap::new(),
        };
        state.reset();
        state
    }

    pub fn spec(&self) -> &FormSpec {
        self.spec
    }

    /// Set a field; unknown field names are rejected
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> AppResult<()> {
        let field = self.spec.field(name).ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidRequest, format!("Unknown field: {}", name))
                .with_detail("form", self.spec.name)
                .with_detail("field", name)
        })?;
        self.values.insert(field.name, value.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value with surrounding whitespace removed, `None` when blank
    pub fn get_present(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Restore every field to its default (the F4 clear key)
    pub fn reset(&mut self) {
        self.values = self
            .spec
            .fields
            .iter()
            .map(|f| (f.name, f.default.clone().unwrap_or_default()))
            .collect();
    }

    /// Check every field, collecting all failures into one error
    ///
    /// The error's details map each failing field name to its message.
    pub fn validate(&self) -> AppResult<()> {
        let failures: Vec<(&'static str, String)> = self
            .spec
            .fields
            .iter()
            .filter_map(|field| {
                let value = self.get(field.name).unwrap_or_default();
                field.check(value).err().map(|msg| (field.name, msg))
            })
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        tracing::debug!(form = self.spec.name, failed = failures.len(), "Form validation failed");

        let required_only = failures
            .iter()
            .all(|(name, _)| self.get_present(name).is_none());
        let code = if required_only {
            ErrorCode::RequiredField
        } else {
            ErrorCode::ValidationFailed
        };
        let message = format!("{}: {} field(s) invalid", self.spec.name, failures.len());

        let err = failures
            .into_iter()
            .fold(AppError::with_message(code, message), |err, (name, msg)| {
                err.with_detail(name, Value::String(msg))
            });
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> FormSpec {
        FormSpec {
            name: "test",
            fields: vec![
                FieldSpec::new("name", "名前", FieldKind::Text { max_len: 4 }).required(),
                FieldSpec::new("qty", "数量", FieldKind::Integer { min: 1, max: 100 }).with_default("1"),
                FieldSpec::new("price", "単価", FieldKind::Amount),
                FieldSpec::new("date", "日付", FieldKind::Date),
                FieldSpec::new(
                    "kind",
                    "区分",
                    FieldKind::Choice(vec!["通常".to_string(), "直送".to_string()]),
                )
                .with_default("通常"),
            ],
        }
    }

    #[test]
    fn test_defaults_and_reset() {
        let spec = spec();
        let mut form = FormState::new(&spec);
        assert_eq!(form.get("qty"), Some("1"));
        assert_eq!(form.get("name"), Some(""));

        form.set("qty", "5").unwrap();
        form.reset();
        assert_eq!(form.get("qty"), Some("1"));
    }

    #[test]
    fn test_unknown_field() {
        let spec = spec();
        let mut form = FormState::new(&spec);
        let err = form.set("color", "red").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(form.get("color"), None);
    }

    #[test]
    fn test_valid_form() {
        let spec = spec();
        let mut form = FormState::new(&spec);
        form.set("name", "和光").unwrap();
        form.set("price", "1,200,000").unwrap();
        form.set("date", "2024/12/17").unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_collects_every_failure() {
        let spec = spec();
        let mut form = FormState::new(&spec);
        form.set("name", "キシダ化学").unwrap();
        form.set("qty", "0").unwrap();
        form.set("price", "-5").unwrap();
        form.set("date", "2024/02/30").unwrap();
        form.set("kind", "全て").unwrap();

        let err = form.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.len(), 5);
        assert!(details.contains_key("qty"));
        assert!(details.contains_key("kind"));
    }

    #[test]
    fn test_code_field() {
        let spec = FormSpec {
            name: "codes",
            fields: vec![FieldSpec::new("staff_code", "担当者コード", FieldKind::Code { max_len: 3 })],
        };
        let mut form = FormState::new(&spec);
        form.set("staff_code", "007").unwrap();
        assert!(form.validate().is_ok());

        form.set("staff_code", "0a7").unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(err.detail("staff_code"), Some(&Value::from("staff_code must be numeric")));

        form.set("staff_code", "0007").unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.detail("staff_code"),
            Some(&Value::from("staff_code is too long (4 chars, max 3)"))
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        let spec = spec();
        let mut form = FormState::new(&spec);
        form.set("name", "和光").unwrap();
        form.set("qty", "x").unwrap();
        form.set("kind", "全て").unwrap();

        let err = form.validate().unwrap_err();
        assert_eq!(err.detail("qty"), Some(&Value::from("qty must be a whole number")));
        assert_eq!(err.detail("kind"), Some(&Value::from("kind must be one of: 通常, 直送")));
    }

    #[test]
    fn test_missing_required_only() {
        let spec = spec();
        let form = FormState::new(&spec);
        let err = form.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.detail("name"), Some(&Value::from("name is required")));
    }
}
