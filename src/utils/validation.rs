use crate::utils::error::{ContactError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{10}$").expect("phone pattern is a valid regex"))
}

fn birthday_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday pattern is a valid regex")
    })
}

/// 電話必須剛好 10 個 ASCII 數字
pub fn validate_phone(value: &str) -> Result<()> {
    if !phone_pattern().is_match(value) {
        return Err(ContactError::validation(
            "phone",
            value,
            "must be exactly 10 digits",
        ));
    }
    Ok(())
}

/// 解析 DD.MM.YYYY，不存在的日期（例如 31.02）也視為錯誤
pub fn parse_birthday(value: &str) -> Result<NaiveDate> {
    if !birthday_pattern().is_match(value) {
        return Err(ContactError::validation(
            "birthday",
            value,
            "expected format DD.MM.YYYY",
        ));
    }

    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|e| {
        ContactError::validation("birthday", value, format!("not a calendar date: {}", e))
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ContactError::ConfigError {
            message: format!(
                "{} = {}: value must be between {} and {}",
                field_name, value, min, max
            ),
        });
    }
    Ok(())
}
