//! # Validation Rules
//!
//! Pure, total functions from a raw input string to an error message.
//! An empty string means the input is valid. Nothing here touches state or the network,
//! so every rule can be exercised directly with literal inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::booking::form::Field;
use crate::booking::tourist::{Tourist, TouristField};

pub const EMAIL_REQUIRED: &str = "Email обязателен для заполнения";
pub const EMAIL_INVALID: &str = "Введите корректный email";

pub const NAME_REQUIRED: &str = "Имя обязательно для заполнения";
pub const LAST_NAME_REQUIRED: &str = "Фамилия обязательна для заполнения";
pub const NAME_TOO_SHORT: &str = "Должно содержать минимум 2 символа";
pub const NAME_CHARSET: &str = "Допустимы только буквы, пробелы и дефисы";
pub const NAME_UPPERCASE: &str = "Должно начинаться с заглавной буквы";

pub const PHONE_REQUIRED: &str = "Телефон обязателен для заполнения";
pub const PHONE_DIGIT_COUNT: &str = "Номер телефона должен содержать 11 цифр";
pub const PHONE_PREFIX: &str = "Номер телефона должен начинаться с 7 или 8";

pub const TOUR_REQUIRED: &str = "Выберите тур";

const NAME_MIN_LENGTH: usize = 2;
const PHONE_DIGITS: usize = 11;
const PHONE_PREFIXES: [char; 2] = ['7', '8'];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s\-]+$").expect("Invalid name regex pattern"));

pub fn validate_email(email: &str) -> String {
    let email: &str = email.trim();
    if email.is_empty() {
        return EMAIL_REQUIRED.to_string();
    }
    if !EMAIL_PATTERN.is_match(email) {
        return EMAIL_INVALID.to_string();
    }
    String::new()
}

pub fn validate_name(name: &str) -> String {
    person_name(name, NAME_REQUIRED)
}

pub fn validate_phone(phone: &str) -> String {
    let phone: &str = phone.trim();
    if phone.is_empty() {
        return PHONE_REQUIRED.to_string();
    }

    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return PHONE_DIGIT_COUNT.to_string();
    }
    if !digits.starts_with(PHONE_PREFIXES) {
        return PHONE_PREFIX.to_string();
    }
    String::new()
}

pub fn validate_tour(tour_id: &str) -> String {
    if tour_id.trim().is_empty() {
        return TOUR_REQUIRED.to_string();
    }
    String::new()
}

/// Dispatches to the rule for `field`. The free-text message is always valid.
pub fn validate(field: Field, value: &str) -> String {
    match field {
        Field::Email => validate_email(value),
        Field::Name => validate_name(value),
        Field::Phone => validate_phone(value),
        Field::Tour => validate_tour(value),
        Field::Message => String::new(),
    }
}

pub fn validate_tourist(tourist: &Tourist, field: TouristField) -> String {
    let value: &str = tourist.get(field);
    match field {
        TouristField::FirstName => person_name(value, NAME_REQUIRED),
        TouristField::LastName => person_name(value, LAST_NAME_REQUIRED),
    }
}

fn person_name(value: &str, required: &str) -> String {
    let value: &str = value.trim();
    if value.is_empty() {
        return required.to_string();
    }
    if value.chars().count() < NAME_MIN_LENGTH {
        return NAME_TOO_SHORT.to_string();
    }
    if !NAME_PATTERN.is_match(value) {
        return NAME_CHARSET.to_string();
    }
    if !value.chars().next().is_some_and(char::is_uppercase) {
        return NAME_UPPERCASE.to_string();
    }
    String::new()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
