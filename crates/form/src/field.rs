use std::{
    fmt,
    ops::{Index, IndexMut},
    sync::LazyLock,
};

use lubricants_contact::MIN_MESSAGE_LENGTH;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Mobile, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Message => "message",
        }
    }

    /// Constraint check equivalent to the browser's `checkValidity()` for the
    /// form's inputs: all required, `email` typed, `message` with a minimum
    /// length.
    pub fn check(self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        match self {
            Field::Email => EMAIL_RE.is_match(value),
            Field::Message => value.chars().count() as u64 >= MIN_MESSAGE_LENGTH,
            Field::Name | Field::Mobile => true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Styling applied to an input after validation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// One value per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields<T> {
    pub name: T,
    pub email: T,
    pub mobile: T,
    pub message: T,
}

impl<T> Index<Field> for Fields<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Message => &self.message,
        }
    }
}

impl<T> IndexMut<Field> for Fields<T> {
    fn index_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
            Field::Message => &mut self.message,
        }
    }
}
