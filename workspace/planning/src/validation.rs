//! Structural validation of the raw create-scenario payload.
//!
//! Every field is checked independently and every violation is collected, so
//! a caller always sees the complete list of problems with a request. Each
//! message is prefixed with `ValidationError: ` to tell it apart from system
//! failures.

use std::borrow::Cow;

use indexmap::IndexSet;
use model::entities::scenario::PlanType;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::error::{PlanningError, Result};
use crate::period::{parse_month, MonthYear};

pub const TYPE_MESSAGE: &str =
    "ValidationError: type must be a string, and can either be Getsudo or AP.";
pub const NAMC_MESSAGE: &str = "ValidationError: namc is required and must be a string.";
pub const LINE_MESSAGE: &str = "ValidationError: line is required and must be a string.";
pub const START_MONTH_MESSAGE: &str =
    "ValidationError: startMonth is required and must be a 3-character string.";
pub const START_YEAR_MESSAGE: &str =
    "ValidationError: startYear is required and must be a 4-character string.";
pub const END_MONTH_MESSAGE: &str =
    "ValidationError: endMonth is required and must be a 3-character string.";
pub const END_YEAR_MESSAGE: &str =
    "ValidationError: endYear is required and must be a 4-character string.";
pub const USER_NAME_MESSAGE: &str =
    "ValidationError: userName is required and must be a string.";
pub const USER_EMAIL_MESSAGE: &str =
    "ValidationError: userEmail is required and must be a string.";
pub const INVALID_EMAIL_MESSAGE: &str = "ValidationError: Invalid userEmail.";
pub const DUPLICATE_SCENARIO_MESSAGE: &str =
    "ValidationError: Scenario already exists for the given namc, line, plan type & cycle.";

/// Key under which keys outside [`FIELD_ORDER`] are reported.
const UNKNOWN_FIELD: &str = "__unknown";

/// Message for a key that is not part of the request.
pub fn unknown_field_message(key: &str) -> String {
    format!("ValidationError: \"{}\" is not allowed.", key)
}

/// Field names in the order their messages are reported.
pub const FIELD_ORDER: [&str; 9] = [
    "type",
    "namc",
    "line",
    "startMonth",
    "startYear",
    "endMonth",
    "endYear",
    "userName",
    "userEmail",
];

/// Only ASCII digits; `\d` would also accept other Unicode digits.
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Only addresses under the `.com` top-level domain are accepted.
const ALLOWED_EMAIL_TLD: &str = "com";

/// A create-scenario request that passed structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRequest {
    pub plan_type: PlanType,
    pub namc: String,
    pub line: String,
    pub start: MonthYear,
    pub end: MonthYear,
    pub user_name: String,
    pub user_email: String,
}

/// The request body as received: a JSON object whose fields have not been
/// checked yet.
#[derive(Debug, Clone)]
pub struct RawScenarioRequest {
    fields: Map<String, Value>,
}

impl RawScenarioRequest {
    /// Parses a request body.
    ///
    /// An absent body, a blank body and `{}` are all rejected with
    /// [`PlanningError::EmptyInput`]; anything that is not a JSON object is
    /// [`PlanningError::MalformedInput`].
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        trace!("Parsing request body of {} bytes", body.len());
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PlanningError::EmptyInput);
        }

        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(PlanningError::MalformedInput(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_fields(fields: Map<String, Value>) -> Result<Self> {
        if fields.is_empty() {
            return Err(PlanningError::EmptyInput);
        }
        Ok(Self { fields })
    }

    /// Validates every field and converts the request into its typed form.
    ///
    /// On failure, returns the messages of all invalid fields in
    /// [`FIELD_ORDER`].
    pub fn into_request(self) -> std::result::Result<ScenarioRequest, Vec<String>> {
        self.parse().map_err(|errors| {
            let messages = ordered_messages(&errors);
            warn!("Request failed field validation: {:?}", messages);
            messages
        })
    }

    fn parse(&self) -> std::result::Result<ScenarioRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let plan_type = self.field("type", TYPE_MESSAGE, &mut errors, PlanType::from_token);
        let namc = self.field("namc", NAMC_MESSAGE, &mut errors, owned);
        let line = self.field("line", LINE_MESSAGE, &mut errors, owned);
        let start_month = self.field("startMonth", START_MONTH_MESSAGE, &mut errors, parse_month);
        let start_year = self.field("startYear", START_YEAR_MESSAGE, &mut errors, parse_year);
        let end_month = self.field("endMonth", END_MONTH_MESSAGE, &mut errors, parse_month);
        let end_year = self.field("endYear", END_YEAR_MESSAGE, &mut errors, parse_year);
        let user_name = self.field("userName", USER_NAME_MESSAGE, &mut errors, owned);
        let user_email = self.user_email(&mut errors);
        self.unknown_fields(&mut errors);

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        match (
            plan_type,
            namc,
            line,
            start_month,
            start_year,
            end_month,
            end_year,
            user_name,
            user_email,
        ) {
            (
                Some(plan_type),
                Some(namc),
                Some(line),
                Some(start_month),
                Some(start_year),
                Some(end_month),
                Some(end_year),
                Some(user_name),
                Some(user_email),
            ) => {
                let request = ScenarioRequest {
                    plan_type,
                    namc,
                    line,
                    start: MonthYear::new(start_month, start_year),
                    end: MonthYear::new(end_month, end_year),
                    user_name,
                    user_email,
                };
                debug!("Request passed field validation: {:?}", request);
                Ok(request)
            }
            _ => Err(errors),
        }
    }

    /// A non-empty string field, converted with `convert`. Missing, null,
    /// non-string, empty and unconvertible values all record `message`.
    fn field<T>(
        &self,
        name: &'static str,
        message: &'static str,
        errors: &mut ValidationErrors,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> Option<T> {
        let converted = self.text(name).and_then(convert);
        if converted.is_none() {
            errors.add(name, field_error("invalid", message));
        }
        converted
    }

    fn user_email(&self, errors: &mut ValidationErrors) -> Option<String> {
        let Some(email) = self.text("userEmail") else {
            errors.add("userEmail", field_error("required", USER_EMAIL_MESSAGE));
            return None;
        };
        if !is_allowed_email(email) {
            errors.add("userEmail", field_error("email", INVALID_EMAIL_MESSAGE));
            return None;
        }
        Some(email.to_string())
    }

    fn unknown_fields(&self, errors: &mut ValidationErrors) {
        let mut unknown: Vec<&String> = self
            .fields
            .keys()
            .filter(|key| !FIELD_ORDER.contains(&key.as_str()))
            .collect();
        unknown.sort();

        for key in unknown {
            let mut error = ValidationError::new("unknown");
            error.message = Some(Cow::Owned(unknown_field_message(key)));
            errors.add(UNKNOWN_FIELD, error);
        }
    }

    fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// An insertion-ordered set of validation messages. Adding a message that is
/// already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMessages(IndexSet<String>);

impl ValidationMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.insert(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }

    /// Converts the collected messages into a validation failure.
    pub fn into_error(self) -> PlanningError {
        PlanningError::Validation(self.into_vec())
    }
}

impl<S: Into<String>> Extend<S> for ValidationMessages {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for message in iter {
            self.push(message);
        }
    }
}

/// Flattens `errors` into their messages, ordered by [`FIELD_ORDER`] and
/// followed by unknown keys.
pub fn ordered_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .chain(std::iter::once(&UNKNOWN_FIELD))
        .filter_map(|field| field_errors.get(field))
        .flat_map(|errors| errors.iter())
        .filter_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .collect()
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn owned(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn parse_year(text: &str) -> Option<i32> {
    if !YEAR_PATTERN.is_match(text) {
        return None;
    }
    text.parse().ok()
}

fn is_allowed_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(_, tld)| tld.eq_ignore_ascii_case(ALLOWED_EMAIL_TLD))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
