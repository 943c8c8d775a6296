//! Domain types shared by the API client, the controllers and the views

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque bearer credential proving an authenticated identity to the API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the credential itself into logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(<{} chars>)", self.0.len())
    }
}

/// Identity of the signed-in user, as reported by the identity check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record id as the server sent it.
///
/// Some endpoints use numeric ids and others strings. The text form is used
/// for URLs and display; a numeric id is written back as a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordId {
    text: String,
    numeric: bool,
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl From<String> for RecordId {
    fn from(text: String) -> Self {
        Self {
            text,
            numeric: false,
        }
    }
}

impl From<&str> for RecordId {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<serde_json::Number> for RecordId {
    fn from(number: serde_json::Number) -> Self {
        Self {
            text: number.to_string(),
            numeric: true,
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.text
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.text.parse::<serde_json::Number>() {
            Ok(number) if self.numeric => number.serialize(serializer),
            _ => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self::from(s)),
            serde_json::Value::Number(n) => Ok(Self::from(n)),
            serde_json::Value::Null => Ok(Self::default()),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number id, got {other}"
            ))),
        }
    }
}

/// Email/password pair sent to `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Full editable profile of a user (`GET /auth/user/{id}`, `PUT /users/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: RecordId,
    #[serde(deserialize_with = "string_or_null")]
    pub first_name: String,
    #[serde(deserialize_with = "string_or_null")]
    pub last_name: String,
    #[serde(deserialize_with = "string_or_null")]
    pub phone_number: String,
    #[serde(deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(deserialize_with = "string_or_null")]
    pub date_of_birth: String,
    #[serde(deserialize_with = "string_or_null")]
    pub address: String,
    #[serde(deserialize_with = "string_or_null")]
    pub city: String,
}

impl UserProfile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::PhoneNumber => &self.phone_number,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::Address => &self.address,
            ProfileField::City => &self.city,
        }
    }

    /// Replace a single field. Pure local merge, no validation.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::PhoneNumber => self.phone_number = value,
            ProfileField::DateOfBirth => self.date_of_birth = value,
            ProfileField::Address => self.address = value,
            ProfileField::City => self.city = value,
        }
    }
}

/// Named fields of the account form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    DateOfBirth,
    Address,
    City,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::PhoneNumber,
        ProfileField::DateOfBirth,
        ProfileField::Address,
        ProfileField::City,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::PhoneNumber => "Telephone",
            ProfileField::DateOfBirth => "Date Of Birth",
            ProfileField::Address => "Address",
            ProfileField::City => "City",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "Your First Name",
            ProfileField::LastName => "Your Last Name",
            ProfileField::Email => "Your Email Address",
            ProfileField::PhoneNumber => "Your Phone Number",
            ProfileField::DateOfBirth => "YYYY-MM-DD",
            ProfileField::Address => "Your Default Address",
            ProfileField::City => "Your City",
        }
    }

    /// Email is shown but never edited from the account form
    pub fn is_read_only(&self) -> bool {
        matches!(self, ProfileField::Email)
    }
}

/// Read-only projection of a user, as returned by `GET /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserListItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_null")]
    pub first_name: String,
    #[serde(deserialize_with = "string_or_null")]
    pub last_name: String,
    #[serde(deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(deserialize_with = "string_or_null")]
    pub address: String,
    #[serde(deserialize_with = "string_or_null")]
    pub created_at: String,
    #[serde(deserialize_with = "string_or_null")]
    pub role: String,
}

impl UserListItem {
    /// "firstName lastName", the string the name filter matches against
    pub fn search_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "lastName firstName", the order the table displays
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// Which filter input a keystroke is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Name,
    Role,
    CreatedAt,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Name, FilterField::Role, FilterField::CreatedAt];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Name => "User",
            FilterField::Role => "Role",
            FilterField::CreatedAt => "Created At",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterField::Name => FilterField::Role,
            FilterField::Role => FilterField::CreatedAt,
            FilterField::CreatedAt => FilterField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterField::Name => FilterField::CreatedAt,
            FilterField::Role => FilterField::Name,
            FilterField::CreatedAt => FilterField::Role,
        }
    }
}

/// User-supplied constraints narrowing the list. Empty means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub role: String,
    pub created_at: String,
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Role => &self.role,
            FilterField::CreatedAt => &self.created_at,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Name => self.name = value,
            FilterField::Role => self.role = value,
            FilterField::CreatedAt => self.created_at = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.role.is_empty() && self.created_at.is_empty()
    }
}

/// Stages of the account load pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    /// `GET /auth/auth-check` resolving the signed-in user's id
    IdentityCheck,
    /// `GET /auth/user/{id}` fetching the full profile
    ProfileFetch,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStage::IdentityCheck => write!(f, "Identity check"),
            LoadStage::ProfileFetch => write!(f, "Profile fetch"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Lenient field decoding
// ─────────────────────────────────────────────────────────────────

fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids arrive as strings from some endpoints and as numbers from others.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Decode an id value from an arbitrary JSON node.
pub fn id_from_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
