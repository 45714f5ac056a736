use chrono::{DateTime, TimeZone};

pub const HELLO_WORLD: &str = "Hello, World!";
pub const TIMESTAMP_PREFIX: &str = "Hello, World! Current date and time is: ";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which revision of the greeting the endpoint answers with.
#[derive(serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GreetingVariant {
    /// Fixed `Hello, World!`, logged twice.
    Plain,
    /// `Hello, World!` followed by the wall-clock time, logged once.
    #[default]
    Timestamped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting(String);

impl Greeting {
    pub fn plain() -> Self {
        Self(HELLO_WORLD.to_string())
    }

    pub fn timestamped<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self(format!("{}{}", TIMESTAMP_PREFIX, at.format(TIMESTAMP_FORMAT)))
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Greeting> for String {
    fn from(greeting: Greeting) -> Self {
        greeting.0
    }
}
