use std::{
    any,
    borrow::Cow,
    fmt::{self, Display},
};

use log::{log_enabled, trace};
use serde::Serialize;

use crate::{error::Error, result::Result};

/// The outcome of a fallible computation: either the value it produced, or a message describing
/// why it could not produce one.
///
/// Outcomes are never modified in place. Every combinator consumes `self` and hands back a new
/// outcome, so a chain of [`Outcome::then`] calls reads as a pipeline in which the first failure
/// is carried, untouched, to the end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum Outcome<T> {
    Ok(T),
    Err(String),
}

/// Shorthand for [`Outcome::ok`].
pub fn ok<T>(value: T) -> Outcome<T> {
    Outcome::ok(value)
}

/// Shorthand for [`Outcome::error`].
pub fn error<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::error(message)
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Create a failure. The message is not validated, though an empty one helps nobody.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Err(message.into())
    }

    /// Lift a standard result, keeping the rendered error as the failure message.
    pub fn from_result<E: Display>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The failure message. Successes have no message but still answer, naming the type of
    /// value they hold.
    pub fn error_message(&self) -> Cow<'_, str> {
        match self {
            Self::Ok(_) => Cow::Owned(format!(
                "value of type {} has no error",
                any::type_name::<T>()
            )),
            Self::Err(message) => Cow::Borrowed(message),
        }
    }

    /// Extract the value.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a failure. Check [`Outcome::is_ok`] first or use one of the
    /// non-panicking extractors.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(message) => panic!(
                "{}",
                Error::InvalidState(format!(
                    "attempted to get value of a failed outcome: {message}"
                ))
            ),
        }
    }

    /// Extract the value, treating a failure as a bug described by `message`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this outcome is a failure.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{}", Error::InvalidState(message.to_owned())),
        }
    }

    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Feed the value into the next fallible step. A failure skips `step` entirely and is passed
    /// on with its message unchanged.
    pub fn then<U, F>(self, step: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => step(value),
            Self::Err(message) => {
                if log_enabled!(log::Level::Trace) {
                    trace!("skipping step after failure: {message}");
                }
                Outcome::Err(message)
            }
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.then(|value| Outcome::Ok(f(value)))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(message) => Err(Error::Failed(message)),
        }
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::Ok(value)
    }
}

impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => Display::fmt(value, f),
            Self::Err(message) => Display::fmt(message, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_yaml_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ok_holds_value() {
        for v in [-1, 0, 45, i32::MAX] {
            assert!(ok(v).is_ok());
            assert!(!ok(v).is_err());
            assert_eq!(ok(v).value(), v);
        }
    }

    #[test]
    fn error_holds_message() {
        for m in ["abc is not a number", "Wrong Date", ""] {
            let outcome = error::<i32>(m);
            assert!(!outcome.is_ok());
            assert!(outcome.is_err());
            assert_eq!(outcome.error_message(), m);
        }
    }

    #[test]
    fn error_message_of_success_names_type() {
        assert_eq!(ok(45).error_message(), "value of type i32 has no error");
        assert_eq!(ok("hi").error_message(), "value of type &str has no error");
    }

    #[test]
    fn error_message_needs_no_debug_payload() {
        struct Opaque;

        assert_eq!(error::<Opaque>("m").error_message(), "m");
        assert!(ok(Opaque)
            .error_message()
            .ends_with("Opaque has no error"));
    }

    #[test]
    fn display_of_string_payload() {
        assert_eq!(ok(String::from("2020-04-12")).to_string(), "2020-04-12");
        assert_eq!(error::<String>("Wrong Date").to_string(), "Wrong Date");
    }

    #[test]
    fn value_or() {
        assert_eq!(ok(45).value_or(7), 45);
        assert_eq!(error::<i32>("nope").value_or(7), 7);
        assert_eq!(error::<String>("nope").value_or("fallback".into()), "fallback");
    }

    #[test]
    fn value_or_default() {
        assert_eq!(ok(45).value_or_default(), 45);
        assert_eq!(error::<i32>("nope").value_or_default(), 0);
        assert_eq!(error::<String>("nope").value_or_default(), "");
        assert_eq!(error::<Vec<u8>>("nope").value_or_default(), Vec::<u8>::new());
    }

    #[test]
    fn expect_returns_value_of_success() {
        assert_eq!(ok("value").expect("should be ok"), "value");
    }

    #[test]
    #[should_panic(expected = "invalid state: attempted to get value of a failed outcome: nope")]
    fn value_of_failure_panics() {
        let _ = error::<i32>("nope").value();
    }

    #[test]
    #[should_panic(expected = "invalid state: date must be valid")]
    fn expect_of_failure_panics() {
        let _ = error::<i32>("Wrong Date").expect("date must be valid");
    }

    #[test]
    fn then_applies_step_to_success() {
        let halve = |n: i32| {
            if n % 2 == 0 {
                ok(n / 2)
            } else {
                error(format!("{n} is odd"))
            }
        };
        for n in [0, 3, 44, 45] {
            assert_eq!(ok(n).then(halve), halve(n));
        }
    }

    #[test]
    fn then_short_circuits_failure() {
        let mut called = false;
        let outcome = error::<i32>("first").then(|n| {
            called = true;
            ok(n.to_string())
        });
        assert!(!called);
        assert_eq!(outcome, error::<String>("first"));
    }

    #[test]
    fn first_failure_reaches_end_of_chain() {
        let outcome = ok(1)
            .then(|n| ok(n + 1))
            .then(|_| error::<i32>("second step failed"))
            .then(|_| error::<i32>("third step failed"))
            .map(|n| n * 10);
        assert_eq!(outcome.error_message(), "second step failed");
    }

    #[test]
    fn map() {
        assert_eq!(ok(21).map(|n| n * 2), ok(42));
        assert_eq!(error::<i32>("nope").map(|n| n * 2), error("nope"));
    }

    #[test]
    fn value_converts_into_success() {
        let outcome: Outcome<u32> = 12.into();
        assert_eq!(outcome, Outcome::ok(12));

        fn parse(text: &str) -> Outcome<u32> {
            match text.parse::<u32>() {
                Ok(n) => n.into(),
                Err(_) => error(format!("{text} is not a number")),
            }
        }
        assert_eq!(parse("3"), ok(3));
    }

    #[test]
    fn std_result_bridges() -> anyhow::Result<()> {
        let parsed = Outcome::from_result("12".parse::<u8>());
        assert_eq!(parsed, ok(12));
        assert_eq!(parsed.clone().into_result()?, 12);
        assert_eq!(parsed.into_option(), Some(12));

        let overflowed = Outcome::from_result("300".parse::<u8>());
        assert_eq!(
            overflowed.error_message(),
            "number too large to fit in target type"
        );
        assert_eq!(overflowed.clone().into_option(), None);
        assert!(matches!(
            overflowed.into_result(),
            Err(Error::Failed(message)) if message == "number too large to fit in target type"
        ));
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!(ok(45).to_string(), "45");
        assert_eq!(error::<i32>("Wrong Date").to_string(), "Wrong Date");
    }

    #[test]
    fn serialization() {
        assert_yaml_snapshot!(vec![ok(45), error("abc is not a number")], @r###"
        - ok: 45
        - err: abc is not a number
        "###);
    }
}
