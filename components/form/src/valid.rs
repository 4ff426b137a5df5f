//! Validation utilities for form components.

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Debug, Display};
use core::ops::Range;

use regex::Regex;

macro_rules! impl_error {
    ($ident:ident, $message:expr) => {
        #[derive(Debug, Clone, Copy)]
        #[doc = $message]
        pub struct $ident;

        impl core::fmt::Display for $ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $message)
            }
        }

        impl core::error::Error for $ident {}
    };
}

/// Checks values of type `T` before a form submits them.
///
/// Validators are cheap to clone and compose with [`and`](Validator::and)
/// and [`or`](Validator::or).
pub trait Validator<T>: Clone + 'static {
    /// The error type returned when validation fails.
    type Err: Error;

    /// Validates the given value.
    fn validate(&self, value: &T) -> Result<(), Self::Err>;

    /// Combines this validator with another; both must succeed.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validator<T>,
    {
        And(self, other)
    }

    /// Combines this validator with another; either may succeed.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validator<T>,
    {
        Or(self, other)
    }
}

/// A validator that accepts every value.
///
/// The schema of a form whose fields carry no constraints of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl<T> Validator<T> for Anything {
    type Err = Infallible;

    fn validate(&self, _value: &T) -> Result<(), Self::Err> {
        Ok(())
    }
}

/// An error indicating that a value is out of a specified range.
#[derive(Debug, Clone)]
pub struct OutOfRange<T>(pub Range<T>);

impl<T: Display> Display for OutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value is out of range: {} - {}.",
            self.0.start, self.0.end
        )
    }
}

impl<T: Display + Debug> Error for OutOfRange<T> {}

impl<T: Display + Debug + PartialOrd + Clone + 'static> Validator<T> for Range<T> {
    type Err = OutOfRange<T>;

    fn validate(&self, value: &T) -> Result<(), Self::Err> {
        self.contains(value)
            .then_some(())
            .ok_or_else(|| OutOfRange(self.clone()))
    }
}

impl_error!(NotMatch, "Value does not match the required pattern.");

impl<T> Validator<T> for Regex
where
    T: AsRef<str>,
{
    type Err = NotMatch;

    fn validate(&self, value: &T) -> Result<(), Self::Err> {
        self.is_match(value.as_ref()).then_some(()).ok_or(NotMatch)
    }
}

/// A validator that combines two validators with logical AND.
/// Short-circuits on the first failure.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

/// The failure of an [`And`] validator, naming which side failed.
#[derive(Debug, Clone)]
pub enum AndError<A, B> {
    /// The first validator failed.
    A(A),
    /// The second validator failed.
    B(B),
}

impl<A, B> Display for AndError<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(a) => write!(f, "{a}"),
            Self::B(b) => write!(f, "{b}"),
        }
    }
}

impl<A: Error, B: Error> Error for AndError<A, B> {}

impl<T, A, B> Validator<T> for And<A, B>
where
    A: Validator<T>,
    B: Validator<T>,
{
    type Err = AndError<A::Err, B::Err>;

    fn validate(&self, value: &T) -> Result<(), Self::Err> {
        self.0.validate(value).map_err(AndError::A)?;
        self.1.validate(value).map_err(AndError::B)
    }
}

/// A validator that combines two validators with logical OR.
/// Short-circuits on the first success.
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

/// The failure of an [`Or`] validator, carrying both errors.
#[derive(Debug, Clone)]
pub struct OrError<A, B>(pub A, pub B);

impl<A, B> Display for OrError<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At least one of the following errors occurred:\n1. {}\n2. {}",
            self.0, self.1
        )
    }
}

impl<A: Error, B: Error> Error for OrError<A, B> {}

impl<T, A, B> Validator<T> for Or<A, B>
where
    A: Validator<T>,
    B: Validator<T>,
{
    type Err = OrError<A::Err, B::Err>;

    fn validate(&self, value: &T) -> Result<(), Self::Err> {
        self.0
            .validate(value)
            .or_else(|e1| self.1.validate(value).map_err(|e2| OrError(e1, e2)))
    }
}

/// A validator that checks if a value is present (not `None`, not blank).
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl_error!(RequiredError, "Value is required.");

impl<T> Validator<Option<T>> for Required {
    type Err = RequiredError;

    fn validate(&self, value: &Option<T>) -> Result<(), Self::Err> {
        value.is_some().then_some(()).ok_or(RequiredError)
    }
}

impl Validator<String> for Required {
    type Err = RequiredError;

    // a string of only whitespace counts as empty
    fn validate(&self, value: &String) -> Result<(), Self::Err> {
        (!value.trim().is_empty()).then_some(()).ok_or(RequiredError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anything_accepts_everything() {
        assert!(Anything.validate(&String::new()).is_ok());
        assert!(Anything.validate(&0).is_ok());
    }

    #[test]
    fn required_rejects_blank_strings() {
        assert!(Required.validate(&String::from("groceries")).is_ok());
        assert!(Required.validate(&String::from("   ")).is_err());
        assert!(Required.validate(&None::<u32>).is_err());
    }

    #[test]
    fn combinators_short_circuit() {
        let amount = (1..100).and(2..50);
        assert!(amount.validate(&10).is_ok());
        assert!(matches!(amount.validate(&0), Err(AndError::A(_))));
        assert!(matches!(amount.validate(&75), Err(AndError::B(_))));

        let either = (1..5).or(10..20);
        assert!(either.validate(&12).is_ok());
        assert!(either.validate(&7).is_err());
    }

    #[test]
    fn regex_matches_as_str() {
        let pattern = Regex::new("^[a-z]+$").unwrap();
        assert!(pattern.validate(&String::from("rent")).is_ok());
        assert!(pattern.validate(&String::from("Rent!")).is_err());
    }
}
