use crate::types::Tag;

/// Uniform view over the two outcome types, `Result` and `Option`.
///
/// Branch selection only ever looks at the discriminant; payloads are never
/// inspected to pick an arm.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Tag};
///
/// fn describe<O: Outcome>(outcome: &O) -> &'static str {
///     if outcome.is_success() { "has value" } else { "empty" }
/// }
///
/// assert_eq!(describe(&Some(1)), "has value");
/// assert_eq!(describe(&Err::<u8, _>("bad")), "empty");
/// assert_eq!(Ok::<_, ()>(1).tag(), Tag::Ok);
/// ```
pub trait Outcome: Sized {
    /// The payload of the success/presence arm.
    type Value;

    /// Returns the discriminant.
    fn tag(&self) -> Tag;

    /// Returns `true` for `Ok` and `Some`.
    #[inline]
    fn is_success(&self) -> bool {
        self.tag().is_success()
    }

    /// Returns `true` for `Err` and `None`.
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the payload, discarding the failure arm.
    fn success(self) -> Option<Self::Value>;

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics on `Err` and `None`.
    #[track_caller]
    fn unwrap_success(self) -> Self::Value;
}

impl<T, E> Outcome for Result<T, E> {
    type Value = T;

    #[inline]
    fn tag(&self) -> Tag {
        match self {
            Ok(_) => Tag::Ok,
            Err(_) => Tag::Err,
        }
    }

    #[inline]
    fn success(self) -> Option<T> {
        self.ok()
    }

    #[inline]
    #[track_caller]
    fn unwrap_success(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => panic!("called `unwrap` on an `err` outcome"),
        }
    }
}

impl<T> Outcome for Option<T> {
    type Value = T;

    #[inline]
    fn tag(&self) -> Tag {
        match self {
            Some(_) => Tag::Some,
            None => Tag::None,
        }
    }

    #[inline]
    fn success(self) -> Option<T> {
        self
    }

    #[inline]
    #[track_caller]
    fn unwrap_success(self) -> T {
        match self {
            Some(value) => value,
            None => panic!("called `unwrap` on a `none` outcome"),
        }
    }
}
