use std::fmt::Display;

/// Return the first candidate that is not empty.
///
/// # Examples
/// ```
/// use lenient_utils::helpers::first_non_empty;
///
/// let color = first_non_empty(["", "", "#6F3948"]);
/// assert_eq!(color, Some("#6F3948"));
/// ```
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().find(|s| !s.is_empty())
}

/// True when every character is an ASCII digit. The empty string passes
/// vacuously.
pub fn is_digits_only(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Render an optional value, or the empty string when absent.
pub fn display_or_empty<T: Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
