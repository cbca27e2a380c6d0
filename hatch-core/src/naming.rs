//! Naming conventions used to keep generated identifiers valid.

use std::fmt;

use crate::{Error, Result};

/// Separator convention a project name is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `my-project`
    DashCase,
    /// `my_project`
    SnakeCase,
}

impl Convention {
    /// The word separator for this convention.
    pub fn separator(self) -> char {
        match self {
            Convention::DashCase => '-',
            Convention::SnakeCase => '_',
        }
    }

    /// Guess the convention of a name: dash-case only when dashes are the sole separator.
    pub fn detect(name: &str) -> Self {
        if name.contains('-') && !name.contains('_') {
            Convention::DashCase
        } else {
            Convention::SnakeCase
        }
    }
}

/// A separator-free, capitalized identifier (e.g., "my_app" -> "MyApp").
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TitleCaseIdentifier(String);

impl TitleCaseIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TitleCaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TitleCaseIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Convert a name written in `convention` to a TitleCase identifier.
///
/// Names containing the separator are split into words; each word gets an
/// uppercase first character and a lowercased remainder. A name without the
/// separator only has its first character uppercased, so the function is
/// stable when applied to its own output.
pub fn to_title_case_identifier(input: &str, convention: Convention) -> TitleCaseIdentifier {
    let separator = convention.separator();

    let converted = if input.contains(separator) {
        input.split(separator).map(capitalize_word).collect()
    } else {
        capitalize_first(input)
    };

    TitleCaseIdentifier(converted)
}

/// Convert a snake_case name to TitleCase (e.g., "my_cool_project" -> "MyCoolProject")
pub fn snake_case_to_title_case(s: &str) -> String {
    to_title_case_identifier(s, Convention::SnakeCase).into_string()
}

/// Convert a dash-case name to TitleCase (e.g., "my-cool-project" -> "MyCoolProject")
pub fn dash_case_to_title_case(s: &str) -> String {
    to_title_case_identifier(s, Convention::DashCase).into_string()
}

/// Convert a name to snake_case (e.g., "My-App" -> "my_app")
pub fn to_snake_case(s: &str) -> String {
    s.replace('-', "_").to_lowercase()
}

/// Convert a name to dash-case (e.g., "My_App" -> "my-app")
pub fn to_dash_case(s: &str) -> String {
    s.replace('_', "-").to_lowercase()
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Byte index of the `n`th (1-based) occurrence of `needle` in `haystack`.
///
/// Returns `Ok(None)` when there are fewer than `n` occurrences and
/// [`Error::InvalidArgument`] when `n` is zero.
pub fn find_nth_occurrence(haystack: &str, needle: char, n: usize) -> Result<Option<usize>> {
    if n == 0 {
        return Err(Error::invalid_argument(
            "occurrence count must be at least 1",
        ));
    }

    let mut start = 0;
    let mut found = None;
    for _ in 0..n {
        match haystack[start..].find(needle) {
            Some(offset) => {
                let idx = start + offset;
                found = Some(idx);
                start = idx + needle.len_utf8();
            }
            None => return Ok(None),
        }
    }

    Ok(found)
}

/// Every spelling of a project name the templates need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    /// Package name as typed by the user (also the directory name)
    pub package: String,
    /// Prefix for generated type names (e.g., `MyAppError`)
    pub type_prefix: TitleCaseIdentifier,
}

impl ProjectNames {
    pub fn new(package: impl Into<String>) -> Self {
        let package = package.into();
        // only the separators are unified; letter case is left to the converter
        let type_prefix =
            to_title_case_identifier(&package.replace('-', "_"), Convention::SnakeCase);

        Self {
            package,
            type_prefix,
        }
    }

    /// The generated error type name (e.g., `MyAppError`)
    pub fn error_type(&self) -> String {
        format!("{}Error", self.type_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_to_title_case() {
        assert_eq!(snake_case_to_title_case("my_cool_project"), "MyCoolProject");
        assert_eq!(snake_case_to_title_case("hello"), "Hello");
        assert_eq!(snake_case_to_title_case("MY_APP"), "MyApp");
        assert_eq!(snake_case_to_title_case(""), "");
    }

    #[test]
    fn test_dash_case_to_title_case() {
        assert_eq!(dash_case_to_title_case("my-cool-project"), "MyCoolProject");
        assert_eq!(dash_case_to_title_case("api-V2"), "ApiV2");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(snake_case_to_title_case("a"), "A");
        assert_eq!(dash_case_to_title_case("z"), "Z");
    }

    #[test]
    fn test_single_word_keeps_remainder() {
        assert_eq!(snake_case_to_title_case("myApp"), "MyApp");
        assert_eq!(dash_case_to_title_case("myApp"), "MyApp");
    }

    #[test]
    fn test_other_characters_pass_through() {
        assert_eq!(snake_case_to_title_case("web_2_go"), "Web2Go");
        // dashes are not the snake separator
        assert_eq!(snake_case_to_title_case("my-app_x"), "My-appX");
        assert_eq!(dash_case_to_title_case("my_app-x"), "My_appX");
    }

    #[test]
    fn test_repeated_separators() {
        assert_eq!(snake_case_to_title_case("my__app_"), "MyApp");
        assert_eq!(dash_case_to_title_case("-leading"), "Leading");
    }

    #[test]
    fn test_separator_removed_and_first_uppercase() {
        let cases = [
            (Convention::SnakeCase, ["a_b", "_x", "foo_bar_baz", "1st_place", "x_"]),
            (Convention::DashCase, ["a-b", "-x", "foo-bar-baz", "1st-place", "x-"]),
        ];
        for (convention, inputs) in cases {
            for input in inputs {
                let out = to_title_case_identifier(input, convention);
                assert!(!out.as_str().contains(convention.separator()), "{input} -> {out}");
                let first = out.as_str().chars().next().unwrap();
                assert_eq!(first.to_uppercase().next().unwrap(), first, "{input} -> {out}");
            }
        }
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for input in ["my_cool_project", "x", "web_2_go", "already"] {
            let once = to_title_case_identifier(input, Convention::SnakeCase);
            let twice = to_title_case_identifier(once.as_str(), Convention::SnakeCase);
            let thrice = to_title_case_identifier(twice.as_str(), Convention::SnakeCase);
            assert_eq!(once, twice);
            assert_eq!(twice, thrice);
        }
    }

    #[test]
    fn test_to_snake_and_dash_case() {
        assert_eq!(to_snake_case("My-Cool-App"), "my_cool_app");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_dash_case("My_Cool_App"), "my-cool-app");
    }

    #[test]
    fn test_detect_convention() {
        assert_eq!(Convention::detect("my-app"), Convention::DashCase);
        assert_eq!(Convention::detect("my_app"), Convention::SnakeCase);
        assert_eq!(Convention::detect("my-app_x"), Convention::SnakeCase);
        assert_eq!(Convention::detect("app"), Convention::SnakeCase);
    }

    #[test]
    fn test_find_nth_occurrence() {
        assert_eq!(find_nth_occurrence("a;b;c;", ';', 1).unwrap(), Some(1));
        assert_eq!(find_nth_occurrence("a;b;c;", ';', 2).unwrap(), Some(3));
        assert_eq!(find_nth_occurrence("a;b;c;", ';', 3).unwrap(), Some(5));
        assert_eq!(find_nth_occurrence("a;b", ';', 5).unwrap(), None);
        assert_eq!(find_nth_occurrence("", ';', 1).unwrap(), None);
    }

    #[test]
    fn test_find_nth_occurrence_adjacent_and_multibyte() {
        assert_eq!(find_nth_occurrence(";;;", ';', 3).unwrap(), Some(2));
        assert_eq!(find_nth_occurrence("é;é;", ';', 2).unwrap(), Some(5));
    }

    #[test]
    fn test_find_nth_occurrence_zero_is_invalid() {
        let err = find_nth_occurrence("a;b", ';', 0).unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_project_names() {
        let names = ProjectNames::new("my-cool_app");
        assert_eq!(names.package, "my-cool_app");
        assert_eq!(names.type_prefix.as_str(), "MyCoolApp");
        assert_eq!(names.error_type(), "MyCoolAppError");
    }

    #[test]
    fn test_project_names_single_word() {
        let names = ProjectNames::new("server");
        assert_eq!(names.type_prefix.as_str(), "Server");
        assert_eq!(names.error_type(), "ServerError");
    }

    #[test]
    fn test_project_names_keep_inner_capitals() {
        let names = ProjectNames::new("myApp");
        assert_eq!(
            names.type_prefix,
            to_title_case_identifier("myApp", Convention::SnakeCase)
        );
        assert_eq!(names.error_type(), "MyAppError");

        assert_eq!(ProjectNames::new("my-App").error_type(), "MyAppError");
    }
}
