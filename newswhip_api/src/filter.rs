//! Compiles structured filters into the Lucene-style query strings accepted by
//! the `articles` and `stats` endpoints.
//!
//! ```
//! use newswhip_api::{Filter, FilterField};
//!
//! let filter = Filter::terms()
//!     .with_field(FilterField::Language, "en")
//!     .with_field(FilterField::Categories, ["tech", "science"]);
//! assert_eq!(
//!     filter.compile(true).unwrap(),
//!     "language: en AND categories: (tech OR science)"
//! );
//! ```

use crate::{definitions::FilterField, Error};

/// Value of a single filter term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    /// A word or phrase. Phrases are quoted when auto-formatting.
    One(String),
    /// A group of alternatives, rendered in parentheses.
    AnyOf(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::One(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::One(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::AnyOf(values)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(values: &[&str]) -> Self {
        FilterValue::AnyOf(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
    fn from(values: [&str; N]) -> Self {
        FilterValue::AnyOf(values.iter().map(|v| v.to_string()).collect())
    }
}

/// One term of a filter, optionally scoped to a field.
///
/// The field is kept as a string so that names coming from user input are
/// validated at compile time rather than at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterTerm {
    pub field: Option<String>,
    pub value: FilterValue,
}

/// Filter input for the `articles` and `stats` endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// A raw search term.
    Raw(String),
    /// Terms joined with `AND`, in insertion order.
    Terms(Vec<FilterTerm>),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Terms(Vec::new())
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::Raw(value.to_string())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::Raw(value)
    }
}

impl Filter {
    pub fn raw(term: &str) -> Self {
        Filter::Raw(term.to_string())
    }

    /// An empty term list, to be extended with `with_*`.
    pub fn terms() -> Self {
        Filter::Terms(Vec::new())
    }

    /// Appends a field-scoped term.
    pub fn with_field(self, field: FilterField, value: impl Into<FilterValue>) -> Self {
        self.push(Some(field.as_str().to_string()), value.into())
    }

    /// Appends a term scoped to a field given by name. Unknown names are
    /// rejected by [`Filter::compile`].
    pub fn with_named_field(self, field: &str, value: impl Into<FilterValue>) -> Self {
        self.push(Some(field.to_string()), value.into())
    }

    /// Appends a term with no field scope.
    pub fn with_term(self, value: impl Into<FilterValue>) -> Self {
        self.push(None, value.into())
    }

    fn push(self, field: Option<String>, value: FilterValue) -> Self {
        let mut terms = match self {
            Filter::Terms(terms) => terms,
            // A raw term becomes the first unscoped term of the list.
            Filter::Raw(raw) => vec![FilterTerm {
                field: None,
                value: FilterValue::One(raw),
            }],
        };
        terms.push(FilterTerm { field, value });
        Filter::Terms(terms)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Filter::Raw(raw) => raw.trim().is_empty(),
            Filter::Terms(terms) => terms.is_empty(),
        }
    }

    /// Renders the filter as a query string.
    ///
    /// With `auto_format`, multi-word values are wrapped in double quotes and
    /// groups are joined with `OR`. Without it, values pass through as given
    /// and groups are joined with a single space.
    pub fn compile(&self, auto_format: bool) -> Result<String, Error> {
        if self.is_empty() {
            return Err(Error::Validation(
                "filters should be a non-empty set of terms or a string".to_string(),
            ));
        }

        match self {
            Filter::Raw(raw) => Ok(format_phrase(raw, auto_format)),
            Filter::Terms(terms) => {
                let compiled = terms
                    .iter()
                    .map(|term| compile_term(term, auto_format))
                    .collect::<Result<Vec<_>, _>>()?
                    .join(" AND ");
                if compiled.trim().is_empty() {
                    return Err(Error::Validation(
                        "At least one filter must be passed".to_string(),
                    ));
                }
                Ok(compiled)
            }
        }
    }
}

fn compile_term(term: &FilterTerm, auto_format: bool) -> Result<String, Error> {
    let prefix = match term.field.as_deref() {
        Some(field) if !field.is_empty() => {
            let field: FilterField = field.parse()?;
            format!("{}: ", field)
        }
        _ => String::new(),
    };

    let value = match &term.value {
        FilterValue::One(value) => {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "empty value for filter term {}",
                    prefix.trim_end_matches(": ")
                )));
            }
            format_phrase(value, auto_format)
        }
        FilterValue::AnyOf(values) => {
            if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
                return Err(Error::Validation(format!(
                    "empty value group for filter term {}",
                    prefix.trim_end_matches(": ")
                )));
            }
            let separator = if auto_format { " OR " } else { " " };
            format!("({})", values.join(separator))
        }
    };

    Ok(format!("{}{}", prefix, value))
}

fn format_phrase(value: &str, auto_format: bool) -> String {
    if auto_format && value.split_whitespace().count() > 1 {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_is_never_quoted() {
        assert_eq!(Filter::raw("election").compile(true).unwrap(), "election");
        assert_eq!(Filter::raw("election").compile(false).unwrap(), "election");
    }

    #[test]
    fn phrase_is_quoted_only_when_auto_formatting() {
        insta::assert_snapshot!(
            Filter::raw("climate change").compile(true).unwrap(),
            @r#""climate change""#
        );
        assert_eq!(
            Filter::raw("climate change").compile(false).unwrap(),
            "climate change"
        );
    }

    #[test]
    fn field_group_uses_or() {
        let filter = Filter::terms().with_field(FilterField::Publisher, ["cnn", "bbc"]);
        insta::assert_snapshot!(filter.compile(true).unwrap(), @"publisher: (cnn OR bbc)");
        insta::assert_snapshot!(filter.compile(false).unwrap(), @"publisher: (cnn bbc)");
    }

    #[test]
    fn terms_keep_insertion_order() {
        let filter = Filter::terms()
            .with_field(FilterField::Language, "en")
            .with_field(FilterField::Categories, ["tech", "science"]);
        assert_eq!(
            filter.compile(true).unwrap(),
            "language: en AND categories: (tech OR science)"
        );

        let reversed = Filter::terms()
            .with_field(FilterField::Categories, ["tech", "science"])
            .with_field(FilterField::Language, "en");
        assert_eq!(
            reversed.compile(true).unwrap(),
            "categories: (tech OR science) AND language: en"
        );
    }

    #[test]
    fn field_phrase_quoting() {
        let filter = Filter::terms()
            .with_field(FilterField::Headline, "world cup")
            .with_term("final");
        assert_eq!(
            filter.compile(true).unwrap(),
            "headline: \"world cup\" AND final"
        );
        assert_eq!(
            filter.compile(false).unwrap(),
            "headline: world cup AND final"
        );
    }

    #[test]
    fn unscoped_group() {
        let filter = Filter::terms().with_term(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(filter.compile(true).unwrap(), "(a OR b)");
    }

    #[test]
    fn empty_field_name_means_unscoped() {
        let filter = Filter::terms().with_named_field("", "brexit");
        assert_eq!(filter.compile(true).unwrap(), "brexit");
    }

    #[test]
    fn raw_then_terms_appends() {
        let filter = Filter::raw("brexit").with_field(FilterField::Language, "en");
        assert_eq!(filter.compile(true).unwrap(), "brexit AND language: en");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Filter::terms().compile(true), Err(Error::Validation(_))));
        assert!(matches!(Filter::raw("").compile(true), Err(Error::Validation(_))));
        assert!(matches!(Filter::raw("   ").compile(false), Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_unknown_field() {
        let filter = Filter::terms().with_named_field("bogus_field", "x");
        match filter.compile(true) {
            Err(Error::Validation(msg)) => assert!(msg.contains("bogus_field")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_blank_term_values() {
        let blank_term = Filter::terms().with_term("");
        assert!(matches!(blank_term.compile(true), Err(Error::Validation(_))));
        assert!(matches!(blank_term.compile(false), Err(Error::Validation(_))));

        let blank_field = Filter::terms().with_field(FilterField::Language, "");
        assert!(matches!(blank_field.compile(true), Err(Error::Validation(_))));

        let whitespace_field = Filter::terms().with_field(FilterField::Headline, "  ");
        assert!(matches!(whitespace_field.compile(true), Err(Error::Validation(_))));

        let blank_member = Filter::terms().with_field(FilterField::Publisher, ["cnn", ""]);
        assert!(matches!(blank_member.compile(true), Err(Error::Validation(_))));

        let only_blank_member = Filter::terms().with_term(vec![" ".to_string()]);
        assert!(matches!(only_blank_member.compile(false), Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_empty_group() {
        let filter = Filter::terms().with_field(FilterField::Domain, Vec::<String>::new());
        assert!(matches!(filter.compile(true), Err(Error::Validation(_))));
    }
}
