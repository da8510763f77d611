//! Query construction.
//!
//! Builds the three pieces a media index query needs besides the collection:
//! the projection, the selection (a template with `?` placeholders plus the
//! values to bind) and the order-by clause.
//!
//! Search terms are never escaped or spliced into templates. They travel as
//! bound arguments, and the [`MediaStore`](bridge_traits::MediaStore) binds
//! them as literals.

use crate::sort::SortOrder;

/// Wildcard appended to search terms for prefix matching.
pub const WILDCARD: char = '%';

/// Order-by clause for `sort`.
pub fn build_sort_clause<S: SortOrder>(sort: S) -> String {
    sort.order_by()
}

/// Prefix-match selection on `column` for `term`.
///
/// ```
/// use core_library::query::build_search_predicate;
///
/// let predicate = build_search_predicate("name", "Ja");
/// assert_eq!(predicate.template(), Some("name LIKE ?"));
/// assert_eq!(predicate.args(), ["Ja%"]);
/// ```
pub fn build_search_predicate(column: &str, term: &str) -> SelectionPredicate {
    SelectionPredicate::starts_with(column, term)
}

/// Parameterized filter: a WHERE template plus its ordered arguments.
///
/// The number of arguments always equals the number of `?` placeholders in
/// the template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionPredicate {
    template: Option<String>,
    args: Vec<String>,
}

impl SelectionPredicate {
    /// Selects every row.
    pub fn none() -> Self {
        Self::default()
    }

    /// `<column> LIKE ?` bound to `term%`.
    pub fn starts_with(column: &str, term: &str) -> Self {
        Self::from_parts(
            format!("{} LIKE ?", column),
            vec![format!("{}{}", term, WILDCARD)],
        )
    }

    /// `<column> = ?` bound to `value`.
    pub fn equals(column: &str, value: &str) -> Self {
        Self::from_parts(format!("{} = ?", column), vec![value.to_string()])
    }

    /// `<column> IN (?, ?, ...)` with one placeholder per value.
    ///
    /// An empty `values` renders `<column> IN ()`, which matches nothing.
    pub fn any_of<I, V>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let args: Vec<String> = values.into_iter().map(Into::into).collect();
        let placeholders = vec!["?"; args.len()].join(", ");
        Self::from_parts(format!("{} IN ({})", column, placeholders), args)
    }

    fn from_parts(template: String, args: Vec<String>) -> Self {
        debug_assert_eq!(count_placeholders(&template), args.len());
        Self {
            template: Some(template),
            args,
        }
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn placeholder_count(&self) -> usize {
        self.template.as_deref().map_or(0, count_placeholders)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.template.is_none()
    }

    pub fn into_parts(self) -> (Option<String>, Vec<String>) {
        (self.template, self.args)
    }
}

fn count_placeholders(template: &str) -> usize {
    template.matches('?').count()
}

/// Ordered set of projected columns for one entity.
///
/// The column names double as the field names of the produced
/// [`MediaRecord`](crate::record::MediaRecord)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    columns: &'static [&'static str],
}

impl Projection {
    pub const fn new(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn render(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.to_string()).collect()
    }

    /// Renders the projection with a `DISTINCT` modifier on the first column,
    /// so the index produces `SELECT DISTINCT a, b ...`.
    pub fn render_distinct(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if index == 0 {
                    format!("DISTINCT {}", column)
                } else {
                    column.to_string()
                }
            })
            .collect()
    }
}
