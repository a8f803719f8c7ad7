//! SQL parameter values and their literal rendering.
//!
//! [`SqlValue`] is the bridge between caller-side values and SQL text.
//! Scalars render to their canonical textual form; text goes through the
//! caller's escape routine; collections render as a parenthesized,
//! comma-joined list of their elements (the shape an `IN (...)` clause
//! expects).

/// A value destined for a SQL template placeholder.
///
/// `Text` is the only variant that touches the escape collaborator; all
/// other scalars render as unquoted tokens. `Raw` exists for values whose
/// textual form the caller has already produced (dates, database functions)
/// and is emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// A string value; rendered by the escape collaborator, which returns
    /// the complete quoted literal.
    Text(String),
    /// An integer; rendered unquoted.
    Int(i64),
    /// A floating-point number; rendered unquoted.
    Float(f64),
    /// A boolean; rendered unquoted as `true`/`false`.
    Bool(bool),
    /// An absent value; rendered as the literal `null`.
    Null,
    /// A pre-rendered token, emitted verbatim.
    Raw(String),
    /// An ordered collection; rendered as `(elem,elem,...)`.
    List(Vec<SqlValue>),
}

/// Render a value as a SQL-literal token.
///
/// `escape` is the external escape collaborator: given raw text it must
/// return a string safely embeddable as a SQL string literal, delimiting
/// quotes included. This function never adds quotes of its own.
///
/// ## Examples
///
/// ```
/// use grout::sql::{render_sql_param, SqlValue};
///
/// let quote = |raw: &str| format!("'{}'", raw.replace('\'', "''"));
///
/// assert_eq!(render_sql_param(&SqlValue::Int(42), &quote), "42");
/// assert_eq!(render_sql_param(&SqlValue::from("it's"), &quote), "'it''s'");
/// assert_eq!(
///     render_sql_param(&SqlValue::from(vec![1, 2, 3]), &quote),
///     "(1,2,3)"
/// );
/// ```
pub fn render_sql_param<E>(value: &SqlValue, escape: &E) -> String
where
    E: Fn(&str) -> String,
{
    match value {
        SqlValue::Text(text) => escape(text),
        SqlValue::Int(n) => n.to_string(),
        SqlValue::Float(n) => n.to_string(),
        SqlValue::Bool(b) => b.to_string(),
        SqlValue::Null => "null".to_string(),
        SqlValue::Raw(token) => token.clone(),
        SqlValue::List(items) => {
            let rendered: Vec<String> =
                items.iter().map(|item| render_sql_param(item, escape)).collect();
            format!("({})", rendered.join(","))
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => SqlValue::Null,
        }
    }
}

impl<T> From<Vec<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(values: Vec<T>) -> Self {
        SqlValue::List(values.into_iter().map(Into::into).collect())
    }
}
