/// A row predicate, rendered into one query-string pair of the data
/// API's filter grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Column equals value.
    Eq(String, String),
    /// Column contains the given substring, case-insensitively.
    IlikeContains(String, String),
    /// Column is null.
    IsNull(String),
    /// Column is not null.
    NotNull(String),
    /// Column value is a member of the given list.
    In(String, Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl Filter {
    /// Render into a `(column, predicate)` query pair.
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Filter::Eq(column, value) => (column.clone(), format!("eq.{value}")),
            Filter::IlikeContains(column, needle) => {
                (column.clone(), format!("ilike.*{needle}*"))
            }
            Filter::IsNull(column) => (column.clone(), "is.null".to_string()),
            Filter::NotNull(column) => (column.clone(), "not.is.null".to_string()),
            Filter::In(column, values) => {
                let quoted: Vec<String> = values
                    .iter()
                    .map(|value| format!("\"{}\"", value.replace('"', "\\\"")))
                    .collect();
                (column.clone(), format!("in.({})", quoted.join(",")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_equality() {
        let pair = Filter::Eq("tpo_time".into(), "업무후".into()).to_query_pair();
        assert_eq!(pair, ("tpo_time".to_string(), "eq.업무후".to_string()));
    }

    #[test]
    fn renders_substring_match() {
        let pair =
            Filter::IlikeContains("content".into(), "소화기 비치".into()).to_query_pair();
        assert_eq!(pair.1, "ilike.*소화기 비치*");
    }

    #[test]
    fn renders_null_checks() {
        assert_eq!(Filter::IsNull("assignee".into()).to_query_pair().1, "is.null");
        assert_eq!(
            Filter::NotNull("assignee".into()).to_query_pair().1,
            "not.is.null"
        );
    }

    #[test]
    fn renders_membership_with_quoted_values() {
        let pair = Filter::In(
            "status".into(),
            vec!["waiting".into(), "non_compliant".into(), "completed".into()],
        )
        .to_query_pair();
        assert_eq!(pair.1, "in.(\"waiting\",\"non_compliant\",\"completed\")");
    }

    #[test]
    fn escapes_quotes_inside_membership_values() {
        let pair = Filter::In("name".into(), vec!["a\"b".into()]).to_query_pair();
        assert_eq!(pair.1, "in.(\"a\\\"b\")");
    }
}
