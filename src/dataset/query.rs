//! Translation of the `col=val,col=val` search line into constraints.

/// Which columns a filtered view should expose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnScope {
    /// Show every column of the backing table.
    #[default]
    AllColumns,
    /// Show only the columns named by the search constraints.
    SearchedColumns,
}

impl ColumnScope {
    /// Human-readable label used by the scope selector.
    pub fn label(self) -> &'static str {
        match self {
            ColumnScope::AllColumns => "Display All Columns",
            ColumnScope::SearchedColumns => "Searched Columns Only",
        }
    }
}

/// An ordered set of column/substring constraints.
///
/// Constraint order follows first occurrence in the entry; a repeated column
/// keeps its position but takes the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    constraints: Vec<(String, String)>,
}

impl SearchQuery {
    /// Parse a user-entered search line.
    ///
    /// Clauses are separated by `,`; a clause with exactly one `=` contributes
    /// a constraint, anything else is dropped silently. An empty entry yields
    /// an empty query; callers treat that as "reset to the unfiltered view",
    /// never as "match everything".
    pub fn parse(entry: &str) -> Self {
        let mut query = Self::default();
        for clause in entry.split(',') {
            let parts: Vec<&str> = clause.split('=').collect();
            let [column, needle] = parts[..] else {
                continue;
            };
            query.insert(column, needle);
        }
        query
    }

    fn insert(&mut self, column: &str, needle: &str) {
        if let Some(slot) = self
            .constraints
            .iter_mut()
            .find(|(existing, _)| existing == column)
        {
            slot.1 = needle.to_string();
        } else {
            self.constraints
                .push((column.to_string(), needle.to_string()));
        }
    }

    /// True when no clause survived parsing.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints in iteration order.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.constraints
            .iter()
            .map(|(column, needle)| (column.as_str(), needle.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &SearchQuery) -> Vec<(String, String)> {
        query
            .constraints()
            .map(|(c, n)| (c.to_string(), n.to_string()))
            .collect()
    }

    #[test]
    fn parses_comma_separated_pairs() {
        let query = SearchQuery::parse("country=PH,year=2020");
        assert_eq!(
            pairs(&query),
            vec![
                ("country".to_string(), "PH".to_string()),
                ("year".to_string(), "2020".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_clause_is_dropped() {
        let query = SearchQuery::parse("badclause,year=2020");
        assert_eq!(pairs(&query), vec![("year".to_string(), "2020".to_string())]);
    }

    #[test]
    fn clause_with_two_equals_is_dropped() {
        let query = SearchQuery::parse("a=b=c,year=2020");
        assert_eq!(pairs(&query), vec![("year".to_string(), "2020".to_string())]);
    }

    #[test]
    fn repeated_column_keeps_position_takes_last_value() {
        let query = SearchQuery::parse("a=1,b=2,a=3");
        assert_eq!(
            pairs(&query),
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn empty_entry_is_empty_query() {
        assert!(SearchQuery::parse("").is_empty());
    }
}
