//! Listing order and search terms, parsed from query parameters.

use std::cmp::Reverse;
use std::str::FromStr;

use super::error::ApiError;
use super::model::{Field, Post};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ApiError::InvalidDirection(other.to_owned())),
        }
    }
}

/// A requested sort over one text field, compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: Field,
    pub direction: Direction,
}

impl SortOrder {
    /// Parses the `sort` and `direction` query values.
    ///
    /// Empty values count as absent. `direction` is validated even when there
    /// is nothing to sort by, and `Ok(None)` means insertion order.
    pub fn parse(sort: Option<&str>, direction: Option<&str>) -> Result<Option<Self>, ApiError> {
        let direction = match non_empty(direction) {
            Some(d) => d.parse()?,
            None => Direction::default(),
        };
        match non_empty(sort) {
            Some(field) => Ok(Some(Self { field: field.parse()?, direction })),
            None => Ok(None),
        }
    }

    /// Sorts in place. Stable: posts with equal keys keep their relative order.
    pub fn apply(&self, posts: &mut [Post]) {
        let field = self.field;
        match self.direction {
            Direction::Asc => posts.sort_by_cached_key(|p| p.field(field).to_lowercase()),
            Direction::Desc => posts.sort_by_cached_key(|p| Reverse(p.field(field).to_lowercase())),
        }
    }
}

/// Search terms, each matched as a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    title: Option<String>,
    content: Option<String>,
}

impl SearchQuery {
    pub fn new(title: Option<&str>, content: Option<&str>) -> Self {
        Self {
            title: non_empty(title).map(str::to_lowercase),
            content: non_empty(content).map(str::to_lowercase),
        }
    }

    /// A post matches when its title contains the title term or its content
    /// contains the content term. With no terms nothing matches.
    pub fn matches(&self, post: &Post) -> bool {
        let hit = |term: &Option<String>, text: &str| {
            term.as_deref().is_some_and(|t| text.to_lowercase().contains(t))
        };
        hit(&self.title, &post.title) || hit(&self.content, &post.content)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, content: &str) -> Post {
        Post { id, title: title.into(), content: content.into() }
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn parse_defaults_to_ascending() {
        let order = SortOrder::parse(Some("title"), None).unwrap().unwrap();
        assert_eq!(order.direction, Direction::Asc);
        assert_eq!(SortOrder::parse(None, None), Ok(None));
        assert_eq!(SortOrder::parse(Some(""), Some("")), Ok(None));
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert_eq!(
            SortOrder::parse(Some("unknown"), None),
            Err(ApiError::InvalidSortField("unknown".into()))
        );
        assert_eq!(
            SortOrder::parse(Some("title"), Some("down")),
            Err(ApiError::InvalidDirection("down".into()))
        );
        assert_eq!(
            SortOrder::parse(None, Some("DESC")),
            Err(ApiError::InvalidDirection("DESC".into()))
        );
    }

    #[test]
    fn sorts_case_insensitively_both_ways() {
        let mut posts = vec![post(1, "banana", ""), post(2, "Apple", ""), post(3, "cherry", "")];
        SortOrder { field: Field::Title, direction: Direction::Asc }.apply(&mut posts);
        assert_eq!(ids(&posts), [2, 1, 3]);
        SortOrder { field: Field::Title, direction: Direction::Desc }.apply(&mut posts);
        assert_eq!(ids(&posts), [3, 1, 2]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut posts = vec![post(1, "", "same"), post(2, "", "SAME"), post(3, "", "a")];
        SortOrder { field: Field::Content, direction: Direction::Desc }.apply(&mut posts);
        assert_eq!(ids(&posts), [1, 2, 3]);
    }

    #[test]
    fn search_is_an_or_of_present_terms() {
        let first = post(1, "First post", "This is the first post.");
        let second = post(2, "Second post", "This is the second post.");

        let q = SearchQuery::new(Some("FIRST"), None);
        assert!(q.matches(&first));
        assert!(!q.matches(&second));

        let q = SearchQuery::new(Some("nothing"), Some("second"));
        assert!(!q.matches(&first));
        assert!(q.matches(&second));
    }

    #[test]
    fn search_without_terms_matches_nothing() {
        let q = SearchQuery::new(None, Some(""));
        assert!(!q.matches(&post(1, "a", "b")));
    }
}
