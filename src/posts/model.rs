//! Post records and the request bodies that create or change them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }
}

/// The text fields of a post. Also the set of fields a listing can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }

    /// Capitalized name used at the start of error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Content => "Content",
        }
    }
}

impl FromStr for Field {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ApiError::InvalidSortField(s.to_owned()))
    }
}

/// A validated create body. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }

    /// Validates a create body, `None` meaning absent or not JSON. The body
    /// is checked first, then `title`, then `content`; the first failure
    /// wins. An empty object counts as no body.
    pub fn from_body(body: Option<Value>) -> Result<Self, ApiError> {
        let mut object = json_object(body)?;
        if object.is_empty() {
            return Err(ApiError::BodyNotJson);
        }
        let title = text_field(&mut object, Field::Title)?
            .ok_or(ApiError::MissingField(Field::Title))?;
        let content = text_field(&mut object, Field::Content)?
            .ok_or(ApiError::MissingField(Field::Content))?;
        Ok(Self { title, content })
    }
}

/// A partial update. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Validates an update body, `None` meaning absent or not JSON. An empty
    /// object is a valid patch that changes nothing.
    pub fn from_body(body: Option<Value>) -> Result<Self, ApiError> {
        let mut object = json_object(body)?;
        Ok(Self {
            title: text_field(&mut object, Field::Title)?,
            content: text_field(&mut object, Field::Content)?,
        })
    }

    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

/// The posts every process starts with.
pub fn seed() -> Vec<NewPost> {
    vec![
        NewPost::new("First post", "This is the first post."),
        NewPost::new("Second post", "This is the second post."),
    ]
}

fn json_object(body: Option<Value>) -> Result<Map<String, Value>, ApiError> {
    match body {
        Some(Value::Object(object)) => Ok(object),
        _ => Err(ApiError::BodyNotJson),
    }
}

/// `null` counts as absent. Unknown keys are ignored.
fn text_field(object: &mut Map<String, Value>, field: Field) -> Result<Option<String>, ApiError> {
    match object.remove(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(ApiError::NotText(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> Option<Value> {
        serde_json::from_str(text).ok()
    }

    #[test]
    fn create_body_requires_json_object() {
        assert_eq!(NewPost::from_body(body("")), Err(ApiError::BodyNotJson));
        assert_eq!(NewPost::from_body(body("not json")), Err(ApiError::BodyNotJson));
        assert_eq!(NewPost::from_body(body("[1, 2]")), Err(ApiError::BodyNotJson));
        assert_eq!(NewPost::from_body(body("null")), Err(ApiError::BodyNotJson));
    }

    #[test]
    fn empty_create_body_is_not_a_body() {
        assert_eq!(NewPost::from_body(body("{}")), Err(ApiError::BodyNotJson));
    }

    #[test]
    fn create_body_checks_title_before_content() {
        assert_eq!(
            NewPost::from_body(body(r#"{"content": "x"}"#)),
            Err(ApiError::MissingField(Field::Title))
        );
        assert_eq!(
            NewPost::from_body(body(r#"{"title": "x"}"#)),
            Err(ApiError::MissingField(Field::Content))
        );
        assert_eq!(
            NewPost::from_body(body(r#"{"title": null, "content": "x"}"#)),
            Err(ApiError::MissingField(Field::Title))
        );
    }

    #[test]
    fn create_body_rejects_non_text_fields() {
        assert_eq!(
            NewPost::from_body(body(r#"{"title": 7, "content": "x"}"#)),
            Err(ApiError::NotText(Field::Title))
        );
    }

    #[test]
    fn create_body_ignores_extra_keys() {
        let post = NewPost::from_body(body(r#"{"id": 99, "title": "t", "content": "c"}"#)).unwrap();
        assert_eq!(post, NewPost::new("t", "c"));
    }

    #[test]
    fn empty_patch_is_allowed() {
        assert_eq!(PostPatch::from_body(body("{}")), Ok(PostPatch::default()));
        assert_eq!(PostPatch::from_body(body("")), Err(ApiError::BodyNotJson));
    }

    #[test]
    fn patch_rejects_non_text_fields() {
        assert_eq!(
            PostPatch::from_body(body(r#"{"title": 7}"#)),
            Err(ApiError::NotText(Field::Title))
        );
        assert_eq!(
            PostPatch::from_body(body(r#"{"title": "ok", "content": ["x"]}"#)),
            Err(ApiError::NotText(Field::Content))
        );
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut post = Post { id: 1, title: "a".into(), content: "b".into() };
        PostPatch::from_body(body(r#"{"title": "X"}"#)).unwrap().apply(&mut post);
        assert_eq!(post, Post { id: 1, title: "X".into(), content: "b".into() });
    }

    #[test]
    fn sort_field_names() {
        assert_eq!("title".parse::<Field>(), Ok(Field::Title));
        assert_eq!("content".parse::<Field>(), Ok(Field::Content));
        assert_eq!(
            "Title".parse::<Field>(),
            Err(ApiError::InvalidSortField("Title".into()))
        );
    }
}
