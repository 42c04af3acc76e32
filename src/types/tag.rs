use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;

/// Tag applied to an auto-scaling group, optionally propagated to the
/// instances it launches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Only `auto-scaling-group` is supported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate_at_launch: Option<bool>,
}

impl Tag {
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TagBuilder {
    tag: Tag,
}

impl TagBuilder {
    pub fn resource_id(mut self, value: impl Into<String>) -> Self {
        self.tag.resource_id = Some(value.into());
        self
    }

    pub fn resource_type(mut self, value: impl Into<String>) -> Self {
        self.tag.resource_type = Some(value.into());
        self
    }

    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.tag.key = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.tag.value = Some(value.into());
        self
    }

    pub fn propagate_at_launch(mut self, value: bool) -> Self {
        self.tag.propagate_at_launch = Some(value);
        self
    }

    pub fn build(self) -> Tag {
        self.tag
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("ResourceId", &self.resource_id);
        w.field("ResourceType", &self.resource_type);
        w.field("Key", &self.key);
        w.field("Value", &self.value);
        w.field("PropagateAtLaunch", &self.propagate_at_launch);
        w.finish(f)
    }
}

/// Tag of an existing group, as returned by the describe operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate_at_launch: Option<bool>,
}

impl TagDescription {
    pub fn builder() -> TagDescriptionBuilder {
        TagDescriptionBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TagDescriptionBuilder {
    tag: TagDescription,
}

impl TagDescriptionBuilder {
    pub fn resource_id(mut self, value: impl Into<String>) -> Self {
        self.tag.resource_id = Some(value.into());
        self
    }

    pub fn resource_type(mut self, value: impl Into<String>) -> Self {
        self.tag.resource_type = Some(value.into());
        self
    }

    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.tag.key = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.tag.value = Some(value.into());
        self
    }

    pub fn propagate_at_launch(mut self, value: bool) -> Self {
        self.tag.propagate_at_launch = Some(value);
        self
    }

    pub fn build(self) -> TagDescription {
        self.tag
    }
}

impl fmt::Display for TagDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("ResourceId", &self.resource_id);
        w.field("ResourceType", &self.resource_type);
        w.field("Key", &self.key);
        w.field("Value", &self.value);
        w.field("PropagateAtLaunch", &self.propagate_at_launch);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builder_matches_field_assignment() {
        let built = Tag::builder()
            .key("Name")
            .value("web")
            .propagate_at_launch(true)
            .build();
        let mut assigned = Tag::default();
        assigned.key = Some("Name".to_string());
        assigned.value = Some("web".to_string());
        assigned.propagate_at_launch = Some(true);
        assert_eq!(built, assigned);
    }

    #[test]
    fn fresh_tags_are_equal() {
        assert_eq!(Tag::default(), Tag::builder().build());
    }

    #[test]
    fn equal_tags_hash_together() {
        let a = Tag::builder().key("Name").value("web").build();
        let b = Tag::builder().key("Name").value("web").build();
        assert_eq!(a, b);
        let set: HashSet<Tag> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_skips_absent_fields() {
        let tag = Tag::builder().key("Name").build();
        assert_eq!(tag.to_string(), "{Key: Name}");
    }

    #[test]
    fn wire_names_are_pascal_case() {
        let tag = Tag::builder().key("Name").propagate_at_launch(false).build();
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json["Key"], "Name");
        assert_eq!(json["PropagateAtLaunch"], false);
        assert!(json.get("Value").is_none());
    }
}
