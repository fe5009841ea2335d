//! Resources, resource sets and navigation links.

use super::property::Property;
use crate::annotation::{Annotations, ExpandedNavigationItem};

/// A resource (entry): properties followed by navigation links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    pub full_type_name: Option<String>,
    pub id: Option<String>,
    pub properties: Vec<Property>,
    pub navigation_links: Vec<NavigationLink>,
    pub annotations: Annotations,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(full_type_name: impl Into<String>) -> Self {
        Resource {
            full_type_name: Some(full_type_name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_navigation_link(mut self, link: NavigationLink) -> Self {
        self.navigation_links.push(link);
        self
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn navigation_link(&self, name: &str) -> Option<&NavigationLink> {
        self.navigation_links.iter().find(|l| l.name == name)
    }
}

/// A resource set (feed).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceSet {
    pub resources: Vec<Resource>,
    pub annotations: Annotations,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }
}

impl FromIterator<Resource> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        ResourceSet {
            resources: iter.into_iter().collect(),
            annotations: Annotations::new(),
        }
    }
}

/// A navigation link of a resource.
///
/// An expanded link carries its content in an [`ExpandedNavigationItem`]
/// annotation; a deferred link has no such annotation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationLink {
    pub name: String,
    pub is_collection: bool,
    pub url: Option<String>,
    pub annotations: Annotations,
}

impl NavigationLink {
    pub fn new(name: impl Into<String>, is_collection: bool) -> Self {
        NavigationLink {
            name: name.into(),
            is_collection,
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach expansion content
    pub fn expanded(mut self, expansion: ExpandedNavigationItem) -> Self {
        self.annotations.set(expansion);
        self
    }

    pub fn expansion(&self) -> Option<&ExpandedNavigationItem> {
        self.annotations.get::<ExpandedNavigationItem>()
    }

    pub fn is_expanded(&self) -> bool {
        self.annotations.contains::<ExpandedNavigationItem>()
    }
}
