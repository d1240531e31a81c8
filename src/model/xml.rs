/// Index of an element inside an `XmlDocument` arena.
pub type ElementId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Qualified name as written, prefix included.
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// Resolved namespace URI, `None` when the element is not in any namespace.
    pub namespace: Option<String>,
    pub local_name: String,
    /// Qualified name as written, prefix included.
    pub qualified_name: String,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<ElementId>,
    /// Concatenated text of every descendant text node, in document order.
    pub text: String,
}

impl XmlElement {
    /// Value of the unprefixed attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn is_named(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }
}

/// A read-only element tree. Elements are stored in document order, the root is always `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub(crate) elements: Vec<XmlElement>,
}

impl XmlDocument {
    pub const ROOT: ElementId = 0;

    pub fn root(&self) -> &XmlElement {
        &self.elements[Self::ROOT]
    }

    pub fn get(&self, id: ElementId) -> Option<&XmlElement> {
        self.elements.get(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements strictly below `id`, in document order.
    pub fn descendants(&self, id: ElementId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let Some(element) = self.elements.get(id) {
            stack.extend(element.children.iter().rev().copied());
        }
        Descendants {
            document: self,
            stack,
        }
    }

    /// The root followed by every other element, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &XmlElement)> + Clone + '_ {
        self.elements.iter().enumerate()
    }
}

#[derive(Clone)]
pub struct Descendants<'a> {
    document: &'a XmlDocument,
    stack: Vec<ElementId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (ElementId, &'a XmlElement);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let element = &self.document.elements[id];
        self.stack.extend(element.children.iter().rev().copied());
        Some((id, element))
    }
}
