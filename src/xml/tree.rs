//! Arena-backed element tree

/// Index of an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementData {
    name: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    position: usize,
    content: Vec<Content>,
}

/// A parsed XML document. Only elements, attributes and text are kept;
/// comments, processing instructions and the prolog are dropped by the
/// backend before they get here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<ElementData>,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent`, or as the root when `parent` is `None`.
    ///
    /// `position` is the byte offset of the start tag in the source text.
    pub fn push_element(
        &mut self,
        parent: Option<NodeId>,
        name: impl Into<String>,
        attributes: Vec<(String, String)>,
        position: usize,
    ) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(ElementData {
            name: name.into(),
            attributes,
            parent,
            position,
            content: Vec::new(),
        });

        match parent {
            Some(parent) => self.elements[parent.0].content.push(Content::Element(id)),
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }

        id
    }

    /// Append a text run to `parent`. Adjacent runs are merged.
    pub fn push_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        let content = &mut self.elements[parent.0].content;
        if let Some(Content::Text(existing)) = content.last_mut() {
            existing.push_str(text);
        } else {
            content.push(Content::Text(text.to_string()));
        }
    }

    pub fn root(&self) -> Option<Element<'_>> {
        self.root.map(|id| self.element(id))
    }

    pub fn element(&self, id: NodeId) -> Element<'_> {
        Element { doc: self, id }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    fn data(&self, id: NodeId) -> &ElementData {
        &self.elements[id.0]
    }
}

/// Borrowed handle to one element of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

impl<'a> Element<'a> {
    pub fn name(&self) -> &'a str {
        &self.doc.data(self.id).name
    }

    /// Byte offset of the start tag in the source text
    pub fn position(&self) -> usize {
        self.doc.data(self.id).position
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.doc
            .data(self.id)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn parent(&self) -> Option<Element<'a>> {
        self.doc.data(self.id).parent.map(|id| self.doc.element(id))
    }

    pub fn children(self) -> impl Iterator<Item = Element<'a>> + 'a {
        let doc = self.doc;
        doc.data(self.id).content.iter().filter_map(move |c| match c {
            Content::Element(id) => Some(doc.element(*id)),
            Content::Text(_) => None,
        })
    }

    /// Every element below this one in document order, not including itself.
    pub fn descendants(&self) -> Descendants<'a> {
        let mut stack: Vec<NodeId> = self.children().map(|e| e.id).collect();
        stack.reverse();
        Descendants {
            doc: self.doc,
            stack,
        }
    }

    /// First descendant with the given tag name.
    pub fn find_first(&self, tag: &str) -> Option<Element<'a>> {
        self.descendants().find(|e| e.name() == tag)
    }

    /// All descendants matched by a descendant-combinator path such as
    /// `["experienceSection", "experience"]`, in document order.
    pub fn find_all_by_path(&self, path: &[&str]) -> Vec<Element<'a>> {
        let Some((last, ancestors)) = path.split_last() else {
            return Vec::new();
        };
        self.descendants()
            .filter(|e| e.name() == *last && self.has_ancestor_chain(*e, ancestors))
            .collect()
    }

    /// First descendant matched by a descendant-combinator path.
    pub fn find_first_by_path(&self, path: &[&str]) -> Option<Element<'a>> {
        let (last, ancestors) = path.split_last()?;
        self.descendants()
            .find(|e| e.name() == *last && self.has_ancestor_chain(*e, ancestors))
    }

    /// Concatenated text of the whole subtree, untrimmed.
    ///
    /// Walks with an explicit stack so nesting depth is bounded by the heap.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self.doc.data(self.id).content.iter()];

        while let Some(contents) = stack.last_mut() {
            match contents.next() {
                Some(Content::Text(run)) => text.push_str(run),
                Some(Content::Element(id)) => stack.push(self.doc.data(*id).content.iter()),
                None => {
                    stack.pop();
                }
            }
        }

        text
    }

    // Ancestors are matched greedily from the nearest one outwards, stopping
    // at `self` so matches never escape the scope element.
    fn has_ancestor_chain(&self, element: Element<'a>, ancestors: &[&str]) -> bool {
        let mut remaining = ancestors.iter().rev().peekable();
        let mut current = element.parent();

        while let Some(node) = current {
            if node.id == self.id {
                break;
            }
            if remaining.peek().is_some_and(|tag| **tag == node.name()) {
                remaining.next();
            }
            current = node.parent();
        }

        remaining.peek().is_none()
    }
}

/// Pre-order iterator returned by [`Element::descendants`]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let element = self.doc.element(id);
        let start = self.stack.len();
        self.stack.extend(element.children().map(|e| e.id));
        self.stack[start..].reverse();
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // <letter>
    //   <salutation>Hi</salutation>
    //   <experienceSection>
    //     <experience><employer>A</employer></experience>
    //     <group><experience><employer>B</employer></experience></group>
    //   </experienceSection>
    //   <experience><employer>outside</employer></experience>
    // </letter>
    fn sample() -> Document {
        let mut doc = Document::new();
        let letter = doc.push_element(None, "letter", vec![("lang".into(), "en".into())], 0);
        let salutation = doc.push_element(Some(letter), "salutation", Vec::new(), 8);
        doc.push_text(salutation, "Hi");
        let section = doc.push_element(Some(letter), "experienceSection", Vec::new(), 20);
        let first = doc.push_element(Some(section), "experience", Vec::new(), 40);
        let employer = doc.push_element(Some(first), "employer", Vec::new(), 52);
        doc.push_text(employer, "A");
        let group = doc.push_element(Some(section), "group", Vec::new(), 80);
        let second = doc.push_element(Some(group), "experience", Vec::new(), 87);
        let employer = doc.push_element(Some(second), "employer", Vec::new(), 99);
        doc.push_text(employer, "B");
        let outside = doc.push_element(Some(letter), "experience", Vec::new(), 140);
        let employer = doc.push_element(Some(outside), "employer", Vec::new(), 152);
        doc.push_text(employer, "outside");
        doc
    }

    #[test]
    fn test_root_and_attributes() {
        let doc = sample();
        let root = doc.root().unwrap();
        assert_eq!(root.name(), "letter");
        assert_eq!(root.attribute("lang"), Some("en"));
        assert_eq!(root.attribute("missing"), None);
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_descendants_are_in_document_order() {
        let doc = sample();
        let names: Vec<_> = doc.root().unwrap().descendants().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "salutation",
                "experienceSection",
                "experience",
                "employer",
                "group",
                "experience",
                "employer",
                "experience",
                "employer",
            ]
        );
    }

    #[test]
    fn test_find_first_skips_self() {
        let doc = sample();
        let root = doc.root().unwrap();
        assert!(root.find_first("letter").is_none());
        assert_eq!(root.find_first("employer").unwrap().text_content(), "A");
    }

    #[test]
    fn test_find_all_by_path_uses_descendant_combinator() {
        let doc = sample();
        let root = doc.root().unwrap();
        let employers: Vec<_> = root
            .find_all_by_path(&["experienceSection", "experience"])
            .iter()
            .map(|e| e.find_first("employer").unwrap().text_content())
            .collect();
        assert_eq!(employers, vec!["A", "B"]);
    }

    #[test]
    fn test_path_match_is_scoped_to_element() {
        let doc = sample();
        let section = doc.root().unwrap().find_first("experienceSection").unwrap();
        // The section itself cannot satisfy the first path segment.
        assert!(
            section
                .find_all_by_path(&["experienceSection", "experience"])
                .is_empty()
        );
        assert_eq!(section.find_all_by_path(&["experience"]).len(), 2);
    }

    #[test]
    fn test_find_first_by_path() {
        let doc = sample();
        let root = doc.root().unwrap();
        let employer = root.find_first_by_path(&["group", "employer"]).unwrap();
        assert_eq!(employer.text_content(), "B");
        assert!(root.find_first_by_path(&["group", "salutation"]).is_none());
        assert!(root.find_first_by_path(&[]).is_none());
    }

    #[test]
    fn test_text_content_concatenates_subtree() {
        let doc = sample();
        let section = doc.root().unwrap().find_first("experienceSection").unwrap();
        assert_eq!(section.text_content(), "AB");
    }

    #[test]
    fn test_adjacent_text_runs_are_merged() {
        let mut doc = Document::new();
        let root = doc.push_element(None, "name", Vec::new(), 0);
        doc.push_text(root, "Jane ");
        doc.push_text(root, "");
        doc.push_text(root, "Doe");
        assert_eq!(doc.root().unwrap().text_content(), "Jane Doe");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_text_content_of_deeply_nested_subtree() {
        let mut doc = Document::new();
        let name = doc.push_element(None, "name", Vec::new(), 0);
        let mut parent = name;
        for _ in 0..200_000 {
            parent = doc.push_element(Some(parent), "b", Vec::new(), 0);
        }
        doc.push_text(parent, "Jane Doe");

        assert_eq!(doc.root().unwrap().text_content(), "Jane Doe");
        assert_eq!(doc.root().unwrap().descendants().count(), 200_000);
    }
}
