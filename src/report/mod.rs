pub mod parser;
pub mod writer;

/// An attribute on an [`Element`], kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_element_named(&self, name: &str) -> bool {
        self.as_element().is_some_and(|element| element.is_named(name))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element of the report tree. Children are owned by value, so moving a
/// node to a new parent is a take from one child list and a push onto another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child<T: Into<Node>>(mut self, child: T) -> Self {
        self.push_child(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Overwrites the value in place if `name` is already present, otherwise
    /// appends a new attribute.
    pub fn set_attribute<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let position = self
            .attributes
            .iter()
            .position(|attribute| attribute.name == name)?;
        Some(self.attributes.remove(position).value)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child<T: Into<Node>>(&mut self, child: T) {
        self.children.push(child.into());
    }

    pub fn remove_child(&mut self, index: usize) -> Node {
        self.children.remove(index)
    }

    pub fn extend_children<I: IntoIterator<Item = Node>>(&mut self, children: I) {
        self.children.extend(children);
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    pub fn child_elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.child_elements().filter(move |element| element.is_named(name))
    }

    /// Removes every direct child element called `name` and returns them in
    /// document order. All other children keep their relative order.
    pub fn take_child_elements(&mut self, name: &str) -> Vec<Element> {
        let (taken, kept): (Vec<Node>, Vec<Node>) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|node| node.is_element_named(name));
        self.children = kept;
        taken.into_iter().filter_map(Node::into_element).collect()
    }

    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Visits `self` and every descendant element called `name`, pre-order.
    pub fn for_each_descendant_mut<F: FnMut(&mut Element)>(&mut self, name: &str, f: &mut F) {
        if self.is_named(name) {
            f(self);
        }
        for child in self.child_elements_mut() {
            child.for_each_descendant_mut(name, f);
        }
    }

    pub fn count_descendants(&self, name: &str) -> usize {
        let own = usize::from(self.is_named(name));
        own + self
            .child_elements()
            .map(|child| child.count_descendants(name))
            .sum::<usize>()
    }
}

/// A parsed report. The root element is always present; nodes outside of it
/// are limited to comments and processing instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub doctype: Option<String>,
    pub prolog: Vec<Node>,
    pub root: Element,
    pub epilog: Vec<Node>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            doctype: None,
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }
}
