//! In-memory document and virtual clock for driving the effects.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use whispervault_core::{
    Page, PageEvent, Rect, TimerId, VaultConfig, VaultController, VaultError,
    VaultResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    rect: Rect,
}

#[derive(Debug)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    id: TimerId,
}

/// A tiny DOM: `html > head, body`, simple selectors, a virtual clock.
#[derive(Debug)]
pub struct FakePage {
    nodes: Vec<FakeNode>,
    root: NodeId,
    head: Option<NodeId>,
    body: Option<NodeId>,
    now: Duration,
    seq: u64,
    timers: Vec<PendingTimer>,
    pub console: Vec<(String, Option<String>)>,
    pub scrolls: Vec<NodeId>,
    pub observed: Vec<(NodeId, f64)>,
    pub dismiss_bindings: Vec<(NodeId, NodeId)>,
    pub navigations: Vec<String>,
    /// Reject every `append_child` (simulates a hostile document)
    pub fail_appends: bool,
    /// Reject every `bind_dismiss`
    pub fail_binds: bool,
}

impl FakePage {
    pub fn new() -> Self {
        let mut page = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: None,
            body: None,
            now: Duration::ZERO,
            seq: 0,
            timers: Vec::new(),
            console: Vec::new(),
            scrolls: Vec::new(),
            observed: Vec::new(),
            dismiss_bindings: Vec::new(),
            navigations: Vec::new(),
            fail_appends: false,
            fail_binds: false,
        };
        let root = page.alloc("html");
        page.root = root;
        let head = page.add(root, "head");
        let body = page.add(root, "body");
        page.head = Some(head);
        page.body = Some(body);
        page
    }

    /// Document without `<head>`
    pub fn headless() -> Self {
        let mut page = Self::new();
        if let Some(head) = page.head.take() {
            page.detach(head);
        }
        page
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.nodes.push(FakeNode {
            tag: tag.to_string(),
            ..FakeNode::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, id: NodeId) -> &FakeNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut FakeNode {
        &mut self.nodes[id.0]
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    // === Markup builders ===

    pub fn body_id(&self) -> NodeId {
        self.body.expect("fake page has a body")
    }

    pub fn add(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.alloc(tag);
        self.attach(parent, id);
        id
    }

    pub fn add_with_class(&mut self, parent: NodeId, tag: &str, class: &str) -> NodeId {
        let id = self.add(parent, tag);
        self.node_mut(id).classes.push(class.to_string());
        id
    }

    pub fn add_with_id(&mut self, parent: NodeId, tag: &str, id_attr: &str) -> NodeId {
        let id = self.add(parent, tag);
        self.node_mut(id)
            .attributes
            .insert("id".to_string(), id_attr.to_string());
        id
    }

    pub fn add_button(&mut self, class: &str, text: &str, rect: Rect) -> NodeId {
        let body = self.body_id();
        let id = self.add_with_class(body, "button", class);
        self.node_mut(id).text = text.to_string();
        self.node_mut(id).rect = rect;
        id
    }

    // === Inspection ===

    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).styles.get(property).map(String::as_str)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attributes.get(name).map(String::as_str)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).children.clone()
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    /// Attached elements carrying `class`, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(&format!(".{}", class))
    }

    /// Attached elements with a given tag and no classes or attributes
    /// (glow markers)
    pub fn bare_elements(&self, tag: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| {
                let node = self.node(*id);
                node.tag == tag && node.classes.is_empty() && node.attributes.is_empty()
            })
            .collect()
    }

    // === Clock ===

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest timer due at or before `limit`.
    fn pop_due(&mut self, limit: Duration) -> Option<(Duration, TimerId)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= limit)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        let timer = self.timers.remove(index);
        Some((timer.due, timer.id))
    }

    // === Selectors ===

    fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            for child in self.node(id).children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Supports `#id`, `.class`, `tag`, `a[href^="#"]` and comma lists.
    fn matches(&self, id: NodeId, selector: &str) -> bool {
        let node = self.node(id);
        selector.split(',').map(str::trim).any(|simple| {
            if let Some(class) = simple.strip_prefix('.') {
                node.classes.iter().any(|c| c == class)
            } else if let Some(id_attr) = simple.strip_prefix('#') {
                node.attributes.get("id").map(String::as_str) == Some(id_attr)
            } else if simple == "a[href^=\"#\"]" {
                node.tag == "a"
                    && node
                        .attributes
                        .get("href")
                        .is_some_and(|h| h.starts_with('#'))
            } else {
                node.tag == simple
            }
        })
    }
}

impl Page for FakePage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&format!("#{}", id))
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| *id != self.root && self.matches(*id, selector))
            .collect()
    }

    fn head(&self) -> Option<NodeId> {
        self.head
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn create_element(&mut self, tag: &str) -> VaultResult<NodeId> {
        Ok(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> VaultResult<()> {
        if self.fail_appends {
            return Err(VaultError::Dom("appendChild rejected".to_string()));
        }
        self.attach(*parent, *child);
        Ok(())
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn add_class(&mut self, node: &NodeId, class: &str) -> VaultResult<()> {
        let classes = &mut self.node_mut(*node).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> VaultResult<()> {
        self.node_mut(*node)
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> VaultResult<()> {
        self.node_mut(*node)
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.node_mut(*node).text = text.to_string();
    }

    fn text_content(&self, node: &NodeId) -> String {
        let mut out = self.node(*node).text.clone();
        for child in &self.node(*node).children {
            out.push_str(&self.text_content(child));
        }
        out
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        self.node(*node).rect
    }

    fn scroll_into_view(&mut self, node: &NodeId) {
        self.scrolls.push(*node);
    }

    fn observe_intersections(&mut self, nodes: &[NodeId], threshold: f64) -> VaultResult<()> {
        self.observed
            .extend(nodes.iter().map(|n| (*n, threshold)));
        Ok(())
    }

    fn schedule(&mut self, timer: TimerId, delay: Duration) {
        self.seq += 1;
        self.timers.push(PendingTimer {
            due: self.now + delay,
            seq: self.seq,
            id: timer,
        });
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.retain(|t| t.id != timer);
    }

    fn bind_dismiss(&mut self, trigger: &NodeId, overlay: &NodeId) -> VaultResult<()> {
        if self.fail_binds {
            return Err(VaultError::Dom("addEventListener rejected".to_string()));
        }
        self.dismiss_bindings.push((*trigger, *overlay));
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> VaultResult<()> {
        self.navigations.push(url.to_string());
        Ok(())
    }

    fn console(&mut self, message: &str, css: Option<&str>) {
        self.console
            .push((message.to_string(), css.map(str::to_string)));
    }
}

pub type Controller = VaultController<FakePage>;

/// Controller with every effect and a fixed particle seed.
pub fn controller(page: FakePage) -> Controller {
    controller_with(page, VaultConfig::default())
}

pub fn controller_with(page: FakePage, config: VaultConfig) -> Controller {
    VaultController::with_default_effects(page, config, StdRng::seed_from_u64(0x5eed))
}

/// Advance the virtual clock, firing every timer that comes due (including
/// ones scheduled by the timers themselves) in due order.
pub fn advance(controller: &mut Controller, by: Duration) {
    let target = controller.page().now() + by;
    while let Some((due, id)) = controller.page_mut().pop_due(target) {
        controller.page_mut().now = due;
        controller.dispatch(PageEvent::Timer(id));
    }
    controller.page_mut().now = target;
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Simulate activating the dismiss control bound to `overlay`.
pub fn dismiss(controller: &mut Controller, overlay: NodeId) {
    let bound = controller
        .page()
        .dismiss_bindings
        .iter()
        .any(|(_, o)| *o == overlay);
    assert!(bound, "overlay has no dismiss binding");
    controller.dispatch(PageEvent::Dismiss { overlay });
}
