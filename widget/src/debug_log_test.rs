use super::*;
use crate::document::NodeKind;
use crate::fixtures::{self, host_page};
use crate::xml::serialize;

#[test]
fn writes_rule_text_and_break_then_unhides() {
    let mut doc = fixtures::parse(&host_page("", r#"<pre id="debug_log" style="display: none"/>"#));
    assert!(debug_log(&mut doc, "first"));

    let sink = doc.element_by_id(DEBUG_LOG_ID).unwrap();
    let children = doc.children(&sink);
    assert_eq!(children.len(), 3);
    assert_eq!(doc.element_name(&children[0]).unwrap().local, "hr");
    assert_eq!(doc.kind(children[1]), Some(&NodeKind::Text("⚠ Debug Log: first".to_owned())));
    assert_eq!(doc.element_name(&children[2]).unwrap().local, "br");
    assert_eq!(doc.style(sink, "display").as_deref(), Some("block"));
}

#[test]
fn appends_successive_messages() {
    let mut doc = fixtures::parse(&host_page("", r#"<pre id="debug_log"/>"#));
    debug_log(&mut doc, "one");
    debug_log(&mut doc, "two");
    let sink = doc.element_by_id(DEBUG_LOG_ID).unwrap();
    assert_eq!(doc.children(&sink).len(), 6);
    assert_eq!(doc.text_content(sink), "⚠ Debug Log: one⚠ Debug Log: two");
}

#[test]
fn missing_sink_drops_message_without_mutation() {
    let mut doc = fixtures::parse(&host_page("", "<p>no sink</p>"));
    let before = serialize(&doc);
    assert!(!debug_log(&mut doc, "lost"));
    assert_eq!(serialize(&doc), before);
}

#[test]
fn detached_sink_is_ignored() {
    let mut doc = fixtures::parse(&host_page("", ""));
    let sink = doc.create_element("pre").unwrap();
    doc.set_attribute(&sink, "id", DEBUG_LOG_ID).unwrap();
    assert!(!debug_log(&mut doc, "nowhere to go"));
    assert!(doc.children(&sink).is_empty());
}
