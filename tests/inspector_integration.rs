use dominator::tools::{ToolContext, ToolRegistry};
use dominator::{
    DomNode, DomTreeStats, ExtractOptions, Inspector, IssueKind, NodeKind, Severity, TreeFilter,
};
use serde_json::json;

fn capture(html: &str) -> dominator::DomSnapshot {
    dominator::dom::extract_from_html(html, &ExtractOptions::default()).unwrap()
}

fn find_tag<'a>(node: &'a DomNode, tag: &str) -> Option<&'a DomNode> {
    if node.is_tag(tag) {
        return Some(node);
    }
    node.children.iter().find_map(|c| find_tag(c, tag))
}

#[test]
fn test_direct_children_preserved() {
    let snapshot = capture("<html><body><p>a</p><p>b</p><p>c</p></body></html>");
    let body = find_tag(&snapshot.root, "body").unwrap();
    assert_eq!(body.children.len(), 3);
}

#[test]
fn test_depth_never_exceeds_cap() {
    let deep: String = (0..30).map(|_| "<div>").collect::<String>()
        + "x"
        + &(0..30).map(|_| "</div>").collect::<String>();
    let html = format!("<html><body>{deep}</body></html>");

    let dom = dominator::dom::parse_html(&html).unwrap();
    let snapshot =
        dominator::DomSnapshot::capture(&dom, &ExtractOptions::new().max_depth(10)).unwrap();

    fn check(node: &DomNode, cap: usize) {
        assert!(node.depth <= cap);
        for child in &node.children {
            check(child, cap);
        }
    }
    check(&snapshot.root, 10);
}

#[test]
fn test_xpath_sentinel_and_sibling_positions() {
    let snapshot = capture(
        "<html><body><section><p>one</p><span>x</span><p>two</p></section></body></html>",
    );

    assert_eq!(snapshot.root.xpath.as_deref(), Some("/html"));

    let section = find_tag(&snapshot.root, "section").unwrap();
    let paragraph_xpaths: Vec<&str> = section
        .children
        .iter()
        .filter(|c| c.is_tag("p"))
        .map(|c| c.xpath.as_deref().unwrap())
        .collect();

    // the second <p> has one same-tag preceding sibling, so its index is 2;
    // the <span> in between does not disturb the numbering
    assert_eq!(
        paragraph_xpaths,
        vec!["/html/body/section[1]/p[1]", "/html/body/section[1]/p[2]"]
    );
}

#[test]
fn test_missing_alt_scenario() {
    let snapshot = capture("<html><body><div><img></div></body></html>");

    let img = find_tag(&snapshot.root, "img").unwrap();
    assert_eq!(img.issues.len(), 1);
    assert_eq!(img.issues[0].kind, IssueKind::MissingAlt);
    assert_eq!(img.issues[0].severity, Severity::Error);

    let div = find_tag(&snapshot.root, "div").unwrap();
    assert!(div.issues.is_empty());
}

#[test]
fn test_hide_comments_scenario() {
    let snapshot = capture("<html><body><div><!--x--><p>hi</p></div></body></html>");
    let filter = TreeFilter { hide_comments: true, ..Default::default() };

    let filtered = dominator::query::filter_tree(&snapshot.root, &filter).unwrap();
    let div = find_tag(&filtered, "div").unwrap();

    assert!(div.children.iter().all(|c| c.kind != NodeKind::Comment));
    assert!(div.children.iter().any(|c| c.is_tag("p")));
}

#[test]
fn test_stats_scenario_ten_nodes_two_hidden() {
    // build the tree by hand so the counts are exact
    let mut root = DomNode::element("body");
    let mut container = DomNode::element("div").with_depth(1);
    for i in 0..4 {
        let child = DomNode::element("span")
            .with_depth(2)
            .with_visibility(i >= 2);
        container.add_child(child);
    }
    root.add_child(container);
    let mut list = DomNode::element("ul").with_depth(1);
    for _ in 0..3 {
        list.add_child(DomNode::element("li").with_depth(2));
    }
    root.add_child(list);

    let stats = DomTreeStats::collect(&root);
    assert_eq!(stats.total_nodes, 10);
    assert_eq!(stats.hidden_elements, 2);
}

#[test]
fn test_filter_idempotence_end_to_end() {
    let snapshot = capture(
        "<html><body><div class=\"wrap\"><script>x</script><img><p> </p><!--c--></div></body></html>",
    );
    let filter = TreeFilter {
        tag_names: vec!["img".to_string()],
        hide_script_tags: true,
        hide_comments: true,
        hide_empty_text_nodes: true,
        ..Default::default()
    };

    let once = dominator::query::filter_tree(&snapshot.root, &filter).unwrap();
    let twice = dominator::query::filter_tree(&once, &filter).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_search_order_and_non_pruning() {
    let snapshot = capture(
        "<html><body><div data-role=\"outer\"><div data-role=\"inner\">x</div></div></body></html>",
    );

    assert!(dominator::query::search(&snapshot.root, "").is_empty());

    let hits = dominator::query::search(&snapshot.root, "div");
    assert_eq!(hits.len(), 2);
    let roles: Vec<&str> = hits.iter().map(|h| h.node.attribute("data-role").unwrap()).collect();
    assert_eq!(roles, vec!["outer", "inner"]);
}

#[test]
fn test_json_export_roundtrip() {
    let snapshot = capture(
        "<html><body><div class=\"a\" data-n=\"1\"><p>hello</p></div></body></html>",
    );

    let json = dominator::export::to_json(
        &snapshot.root,
        dominator::JsonExportOptions { include_ids: true },
    )
    .unwrap();

    let back: DomNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot.root);
}

#[test]
fn test_tool_boundary_session() {
    let mut inspector = Inspector::new();
    inspector
        .load_html(
            "<html><body><div id=\"app\"><img><p>hello world</p></div></body></html>",
        )
        .unwrap();

    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&mut inspector);

    // getDOMTree-style request produces the tree plus stats
    let response = registry.dispatch("get_dom_tree", json!({}), &mut context);
    assert!(response.success);
    let data = response.data.unwrap();
    assert_eq!(data["domTree"]["tagName"], "html");
    assert!(data["stats"]["accessibilityIssues"].as_u64().unwrap() >= 1);

    // search for the paragraph text, then bookmark the hit
    let response = registry.dispatch("search_nodes", json!({"query": "hello"}), &mut context);
    let node_id = response.data.unwrap()["results"][0]["id"].as_str().unwrap().to_string();

    let response = registry.dispatch(
        "add_bookmark",
        json!({"nodeId": node_id, "name": "greeting"}),
        &mut context,
    );
    assert!(response.success);

    let response = registry.dispatch("list_bookmarks", json!({}), &mut context);
    assert_eq!(response.data.unwrap()["count"], 1);

    // highlight always acknowledges
    let response =
        registry.dispatch("highlight_node", json!({"nodeId": "dominator-stale000"}), &mut context);
    assert!(response.success);

    // filter and export round out the session
    let response = registry.dispatch(
        "filter_tree",
        json!({"filter": {"tagNames": ["img"]}}),
        &mut context,
    );
    assert_eq!(response.data.unwrap()["matched"], true);

    let response = registry.dispatch("export_dom", json!({"format": "text"}), &mut context);
    assert!(response.data.unwrap()["content"].as_str().unwrap().contains("<img />"));

    // unknown actions come back as error responses, never panics
    let response = registry.dispatch("toggle_enhanced_dom", json!({}), &mut context);
    assert!(!response.success);
    assert!(response.error.is_some());
}

#[test]
fn test_bookmark_survives_recapture() {
    let mut inspector = Inspector::new();
    inspector
        .load_html("<html><body><div><p id=\"keep\">hi</p></div></body></html>")
        .unwrap();
    inspector.capture().unwrap();

    let p_id = inspector.search("keep").unwrap()[0].node.id.clone();
    let bookmark = inspector.bookmark_node(&p_id, "kept", None).unwrap();

    // a fresh capture reassigns every node id; the bookmark still resolves
    // through its ordinal path
    inspector.capture().unwrap();
    let root = &inspector.snapshot().unwrap().root;
    let resolved = bookmark.resolve(root).unwrap();
    assert!(resolved.is_tag("p"));
    assert_eq!(resolved.attribute("id"), Some("keep"));
}

#[test]
fn test_aria_hidden_and_antipattern_end_to_end() {
    let snapshot = capture(
        "<html><body>\
         <div aria-hidden=\"true\"><button>ghost</button></div>\
         <div class=\"footer\"><div><div><div>deep</div></div></div></div>\
         </body></html>",
    );

    let hidden_wrapper = snapshot
        .root
        .find_by_path("/0/1/0")
        .expect("aria-hidden wrapper");
    assert!(hidden_wrapper.issues.iter().any(|i| i.kind == IssueKind::AriaIssue));

    let footer_div = snapshot.root.find_by_path("/0/1/1").expect("footer div");
    assert!(
        footer_div
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::SemanticsIssue && i.message.contains("<footer>"))
    );

    // the chain of four divs gets flagged from the third level down
    let chain_flagged = count_chain_issues(&snapshot.root);
    assert_eq!(chain_flagged, 2);
}

fn count_chain_issues(node: &DomNode) -> usize {
    let own = node
        .issues
        .iter()
        .filter(|i| i.message.contains("Deeply nested"))
        .count();
    own + node.children.iter().map(count_chain_issues).sum::<usize>()
}
