//! Property tests for child-node classification and bar layout

use proptest::prelude::*;
use ratatui::layout::Rect;
use slider_tabs::core::TabKey;
use slider_tabs::elements::tab_bar::{BarLayout, BarProps, TabBarAlignment};
use slider_tabs::managers::classifier::{classify, ChildNode, NodeKind};

fn arb_kind() -> impl Strategy<Value = Option<NodeKind>> {
    prop_oneof![
        Just(None),
        Just(Some(NodeKind::Tab)),
        Just(Some(NodeKind::Slider)),
        Just(Some(NodeKind::Panels)),
        Just(Some(NodeKind::Panel)),
        "[a-z]{1,6}".prop_map(|name| Some(NodeKind::Other(name))),
    ]
}

fn arb_node() -> impl Strategy<Value = ChildNode> {
    (arb_kind(), "[A-Za-z ]{0,12}").prop_map(|(kind, text)| ChildNode {
        kind,
        text,
        ..ChildNode::default()
    })
}

fn arb_children() -> impl Strategy<Value = Vec<ChildNode>> {
    prop::collection::vec(arb_node(), 0..24)
}

/// Positions of `bucket`'s nodes within `children`
fn positions(children: &[ChildNode], bucket: &[&ChildNode]) -> Vec<usize> {
    bucket
        .iter()
        .map(|node| {
            children
                .iter()
                .position(|child| std::ptr::eq(child, *node))
                .unwrap()
        })
        .collect()
}

proptest! {
    /// Property: every child lands in exactly one bucket
    #[test]
    fn buckets_partition_input(children in arb_children()) {
        let classified = classify(&children);
        prop_assert_eq!(classified.len(), children.len());

        let mut seen: Vec<usize> = [
            positions(&children, &classified.tab_labels),
            positions(&children, &classified.slider_override),
            positions(&children, &classified.panel_container),
            positions(&children, &classified.panel_items),
        ]
        .concat();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..children.len()).collect::<Vec<_>>());
    }

    /// Property: each bucket keeps input order
    #[test]
    fn buckets_preserve_order(children in arb_children()) {
        let classified = classify(&children);
        for bucket in [
            &classified.tab_labels,
            &classified.slider_override,
            &classified.panel_container,
            &classified.panel_items,
        ] {
            let idx = positions(&children, bucket);
            prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Property: classifying twice gives the same buckets
    #[test]
    fn classification_is_idempotent(children in arb_children()) {
        prop_assert_eq!(classify(&children), classify(&children));
    }

    /// Property: untagged, Tab, and unknown kinds are all labels
    #[test]
    fn labels_are_everything_else(children in arb_children()) {
        let classified = classify(&children);
        let expected = children.iter().filter(|c| c.is_tab_label()).count();
        prop_assert_eq!(classified.tab_labels.len(), expected);
    }

    /// Property: visible tab cells never leave the viewport, and the active tab is visible
    #[test]
    fn layout_keeps_active_tab_in_view(
        texts in prop::collection::vec("[a-z]{1,14}", 1..10),
        width in 8u16..120,
        active in 0usize..10,
        centered in any::<bool>(),
        show_arrows in any::<bool>(),
    ) {
        let nodes: Vec<ChildNode> = texts.iter().map(|t| ChildNode::new(t.clone())).collect();
        let labels: Vec<&ChildNode> = nodes.iter().collect();
        let keys: Vec<TabKey> = (0..nodes.len()).map(TabKey::Index).collect();
        let active = keys[active % keys.len()].clone();
        let props = BarProps {
            alignment: if centered { TabBarAlignment::Center } else { TabBarAlignment::Left },
            show_arrows,
            ..BarProps::default()
        };

        let layout = BarLayout::compute(Rect::new(0, 0, width, 1), &labels, &keys, Some(&active), &props);
        let viewport = layout.viewport;
        for slot in &layout.tabs {
            prop_assert!(slot.tab_box.client_width <= slot.tab_box.scroll_width);
            if slot.area.width > 0 {
                prop_assert!(slot.area.x >= viewport.x);
                prop_assert!(slot.area.x + slot.area.width <= viewport.x + viewport.width);
            }
        }
        if viewport.width > 0 {
            let slot = layout.tabs.iter().find(|s| s.key == active).unwrap();
            prop_assert!(slot.tab_box.client_width > 0);
        }
    }
}
