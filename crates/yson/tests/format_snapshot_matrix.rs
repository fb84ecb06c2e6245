//! End-to-end formatting matrix over realistic document snapshots, plus
//! the two formatting laws: content preservation and idempotence.

use docboard_yson::{format, format_with_indent, strip_whitespace, YsonFormatter};
use proptest::prelude::*;

const NOTE_SNAPSHOT: &str = r#"{"title":"Meeting notes","content":Text([{"val":"Hello "},{"attrs":{"bold":"true"},"val":"world"}]),"likes":Counter(Int(3)),"tags":["draft","shared"],"rev":Long(42),"payload":BinData("aGVsbG8="),"updatedAt":Date("2024-05-01T12:00:00Z"),"meta":{}}"#;

const TREE_SNAPSHOT: &str = r#"{"root":Tree({"type":"doc","children":[{"type":"p"}]}),"dims":[Int(1920), Int(1080)],"empty":Text()}"#;

#[test]
fn formats_rich_text_snapshot() {
    let expected = r#"{
  "title": "Meeting notes",
  "content": Text(
    [
      {
        "val": "Hello "
      },
      {
        "attrs": {
          "bold": "true"
        },
        "val": "world"
      }
    ]
  ),
  "likes": Counter(Int(3)),
  "tags": [
    "draft",
    "shared"
  ],
  "rev": Long(42),
  "payload": BinData("aGVsbG8="),
  "updatedAt": Date("2024-05-01T12:00:00Z"),
  "meta": {}
}"#;
    assert_eq!(format(NOTE_SNAPSHOT), expected);
}

#[test]
fn formats_tree_snapshot() {
    let expected = r#"{
  "root": Tree(
    {
      "type": "doc",
      "children": [
        {
          "type": "p"
        }
      ]
    }
  ),
  "dims": [
    Int(1920),Int(1080)
  ],
  "empty": Text()
}"#;
    assert_eq!(format(TREE_SNAPSHOT), expected);
}

#[test]
fn wider_indent_applies_per_level() {
    let expected = r#"{
    "a": [
        1,
        2
    ]
}"#;
    assert_eq!(format_with_indent(r#"{"a":[1,2]}"#, 4), expected);
}

#[test]
fn snapshots_pass_strict_mode() {
    let formatter = YsonFormatter::new();
    assert!(formatter.format_strict(NOTE_SNAPSHOT).is_ok());
    assert!(formatter.format_strict(TREE_SNAPSHOT).is_ok());
}

/// Well-formed compact YSON: JSON structure plus typed constructors.
fn arb_yson() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("null".to_string()),
        Just("true".to_string()),
        (0u32..10_000u32).prop_map(|n| n.to_string()),
        "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
        (0i32..1_000).prop_map(|n| format!("Int({n})")),
        any::<u32>().prop_map(|n| format!("Long({n})")),
        (0u8..100).prop_map(|n| format!("Counter(Int({n}))")),
        Just("Date(\"2024-01-01T00:00:00Z\")".to_string()),
        "[A-Za-z0-9+/]{0,8}".prop_map(|s| format!("BinData(\"{s}\")")),
    ];
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(","))),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4).prop_map(|fields| {
                let body = fields
                    .iter()
                    .map(|(k, v)| format!("\"{k}\":{v}"))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{{{body}}}")
            }),
            inner.clone().prop_map(|v| format!("Text([{v}])")),
            inner.prop_map(|v| format!("Tree({v})")),
        ]
    })
}

proptest! {
    #[test]
    fn formatting_preserves_content(src in arb_yson()) {
        prop_assert_eq!(strip_whitespace(&format(&src)), strip_whitespace(&src));
    }

    #[test]
    fn formatting_is_idempotent(src in arb_yson()) {
        let once = format(&src);
        prop_assert_eq!(format(&once), once.clone());
    }

    #[test]
    fn strict_mode_accepts_well_formed_input(src in arb_yson()) {
        prop_assert!(YsonFormatter::new().format_strict(&src).is_ok());
    }

    #[test]
    fn primitive_leaves_are_never_broken(n in 0u32..10_000u32) {
        let formatted = format(&format!("[Int({n}),Long({n}),Counter(Int({n}))]"));
        prop_assert!(formatted.contains(&format!("Int({n})")));
        prop_assert!(formatted.contains(&format!("Long({n})")));
        prop_assert!(formatted.contains(&format!("Counter(Int({n}))")));
    }
}
