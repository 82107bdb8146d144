//! The four resources parsed together, the way the loader sees them

use counterdex_data::{
    ResourceError, ResourceKind, SpreadRecord, TYPE_TAGS, parse_move_dex, parse_stat_pool,
    parse_type_table, parse_usage_pool,
};

const STATS: &str = r#"[
    {"name": "Great Tusk", "type": ["ground", "FIGHTING"], "stat": {"hp": 115, "atk": 131, "def": 131, "spa": 53, "spd": 53, "spe": 87}},
    {"name": "Kingambit", "types": ["Dark", "Steel"], "stats": {"hp": 100, "atk": 135, "def": 120, "spa": 60, "spd": 85, "spe": 50}}
]"#;

const USAGE: &str = r#"[
    {
        "rank": 1,
        "name": "Great Tusk",
        "usage": 31.2,
        "moves": {"Headlong Rush": 90.1, "Rapid Spin": 85.0, "Ice Spinner": 60.2},
        "ability": ["Protosynthesis"],
        "items": {"Booster Energy": 70.0, "Rocky Helmet": 20.0, "Other": 10.0},
        "spread": "Nature: Jolly EVs: 0/252/4/0/0/252"
    },
    {
        "rank": 2,
        "name": "Kingambit",
        "usage": 25.0,
        "moves": {"Kowtow Cleave": 95.0, "Sucker Punch": 92.0},
        "ability": "Supreme Overlord",
        "items": "Black Glasses"
    }
]"#;

const MOVES: &str = r#"{
    "Headlong Rush": {"type": "Ground", "category": "Physical", "basePower": 120},
    "Rapid Spin": {"type": "Normal", "category": "Physical", "basePower": 50},
    "Ice Spinner": {"type": "Ice", "category": "Physical", "basePower": 80},
    "Kowtow Cleave": {"type": "Dark", "category": "Physical", "basePower": 85},
    "Sucker Punch": {"type": "Dark", "category": "Physical", "basePower": 70},
    "Swords Dance": {"type": "Normal", "category": "Status"}
}"#;

fn neutral_table() -> String {
    let row = TYPE_TAGS
        .iter()
        .map(|t| format!("\"{t}\": 1"))
        .collect::<Vec<_>>()
        .join(", ");
    let rows = TYPE_TAGS
        .iter()
        .map(|t| format!("\"{t}\": {{{row}}}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{rows}}}")
}

#[test]
fn test_every_resource_parses() {
    let stats = parse_stat_pool(STATS).unwrap();
    assert_eq!(stats[0].types, vec!["Ground", "Fighting"]);
    assert_eq!(stats[1].stats.atk, 135);

    let usage = parse_usage_pool(USAGE).unwrap();
    assert_eq!(usage[0].ability(), Some("Protosynthesis"));
    assert_eq!(usage[0].item(), Some("Booster Energy"));
    assert_eq!(usage[1].item(), Some("Black Glasses"));

    let spread = usage[0].spread();
    assert_eq!(spread.nature.as_deref(), Some("Jolly"));
    assert_eq!(spread.evs, Some([0, 252, 4, 0, 0, 252]));
    assert_eq!(usage[1].spread(), SpreadRecord::default());

    let table = parse_type_table(&neutral_table()).unwrap();
    assert_eq!(table.len(), 18);

    let dex = parse_move_dex(MOVES).unwrap();
    assert_eq!(dex.len(), 6);
    assert_eq!(dex.get("swords dance").unwrap().record.base_power, 0);
}

#[test]
fn test_usage_moves_resolve_in_dex() {
    let usage = parse_usage_pool(USAGE).unwrap();
    let dex = parse_move_dex(MOVES).unwrap();
    for entry in &usage {
        for name in entry.moves.keys() {
            assert!(dex.contains(name), "{name} missing from the move dex");
        }
    }
}

#[test]
fn test_failures_name_their_resource() {
    let cases = [
        (parse_stat_pool("[").unwrap_err(), ResourceKind::StatPool),
        (parse_usage_pool("{}").unwrap_err(), ResourceKind::UsagePool),
        (parse_type_table("{}").unwrap_err(), ResourceKind::TypeTable),
        (parse_move_dex("[]").unwrap_err(), ResourceKind::MoveDex),
    ];
    for (err, kind) in cases {
        assert_eq!(err.resource(), kind);
        assert!(err.to_string().starts_with(kind.as_str()));
    }
}

#[test]
fn test_malformed_and_invalid_are_distinct() {
    let malformed = parse_stat_pool("not json").unwrap_err();
    assert!(matches!(malformed, ResourceError::Malformed { .. }));

    let invalid = parse_stat_pool(
        r#"[{"name": "Nobody", "type": [], "stat": {"hp": 1, "atk": 1, "def": 1, "spa": 1, "spd": 1, "spe": 1}}]"#,
    )
    .unwrap_err();
    assert!(matches!(invalid, ResourceError::Invalid { .. }));
}
