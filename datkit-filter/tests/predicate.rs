use datkit_core::{Record, Variant};
use datkit_filter::{FieldKey, FilterError, FilterPredicate, Operator};

fn predicate(key: &str, pattern: Option<&str>, operator: Operator) -> FilterPredicate {
    FilterPredicate::new(FieldKey::parse(key).unwrap(), pattern, operator)
}

fn rom(fields: &[(&str, &str)]) -> Record {
    Record::try_from_fields(
        Variant::Rom,
        fields.iter().map(|(k, v)| (*k, Some((*v).into()))),
    )
    .unwrap()
}

const ALL_OPERATORS: [Operator; 7] = [
    Operator::Equals,
    Operator::NotEquals,
    Operator::GreaterThan,
    Operator::GreaterThanOrEqual,
    Operator::LessThan,
    Operator::LessThanOrEqual,
    Operator::Invalid,
];

// -- Parsing --

#[test]
fn parse_splits_key_operator_and_value() {
    let p = FilterPredicate::parse("rom.crc==deadbeef").unwrap();
    assert_eq!(p.key().to_string(), "rom.crc");
    assert_eq!(p.operator(), Operator::Equals);
    assert_eq!(p.pattern(), Some("deadbeef"));
}

#[test]
fn parse_every_operator_token() {
    let cases = [
        ("game.year=1990", Operator::Equals),
        ("game.year:1990", Operator::Equals),
        ("game.year::1990", Operator::Equals),
        ("game.year!1990", Operator::NotEquals),
        ("game.year!:1990", Operator::NotEquals),
        ("game.year!=1990", Operator::NotEquals),
        ("game.year>1990", Operator::GreaterThan),
        ("game.year>=1990", Operator::GreaterThanOrEqual),
        ("game.year<1990", Operator::LessThan),
        ("game.year<=1990", Operator::LessThanOrEqual),
    ];
    for (input, expected) in cases {
        let p = FilterPredicate::parse(input).unwrap();
        assert_eq!(p.operator(), expected, "input '{input}'");
        assert_eq!(p.pattern(), Some("1990"), "input '{input}'");
    }
}

#[test]
fn unknown_operator_degrades_to_invalid() {
    for input in ["rom.name:!x", "rom.name=>x", "rom.name=<x", "rom.name<>x", "rom.name><x"] {
        let p = FilterPredicate::parse(input).unwrap();
        assert_eq!(p.operator(), Operator::Invalid, "input '{input}'");
        assert_eq!(p.pattern(), Some("x"));
        let record = rom(&[("name", "x")]);
        assert!(!p.matches(&record));
    }
}

#[test]
fn dots_in_value_belong_to_the_value() {
    let p = FilterPredicate::parse("rom.name=Game (USA).sfc").unwrap();
    assert_eq!(p.key().field(), "name");
    assert_eq!(p.pattern(), Some("Game (USA).sfc"));
}

#[test]
fn exact_name_with_parentheses_matches_itself() {
    let record = rom(&[("name", "Game (USA).sfc")]);
    assert!(FilterPredicate::parse("rom.name==Game (USA).sfc").unwrap().matches(&record));
    assert!(!FilterPredicate::parse("rom.name!=Game (USA).sfc").unwrap().matches(&record));
}

#[test]
fn empty_value_is_a_null_pattern() {
    let p = FilterPredicate::parse("rom.crc=").unwrap();
    assert_eq!(p.pattern(), None);
    assert!(p.matches(&rom(&[("name", "x")])));
    assert!(!p.matches(&rom(&[("crc", "deadbeef")])));
}

#[test]
fn malformed_key_is_a_parse_error() {
    assert!(matches!(
        FilterPredicate::parse("rom.nope=1"),
        Err(FilterError::UnknownField { .. })
    ));
    assert!(matches!(
        FilterPredicate::parse("rom=1"),
        Err(FilterError::InvalidKey(_))
    ));
    assert!(matches!(
        FilterPredicate::parse("=1"),
        Err(FilterError::EmptyKey)
    ));
    assert!(matches!(
        FilterPredicate::parse("rom.crc"),
        Err(FilterError::MissingOperator(_))
    ));
    assert!(matches!(
        FilterPredicate::parse("rom.na me=1"),
        Err(FilterError::InvalidCharacter { ch: ' ', .. })
    ));
}

#[test]
fn legacy_pairs() {
    let p = FilterPredicate::parse_legacy("game.name:Tetris").unwrap();
    assert_eq!(p.operator(), Operator::Equals);
    assert_eq!(p.pattern(), Some("Tetris"));

    for input in ["!game.name:Tetris", "~game.name:Tetris", "not-game.name:Tetris", "NOT-game.name:Tetris"] {
        let p = FilterPredicate::parse_legacy(input).unwrap();
        assert_eq!(p.operator(), Operator::NotEquals, "input '{input}'");
        assert_eq!(p.key().to_string(), "machine.name");
    }

    assert!(FilterPredicate::parse_legacy("game.name").is_err());
    assert!(FilterPredicate::parse_legacy("cartridge.name:x").is_err());
}

#[test]
fn display_uses_canonical_names() {
    let p = FilterPredicate::parse("GAME.Year:1990").unwrap();
    assert_eq!(p.to_string(), "machine.year==1990");
}

// -- Matching cascade --

#[test]
fn both_absent_only_equals_matches() {
    for op in ALL_OPERATORS {
        let p = predicate("rom.crc", None, op);
        assert_eq!(
            p.matches_value(None),
            op == Operator::Equals,
            "operator {op:?}"
        );
    }
}

#[test]
fn one_side_absent_never_matches() {
    for op in ALL_OPERATORS {
        let p = predicate("rom.crc", Some("abc"), op);
        assert!(!p.matches_value(None), "operator {op:?}");
        let p = predicate("rom.crc", None, op);
        assert!(!p.matches_value(Some("abc")), "operator {op:?}");
    }
}

#[test]
fn integer_comparison() {
    // Sample.Name "12345" compared numerically
    let sample = Record::new(Variant::Sample).with("name", "12345").unwrap();
    let p = predicate("Sample.Name", Some("12345"), Operator::Equals);
    assert!(p.matches(&sample));

    let size = rom(&[]).with("size", 1024i64).unwrap();
    assert!(predicate("rom.size", Some("1000"), Operator::GreaterThan).matches(&size));
    assert!(predicate("rom.size", Some("1024"), Operator::GreaterThanOrEqual).matches(&size));
    assert!(predicate("rom.size", Some("1024"), Operator::LessThanOrEqual).matches(&size));
    assert!(!predicate("rom.size", Some("1024"), Operator::LessThan).matches(&size));
    assert!(predicate("rom.size", Some("2048"), Operator::NotEquals).matches(&size));
    // Numeric, not lexical: "9" < "10"
    assert!(!predicate("rom.size", Some("9"), Operator::LessThan).matches_value(Some("10")));
    assert!(predicate("rom.size", Some("10"), Operator::LessThan).matches_value(Some("9")));
}

#[test]
fn double_comparison() {
    let p = predicate("game.year", Some("1.5"), Operator::GreaterThan);
    assert!(p.matches_value(Some("2")));
    assert!(!p.matches_value(Some("1.25")));
    let p = predicate("game.year", Some("2.50"), Operator::Equals);
    assert!(p.matches_value(Some("2.5")));
}

#[test]
fn boolean_comparison() {
    let disk = Record::new(Variant::Disk).with("writable", true).unwrap();
    assert!(predicate("disk.writable", Some("yes"), Operator::Equals).matches(&disk));
    assert!(predicate("disk.writable", Some("no"), Operator::NotEquals).matches(&disk));
    assert!(!predicate("disk.writable", Some("false"), Operator::Equals).matches(&disk));
    // Ordering is undefined for booleans.
    assert!(!predicate("disk.writable", Some("no"), Operator::GreaterThan).matches(&disk));
    assert!(!predicate("disk.writable", Some("yes"), Operator::GreaterThanOrEqual).matches(&disk));
}

#[test]
fn regex_comparison() {
    let record = rom(&[("name", "Super Mario World (USA).sfc")]);
    assert!(predicate("rom.name", Some("^Super Mario"), Operator::Equals).matches(&record));
    assert!(predicate("rom.name", Some(r"\(Japan\)"), Operator::NotEquals).matches(&record));
    assert!(!predicate("rom.name", Some(r"\(USA\)"), Operator::NotEquals).matches(&record));
}

#[test]
fn literal_names_with_regex_metacharacters() {
    let names = [
        "Super Mario World (USA) [!].sfc",
        "Sonic 3 + Knuckles (World).md",
        "a.b+c",
    ];
    for name in names {
        let record = rom(&[("name", name)]);
        assert!(predicate("rom.name", Some(name), Operator::Equals).matches(&record), "{name}");
        assert!(!predicate("rom.name", Some(name), Operator::NotEquals).matches(&record), "{name}");
    }
    // A different name still fails equality.
    let record = rom(&[("name", "Game (Europe).sfc")]);
    assert!(!predicate("rom.name", Some("Game (USA).sfc"), Operator::Equals).matches(&record));
}

#[test]
fn invalid_regex_falls_back_to_literal() {
    let record = rom(&[("name", "broken[")]);
    assert!(predicate("rom.name", Some("broken["), Operator::Equals).matches(&record));
    assert!(!predicate("rom.name", Some("broken["), Operator::NotEquals).matches(&record));
    assert!(predicate("rom.name", Some("other["), Operator::NotEquals).matches(&record));
}

#[test]
fn ordering_on_text_is_false() {
    let record = rom(&[("name", "b")]);
    for op in [
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
    ] {
        assert!(!predicate("rom.name", Some("a"), op).matches(&record), "operator {op:?}");
    }
}

#[test]
fn mixed_types_fall_through_to_text() {
    // "yes" is boolean but "1" is not, so neither bool nor numeric applies.
    let p = predicate("rom.name", Some("1"), Operator::Equals);
    assert!(!p.matches_value(Some("yes")));
    assert!(p.matches_value(Some("1")));
}

#[test]
fn nan_compares_as_text() {
    let record = rom(&[("name", "NaN")]);
    assert!(predicate("rom.name", Some("NaN"), Operator::Equals).matches(&record));
    assert!(!predicate("rom.name", Some("NaN"), Operator::NotEquals).matches(&record));
    assert!(!predicate("rom.name", Some("NaN"), Operator::LessThan).matches(&record));

    let record = rom(&[("name", "inf")]);
    assert!(predicate("rom.name", Some("inf"), Operator::GreaterThanOrEqual).matches(&record));
}
