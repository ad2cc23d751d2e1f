use solaria_core::{Rules, RulesError};

#[test]
fn defaults_match_the_standard_sandbox() {
    let rules = Rules::default();
    assert_eq!(rules.board_size, 19);
    assert_eq!(rules.suicide_damage, 15);
    assert_eq!(rules.collision_damage, 5);
    assert_eq!(rules.max_attack_damage(), 10);
    assert!(rules.validate().is_ok());
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let rules = Rules::from_yaml_str("board_size: 9\nattack_range: [6, 12]\n").expect("rules");
    assert_eq!(rules.board_size, 9);
    assert_eq!(rules.max_attack_damage(), 12);
    assert_eq!(rules.collision_damage, 5);
}

#[test]
fn invalid_values_are_rejected() {
    let err = Rules::from_yaml_str("board_size: 0\n").expect_err("zero board");
    assert!(matches!(err, RulesError::Invalid(_)));

    let err = Rules::from_yaml_str("attack_range: [10, 8]\n").expect_err("inverted range");
    assert!(matches!(err, RulesError::Invalid(_)));

    let err = Rules::from_yaml_str("board_size: [1, 2]\n").expect_err("wrong type");
    assert!(matches!(err, RulesError::Yaml(_)));
}

#[test]
fn load_reports_missing_file() {
    let err = Rules::load("/definitely/not/here/rules.yaml").expect_err("missing file");
    assert!(matches!(err, RulesError::Io(_)));
}
