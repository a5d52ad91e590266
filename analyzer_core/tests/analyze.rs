//! Integration test: load table -> aggregate build -> analyze -> report
//!
//! Walks the full flow against the bundled parameter table and pins down
//! the numbers a report shows for known builds.

use analyzer_core::prelude::*;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print a report
fn print_report(name: &str, report: &AnalyzedBuild) {
    println!("  Weapon: {}", name);
    println!(
        "    Sub: {}  Special: {}",
        report.weapon.sub_weapon_id, report.weapon.special_weapon_id
    );
    let stats = &report.stats;
    println!(
        "    Special cost: {} (base {})",
        stats.special_point.value, stats.special_point.base_value
    );
    println!(
        "    Special saved after death: {}% (base {}%)",
        stats.special_saved_after_death.value, stats.special_saved_after_death.base_value
    );
    println!(
        "    White ink: {} frames",
        stats.sub_weapon_white_ink_frames
    );
    for row in &stats.full_ink_tank_options {
        println!(
            "    {:>2} subs  {:?}: {}",
            row.subs_used, row.kind, row.value
        );
    }
}

#[test]
fn test_full_analysis_walkthrough() {
    separator("Load bundled parameter table");
    let table = WeaponParamsTable::bundled().unwrap();
    let config = AnalyzerConfig::default();
    println!("  {} main weapons", table.weapon_ids().len());

    separator("Aggregate a gauge-focused build");
    // 19 AP each of special-charge-up, ink-saver-sub and special-saver
    let build = GearBuild {
        head: GearPiece::uniform(Ability::SpecialChargeUp),
        clothes: GearPiece::uniform(Ability::InkSaverSub),
        shoes: GearPiece::uniform(Ability::SpecialSaver),
    };
    let points = build_to_ability_points(&build);
    assert!((points.ap(Ability::SpecialChargeUp) - 19.0).abs() < f64::EPSILON);

    separator("Analyze the Standard Sprayer");
    let report = analyze_build(&table, &config, &build, WeaponId(10)).unwrap();
    print_report("Standard Sprayer", &report);

    // carried ids and white ink come straight from the table
    assert_eq!(report.weapon.sub_weapon_id, SubWeaponId(0));
    assert_eq!(report.weapon.special_weapon_id, SpecialWeaponId(2));
    assert_eq!(report.stats.sub_weapon_white_ink_frames, 90);

    // 19 AP of special-charge-up brackets to the 16-AP breakpoint: the
    // 190-point gauge costs ceil(190 / 1.154) = 165
    let special = report.stats.special_point;
    assert!((special.base_value - 190.0).abs() < f64::EPSILON);
    assert!((special.value - 165.0).abs() < f64::EPSILON);
    assert_eq!(special.modified_by, Ability::SpecialChargeUp);

    // 19 AP of special-saver: lost fraction 0.391 shows as 60.9% kept
    let saved = report.stats.special_saved_after_death;
    assert!((saved.base_value - 50.0).abs() < f64::EPSILON);
    assert!((saved.value - 60.9).abs() < f64::EPSILON);
    assert_eq!(saved.modified_by, Ability::SpecialSaver);

    // 19 AP of ink-saver-sub: one 0.7-tank bomb becomes 0.65366, still
    // only one per tank; shooter rows are NORMAL only
    let rows = &report.stats.full_ink_tank_options;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.kind == InkConsumeType::Normal));
    assert!((rows[0].value - 108.7).abs() < f64::EPSILON);
    assert!((rows[1].value - 37.65).abs() < f64::EPSILON);
}

#[test]
fn test_provisional_fallbacks_keep_incomplete_rows_analyzable() {
    let table = WeaponParamsTable::bundled().unwrap();
    let config = AnalyzerConfig::default();

    // the Heavy Sprayer's sub has neither InkConsume nor SubInkSaveLv in
    // the table yet; analysis leans on the configured fallbacks
    let report = analyze_build(&table, &config, &GearBuild::default(), WeaponId(20)).unwrap();

    let rows = &report.stats.full_ink_tank_options;
    assert_eq!(rows.len(), 2);
    assert!((rows[0].value - 64.52).abs() < f64::EPSILON);
    assert!((rows[1].value - 25.81).abs() < f64::EPSILON);

    // a tighter fallback cost funds more subs out of the same tank
    let config = AnalyzerConfig {
        sub_ink_consume_fallback: 0.3,
        ..AnalyzerConfig::default()
    };
    let report = analyze_build(&table, &config, &GearBuild::default(), WeaponId(20)).unwrap();
    assert_eq!(
        report
            .stats
            .full_ink_tank_options
            .last()
            .map(|row| row.subs_used),
        Some(3)
    );
}

#[test]
fn test_unusable_fallback_cost_fails_loud() {
    let table = WeaponParamsTable::bundled().unwrap();

    // a config built by hand bypasses load-time validation; the analysis
    // still refuses a fallback cost that is not a positive tank fraction
    for bad in [0.0, -0.5] {
        let config = AnalyzerConfig {
            sub_ink_consume_fallback: bad,
            ..AnalyzerConfig::default()
        };
        let err = analyze_build(&table, &config, &GearBuild::default(), WeaponId(20)).unwrap_err();
        match err {
            AnalyzeError::NonPositiveSubInkCost { sub_weapon, .. } => {
                assert_eq!(sub_weapon, SubWeaponId(13));
            }
            other => panic!("expected NonPositiveSubInkCost, got {:?}", other),
        }
    }
}

#[test]
fn test_roller_matrix_spans_swings_and_rolls() {
    let table = WeaponParamsTable::bundled().unwrap();
    let report = analyze_build(
        &table,
        &AnalyzerConfig::default(),
        &GearBuild::default(),
        WeaponId(1000),
    )
    .unwrap();
    separator("Ink Roller matrix");
    print_report("Ink Roller", &report);

    let rows = &report.stats.full_ink_tank_options;
    let shape: Vec<_> = rows.iter().map(|row| (row.subs_used, row.kind)).collect();
    assert_eq!(
        shape,
        vec![
            (0, InkConsumeType::HorizontalSwing),
            (0, InkConsumeType::VerticalSwing),
            (0, InkConsumeType::RollMax),
            (0, InkConsumeType::RollMin),
            (1, InkConsumeType::HorizontalSwing),
            (1, InkConsumeType::VerticalSwing),
            (1, InkConsumeType::RollMax),
            (1, InkConsumeType::RollMin),
        ]
    );

    // per-frame roll costs translate into frames of rolling on one tank
    assert!((rows[2].value - 1000.0).abs() < f64::EPSILON);
    assert!((rows[3].value - 2000.0).abs() < f64::EPSILON);
    assert!((rows[6].value - 300.0).abs() < f64::EPSILON);
    assert!((rows[7].value - 600.0).abs() < f64::EPSILON);
}

#[test]
fn test_reports_round_trip_through_json() {
    let table = WeaponParamsTable::bundled().unwrap();
    let build = GearBuild {
        head: GearPiece::uniform(Ability::InkSaverMain),
        ..GearBuild::default()
    };
    let report = analyze_build(
        &table,
        &AnalyzerConfig::default(),
        &build,
        WeaponId(5000),
    )
    .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: AnalyzedBuild = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    // matrix rows keep the wire name for the action discriminant
    assert!(json.contains("\"type\":\"DUALIE_ROLL\""));
}

#[test]
fn test_analysis_is_deterministic() {
    let table = WeaponParamsTable::bundled().unwrap();
    let config = AnalyzerConfig::default();
    let build = GearBuild {
        head: GearPiece::uniform(Ability::SpecialChargeUp),
        clothes: GearPiece::new(
            Ability::InkSaverMain,
            [Ability::InkSaverSub, Ability::SpecialSaver, Ability::RunSpeedUp],
        ),
        shoes: GearPiece::default(),
    };

    for id in table.weapon_ids() {
        let first = analyze_build(&table, &config, &build, id).unwrap();
        let second = analyze_build(&table, &config, &build, id).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unknown_ids_fail_loud() {
    let table = WeaponParamsTable::bundled().unwrap();
    let err = analyze_build(
        &table,
        &AnalyzerConfig::default(),
        &GearBuild::default(),
        WeaponId(424_242),
    )
    .unwrap_err();
    assert_eq!(err, AnalyzeError::WeaponNotFound(WeaponId(424_242)));
}
