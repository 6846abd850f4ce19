//! Classification of security standard tags into categories, taxonomy
//! views and CWE Top 25 membership.

use std::collections::BTreeSet;

use secstd_classify::standards::registry::{
    CWES_BY_CWE_TOP_25, CWE_TOP25_2019, CWE_TOP25_2020, CWE_TOP25_2021,
    SANS_TOP_25_INSECURE_INTERACTION, SANS_TOP_25_POROUS_DEFENSES,
};
use secstd_classify::standards::*;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_cwe_tag_defaults_to_unknown_and_others() {
    let result = SecurityStandards::from_security_standards(["owaspTop10:a1", "pciDss-3.2:6.5"]);
    assert_eq!(result.cwe(), &set(&[UNKNOWN_STANDARD]));
    assert_eq!(result.sq_category(), SqCategory::Others);
    assert!(result.ignored_sq_categories().is_empty());
}

#[test]
fn test_empty_input() {
    let result = SecurityStandards::from_security_standards(Vec::<String>::new());
    assert!(result.standards().is_empty());
    assert_eq!(result.cwe(), &set(&["unknown"]));
    assert_eq!(result.sq_category(), SqCategory::Others);
}

#[test]
fn test_sql_injection_alone() {
    let result = SecurityStandards::from_security_standards(["cwe:89"]);
    assert_eq!(result.cwe(), &set(&["89"]));
    assert_eq!(result.sq_category(), SqCategory::SqlInjection);
    assert!(result.ignored_sq_categories().is_empty());
}

#[test]
fn test_tie_break_keeps_earliest_declared_category() {
    // 798 -> auth, 732 -> permission; auth is declared first
    let result = SecurityStandards::from_security_standards(["cwe:732", "cwe:798"]);
    assert_eq!(result.sq_category(), SqCategory::Auth);
    assert_eq!(
        result.ignored_sq_categories(),
        &BTreeSet::from([SqCategory::Permission])
    );
}

#[test]
fn test_tie_break_across_many_categories() {
    let result = SecurityStandards::from_security_standards([
        "cwe:778", "cwe:79", "cwe:94", "cwe:311", "cwe:unrelated",
    ]);
    assert_eq!(result.sq_category(), SqCategory::Rce);
    assert_eq!(
        result.ignored_sq_categories(),
        &BTreeSet::from([
            SqCategory::Xss,
            SqCategory::EncryptionOfSensitiveData,
            SqCategory::Traceability,
        ])
    );
    assert!(!result.ignored_sq_categories().contains(&result.sq_category()));
}

#[test]
fn test_unknown_cwe_falls_back_to_others() {
    let result = SecurityStandards::from_security_standards(["cwe:99999"]);
    assert_eq!(result.cwe(), &set(&["99999"]));
    assert_eq!(result.sq_category(), SqCategory::Others);
}

#[test]
fn test_duplicate_tags_are_deduplicated() {
    let result = SecurityStandards::from_security_standards(["cwe:89", "cwe:89", "owaspTop10:a1"]);
    assert_eq!(result.standards(), &set(&["cwe:89", "owaspTop10:a1"]));
}

#[test]
fn test_missing_and_empty_entries_are_filtered() {
    let result = SecurityStandards::from_optional_standards([
        Some("cwe:79"),
        None,
        Some(""),
        Some("owaspTop10-2021:a3"),
    ]);
    assert_eq!(result.standards(), &set(&["cwe:79", "owaspTop10-2021:a3"]));
    assert_eq!(result.sq_category(), SqCategory::Xss);
}

#[test]
fn test_unrecognized_prefix_only_lands_in_standards() {
    let base = SecurityStandards::from_security_standards(["cwe:89"]);
    let with_foo = SecurityStandards::from_security_standards(["cwe:89", "foo:bar"]);

    assert!(with_foo.standards().contains("foo:bar"));
    assert_eq!(with_foo.cwe(), base.cwe());
    assert_eq!(with_foo.sq_category(), base.sq_category());
    assert_eq!(with_foo.ignored_sq_categories(), base.ignored_sq_categories());
    assert!(with_foo.owasp_top10().is_empty());
    assert!(with_foo.owasp_top10_2021().is_empty());
    assert!(with_foo.pci_dss_32().is_empty());
    assert!(with_foo.pci_dss_40().is_empty());
    assert!(with_foo.owasp_asvs_40().is_empty());
}

#[test]
fn test_taxonomy_views() {
    let result = SecurityStandards::from_security_standards([
        "owaspTop10:a1",
        "owaspTop10:a3",
        "owaspTop10-2021:a3",
        "pciDss-3.2:6.5.1",
        "pciDss-4.0:6.2.4",
        "owaspAsvs-4.0:5.3.4",
        "cwe:89",
    ]);
    assert_eq!(result.owasp_top10(), set(&["a1", "a3"]));
    assert_eq!(result.owasp_top10_2021(), set(&["a3"]));
    assert_eq!(result.pci_dss_32(), set(&["6.5.1"]));
    assert_eq!(result.pci_dss_40(), set(&["6.2.4"]));
    assert_eq!(result.pci_dss(PciDssVersion::V4_0), result.pci_dss_40());
    assert_eq!(result.owasp_asvs_40(), set(&["5.3.4"]));
}

#[test]
fn test_prefix_matching_is_case_sensitive() {
    let result = SecurityStandards::from_security_standards(["CWE:89", "OWASPTOP10:a1"]);
    assert_eq!(result.cwe(), &set(&["unknown"]));
    assert!(result.owasp_top10().is_empty());
    assert_eq!(result.sq_category(), SqCategory::Others);
}

#[test]
fn test_cwe_top25_xss_in_every_year() {
    let result = SecurityStandards::from_security_standards(["cwe:79"]);
    assert_eq!(result.cwe_top25(), set(&["2019", "2020", "2021"]));
}

#[test]
fn test_cwe_top25_single_year() {
    // 918 (SSRF) first entered the list in 2021
    let result = SecurityStandards::from_security_standards(["cwe:918"]);
    assert_eq!(result.cwe_top25(), set(&["2021"]));

    // 772 was only listed in 2019
    let result = SecurityStandards::from_security_standards(["cwe:772"]);
    assert_eq!(result.cwe_top25(), set(&["2019"]));
}

#[test]
fn test_cwe_top25_unknown_is_empty() {
    let result = SecurityStandards::from_security_standards(["owaspTop10:a1"]);
    assert!(result.cwe_top25().is_empty());
}

#[test]
fn test_cwe_top25_tables_are_year_ordered() {
    let years: Vec<&str> = CWES_BY_CWE_TOP_25.iter().map(|(y, _)| *y).collect();
    assert_eq!(years, vec!["2019", "2020", "2021"]);
    assert_eq!(CWE_TOP25_2019[0], "119");
    assert_eq!(CWE_TOP25_2020[0], "79");
    assert_eq!(CWE_TOP25_2021[0], "787");
}

#[test]
#[allow(deprecated)]
fn test_legacy_sans_top25_grouping() {
    let result = SecurityStandards::from_security_standards(["cwe:89", "cwe:798"]);
    assert_eq!(
        result.sans_top25(),
        set(&[SANS_TOP_25_INSECURE_INTERACTION, SANS_TOP_25_POROUS_DEFENSES])
    );

    let none = SecurityStandards::from_security_standards(["cwe:1"]);
    assert!(none.sans_top25().is_empty());
}

#[test]
fn test_category_keys_round_trip() {
    for cat in SqCategory::all() {
        assert_eq!(SqCategory::from_key(cat.key()), Some(*cat));
        assert_eq!(cat.key().parse::<SqCategory>().ok(), Some(*cat));
        assert_eq!(cat.to_string(), cat.key());
    }
    assert_eq!(SqCategory::from_key("encrypt-data"), Some(SqCategory::EncryptionOfSensitiveData));
    assert_eq!(SqCategory::from_key("nope"), None);
    assert!("nope".parse::<SqCategory>().is_err());
}

#[test]
fn test_category_vulnerability() {
    assert_eq!(SqCategory::SqlInjection.vulnerability(), VulnerabilityProbability::High);
    assert_eq!(SqCategory::Rce.vulnerability(), VulnerabilityProbability::Medium);
    assert_eq!(SqCategory::Permission.vulnerability(), VulnerabilityProbability::Medium);
    assert_eq!(SqCategory::Others.vulnerability(), VulnerabilityProbability::Low);
}

#[test]
fn test_vulnerability_by_score() {
    assert_eq!(VulnerabilityProbability::by_score(Some(3)), Some(VulnerabilityProbability::High));
    assert_eq!(VulnerabilityProbability::by_score(Some(2)), Some(VulnerabilityProbability::Medium));
    assert_eq!(VulnerabilityProbability::by_score(Some(1)), Some(VulnerabilityProbability::Low));
    assert_eq!(VulnerabilityProbability::by_score(Some(0)), None);
    assert_eq!(VulnerabilityProbability::by_score(None), None);
    assert!(VulnerabilityProbability::try_from(7).is_err());
}

#[test]
fn test_compare_category_keys() {
    use std::cmp::Ordering;

    assert_eq!(compare_category_keys("buffer-overflow", "sql-injection"), Ordering::Less);
    assert_eq!(compare_category_keys("others", "permission"), Ordering::Greater);
    assert_eq!(compare_category_keys("xss", "xss"), Ordering::Equal);
    assert_eq!(compare_category_keys("zzz", "others"), Ordering::Greater);

    let mut keys = vec!["others", "unknown-key", "xss", "rce", "auth"];
    keys.sort_by(|a, b| compare_category_keys(a, b));
    assert_eq!(keys, vec!["rce", "xss", "auth", "others", "unknown-key"]);
}

#[test]
fn test_priority_constant_matches_category_order() {
    let sorted: Vec<SqCategory> = {
        let mut all = CATEGORY_PRIORITY.to_vec();
        all.reverse();
        all.sort();
        all
    };
    assert_eq!(sorted, CATEGORY_PRIORITY.to_vec());
    assert_eq!(CATEGORY_PRIORITY[0], SqCategory::BufferOverflow);
    assert_eq!(CATEGORY_PRIORITY[1], SqCategory::SqlInjection);
}

#[test]
fn test_cwes_for_category() {
    assert_eq!(cwes_for_category(SqCategory::SqlInjection), &["89", "564", "943"]);
    assert!(cwes_for_category(SqCategory::Others).is_empty());
}

#[test]
fn test_pci_and_asvs_requirement_enums() {
    assert_eq!(PciDss::all().len(), 12);
    assert_eq!(PciDss::R6.category(), "6");
    assert_eq!(OwaspAsvs::all().len(), 14);
    assert_eq!(OwaspAsvs::C14.category(), "14");
    assert_eq!(PciDssVersion::V3_2.prefix(), "pciDss-3.2");
    assert_eq!(OwaspAsvsVersion::V4_0.prefix(), "owaspAsvs-4.0");
}

#[test]
fn test_serialized_result_uses_category_keys() {
    let result = SecurityStandards::from_security_standards(["cwe:732", "cwe:798"]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["sq_category"], "auth");
    assert_eq!(json["ignored_sq_categories"], serde_json::json!(["permission"]));
    assert_eq!(json["cwe"], serde_json::json!(["732", "798"]));
}

#[test]
fn test_classification_is_idempotent() {
    let tags = ["cwe:79", "cwe:352", "owaspTop10:a7", "foo:bar"];
    let a = SecurityStandards::from_security_standards(tags);
    let b = SecurityStandards::from_security_standards(tags);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
