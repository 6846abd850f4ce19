//! Compile-time taxonomy tables and the process-wide lookup indices built
//! from them: category→CWE membership, yearly CWE Top 25 lists, and the
//! deprecated SANS Top 25 grouping.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use super::category::{SqCategory, CATEGORY_PRIORITY};

/// CWE membership per category. A CWE may appear under several categories;
/// the tie-break in [`CATEGORY_PRIORITY`] decides which one is reported.
/// `Others` has no entry.
pub static CWES_BY_SQ_CATEGORY: &[(SqCategory, &[&str])] = &[
    (SqCategory::BufferOverflow, &["119", "120", "131", "676", "788"]),
    (SqCategory::SqlInjection, &["89", "564", "943"]),
    (SqCategory::CommandInjection, &["77", "78", "88", "214"]),
    (SqCategory::PathTraversalInjection, &["22"]),
    (SqCategory::LdapInjection, &["90"]),
    (SqCategory::XpathInjection, &["643"]),
    (SqCategory::Rce, &["94", "95"]),
    (SqCategory::Dos, &["400", "624"]),
    (SqCategory::Ssrf, &["918"]),
    (SqCategory::Csrf, &["352"]),
    (SqCategory::Xss, &["79", "80", "81", "82", "83", "84", "85", "86", "87"]),
    (SqCategory::LogInjection, &["117"]),
    (SqCategory::HttpResponseSplitting, &["113"]),
    (SqCategory::OpenRedirect, &["601"]),
    (SqCategory::Xxe, &["611", "827"]),
    (SqCategory::ObjectInjection, &["134", "470", "502"]),
    (
        SqCategory::WeakCryptography,
        &["295", "297", "321", "322", "323", "324", "325", "326", "327", "328", "330", "780"],
    ),
    (
        SqCategory::Auth,
        &["798", "640", "620", "549", "522", "521", "263", "262", "261", "259", "308"],
    ),
    (SqCategory::InsecureConf, &["102", "215", "346", "614", "489", "942"]),
    (SqCategory::FileManipulation, &["97", "73"]),
    (SqCategory::EncryptionOfSensitiveData, &["311", "315", "319"]),
    (SqCategory::Traceability, &["778"]),
    (SqCategory::Permission, &["266", "269", "284", "668", "732"]),
];

// https://cwe.mitre.org/top25/archive/2019/2019_cwe_top25.html
pub static CWE_TOP25_2019: &[&str] = &[
    "119", "79", "20", "200", "125", "89", "416", "190", "352", "22", "78", "787", "287", "476",
    "732", "434", "611", "94", "798", "400", "772", "426", "502", "269", "295",
];

// https://cwe.mitre.org/top25/archive/2020/2020_cwe_top25.html
pub static CWE_TOP25_2020: &[&str] = &[
    "79", "787", "20", "125", "119", "89", "200", "416", "352", "78", "190", "22", "476", "287",
    "434", "732", "94", "522", "611", "798", "502", "269", "400", "306", "862",
];

// https://cwe.mitre.org/top25/archive/2021/2021_cwe_top25.html
pub static CWE_TOP25_2021: &[&str] = &[
    "787", "79", "125", "20", "78", "89", "416", "22", "352", "434", "306", "190", "502", "287",
    "476", "798", "119", "862", "276", "200", "522", "732", "611", "918", "77",
];

/// Published CWE Top 25 lists keyed by year. Append-only: a new year is a
/// new row, existing rows never change.
pub static CWES_BY_CWE_TOP_25: &[(&str, &[&str])] = &[
    ("2019", CWE_TOP25_2019),
    ("2020", CWE_TOP25_2020),
    ("2021", CWE_TOP25_2021),
];

pub const SANS_TOP_25_INSECURE_INTERACTION: &str = "insecure-interaction";
pub const SANS_TOP_25_RISKY_RESOURCE: &str = "risky-resource";
pub const SANS_TOP_25_POROUS_DEFENSES: &str = "porous-defenses";

// See https://www.sans.org/top25-software-errors
static INSECURE_CWE: &[&str] = &["89", "78", "79", "434", "352", "601"];
static RISKY_CWE: &[&str] = &["120", "22", "494", "829", "676", "131", "134", "190"];
static POROUS_CWE: &[&str] = &[
    "306", "862", "798", "311", "807", "250", "863", "732", "327", "307", "759",
];

/// Legacy SANS Top 25 grouping.
#[deprecated(note = "the SANS Top 25 report is outdated; use CWES_BY_CWE_TOP_25")]
pub static CWES_BY_SANS_TOP_25: &[(&str, &[&str])] = &[
    (SANS_TOP_25_INSECURE_INTERACTION, INSECURE_CWE),
    (SANS_TOP_25_RISKY_RESOURCE, RISKY_CWE),
    (SANS_TOP_25_POROUS_DEFENSES, POROUS_CWE),
];

/// Member CWEs of a category. Empty for `Others`.
pub fn cwes_for_category(category: SqCategory) -> &'static [&'static str] {
    CWES_BY_SQ_CATEGORY
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, cwes)| *cwes)
        .unwrap_or(&[])
}

static REGISTRY: LazyLock<StandardsRegistry> = LazyLock::new(StandardsRegistry::new);

/// Read-only indices over the static tables, built once per process and
/// shared by reference across threads.
pub struct StandardsRegistry {
    category_by_key: FxHashMap<&'static str, SqCategory>,
    categories_by_cwe: FxHashMap<&'static str, Vec<SqCategory>>,
    top25_by_year: Vec<(&'static str, FxHashSet<&'static str>)>,
    sans_by_group: Vec<(&'static str, FxHashSet<&'static str>)>,
}

impl StandardsRegistry {
    pub fn global() -> &'static StandardsRegistry {
        &REGISTRY
    }

    fn new() -> Self {
        let category_by_key = CATEGORY_PRIORITY.iter().map(|c| (c.key(), *c)).collect();

        let mut categories_by_cwe: FxHashMap<&'static str, Vec<SqCategory>> =
            FxHashMap::default();
        for (category, cwes) in CWES_BY_SQ_CATEGORY {
            for cwe in cwes.iter() {
                categories_by_cwe.entry(*cwe).or_default().push(*category);
            }
        }
        for categories in categories_by_cwe.values_mut() {
            categories.sort();
            categories.dedup();
        }

        let top25_by_year = CWES_BY_CWE_TOP_25
            .iter()
            .map(|(year, cwes)| (*year, cwes.iter().copied().collect()))
            .collect();

        #[allow(deprecated)]
        let sans_by_group = CWES_BY_SANS_TOP_25
            .iter()
            .map(|(group, cwes)| (*group, cwes.iter().copied().collect()))
            .collect();

        Self {
            category_by_key,
            categories_by_cwe,
            top25_by_year,
            sans_by_group,
        }
    }

    pub fn category_by_key(&self, key: &str) -> Option<SqCategory> {
        self.category_by_key.get(key).copied()
    }

    /// Categories whose membership contains `cwe`, in priority order.
    pub fn categories_for_cwe(&self, cwe: &str) -> &[SqCategory] {
        self.categories_by_cwe
            .get(cwe)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Years whose Top 25 list contains any of `cwes`.
    pub fn top25_years_matching(&self, cwes: &BTreeSet<String>) -> BTreeSet<String> {
        matching_keys(&self.top25_by_year, cwes)
    }

    /// Legacy SANS groups containing any of `cwes`.
    pub fn sans_groups_matching(&self, cwes: &BTreeSet<String>) -> BTreeSet<String> {
        matching_keys(&self.sans_by_group, cwes)
    }

    pub fn has_top25_year(&self, year: &str) -> bool {
        self.top25_by_year.iter().any(|(y, _)| *y == year)
    }

    pub fn top25_years(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.top25_by_year.iter().map(|(y, _)| *y)
    }
}

fn matching_keys(
    table: &[(&'static str, FxHashSet<&'static str>)],
    cwes: &BTreeSet<String>,
) -> BTreeSet<String> {
    table
        .iter()
        .filter(|(_, members)| cwes.iter().any(|c| members.contains(c.as_str())))
        .map(|(key, _)| (*key).to_string())
        .collect()
}
