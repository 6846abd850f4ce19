//! Security standard tags: taxonomy tables, tag parser, category
//! classification, Top 25 membership and the result value.

pub mod category;
pub mod classifier;
pub mod parser;
pub mod registry;
pub mod security_standards;
pub mod taxonomy;
pub mod top25;

pub use category::{compare_category_keys, SqCategory, VulnerabilityProbability, CATEGORY_PRIORITY};
pub use parser::ParsedStandards;
pub use registry::{cwes_for_category, StandardsRegistry};
pub use security_standards::SecurityStandards;
pub use taxonomy::{OwaspAsvs, OwaspAsvsVersion, PciDss, PciDssVersion, UNKNOWN_STANDARD};
