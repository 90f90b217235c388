//! Rule-based field extractors for résumé text.
//!
//! Every extractor is a total function: no match yields a sentinel value or
//! an empty container, never an error.

pub mod contact;
pub mod education;
pub mod patterns;
pub mod profiles;
pub mod sections;
pub mod skills;

pub use contact::{extract_email, extract_name, extract_phone, title_case};
pub use education::extract_education;
pub use profiles::{extract_coding_profiles, PlatformMatcher};
pub use sections::{extract_projects, extract_publications, extract_section, SectionHeaders};
pub use skills::{extract_skills, skill_regex};
