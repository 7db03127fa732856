mod impact_class;
mod pam;
mod profile_impact;
mod profile_impact_table;
mod ufr;

pub use impact_class::ImpactClass;
pub use pam::PAM_IMPACT;
pub use profile_impact::ProfileImpact;
pub use profile_impact_table::{ProfileImpactTable, PROFILE_IMPACTS};
pub use ufr::UFR_IMPACT;
