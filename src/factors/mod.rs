//! Individual risk factors: human capital, company risk and upskilling

pub mod human_capital;
pub mod company;
pub mod upskilling;

pub use human_capital::{
    compute_fhc, experience_factor, human_capital_breakdown, HumanCapitalBreakdown,
    EXPERIENCE_FACTOR_FLOOR,
};
pub use company::{company_risk_factor, compute_fcr};
pub use upskilling::{compute_fus, UPSKILLING_FACTOR_FLOOR};
