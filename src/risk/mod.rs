//! Risk scores: idiosyncratic (individual) and systematic (occupational)

pub mod idiosyncratic;
pub mod hazard;
pub mod systematic;

pub use idiosyncratic::{
    idiosyncratic_risk, raw_idiosyncratic_score, IDIOSYNCRATIC_MAX, IDIOSYNCRATIC_MIN,
};
pub use hazard::{interpolate_hazard, transition_path, TransitionPoint};
pub use systematic::systematic_risk;
