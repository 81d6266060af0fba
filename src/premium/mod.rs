//! Actuarial premium engine

mod engine;

pub use engine::{
    claim_probability, expected_loss, individual_probability, monthly_premium, payout_amount,
    quote_premium, systemic_probability, PremiumQuote,
};
