mod check;

pub use check::{
    Check, MAX_PARTY_SIZE, MAX_TIP_PERCENTAGE, MIN_PARTY_SIZE, MIN_TIP_PERCENTAGE,
};
