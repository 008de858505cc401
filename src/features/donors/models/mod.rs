mod donor;
mod filter;

pub use donor::{Donor, Gender, NewDonor};
pub use filter::{DonorFilter, DonorPredicate};
