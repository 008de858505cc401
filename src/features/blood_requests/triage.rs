//! Triage ordering of open blood requests.

use std::cmp::{Ordering, Reverse};

use crate::features::blood_requests::models::BloodRequest;

/// Most urgent first, then newest first. Id breaks remaining ties so the
/// order is total and stable across reads.
pub fn triage_cmp(a: &BloodRequest, b: &BloodRequest) -> Ordering {
    let key = |r: &BloodRequest| (r.urgency_rank(), Reverse(r.created_at), Reverse(r.id));
    key(a).cmp(&key(b))
}

pub fn triage(mut requests: Vec<BloodRequest>) -> Vec<BloodRequest> {
    requests.sort_by(triage_cmp);
    requests
}
