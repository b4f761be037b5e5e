use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::models::TravelPolicy;

/// Maximum travel score with the default weights
pub const DEFAULT_TRAVEL_SCALE: f64 = 20.0;

/// Travel feasibility score for a volunteer and a request city
///
/// `scale` is the maximum attainable score. Rules, first match wins:
/// 1. same city: full scale
/// 2. request city in the volunteer's range and willing (> short threshold): full scale
/// 3. request city in range, not willing: half scale
/// 4. out of range, willing to travel far (> long threshold): half scale
/// 5. out of range, willing: flat score
/// 6. otherwise: 0
#[inline]
pub fn travel_score<S: BuildHasher>(
    volunteer_city: &str,
    request_city: &str,
    travel_minutes: u32,
    reachable_cities: &HashSet<String, S>,
    policy: &TravelPolicy,
    scale: f64,
) -> f64 {
    let willing = travel_minutes > policy.short_minutes;
    let willing_long = travel_minutes > policy.long_minutes;

    if volunteer_city == request_city {
        return scale;
    }

    if reachable_cities.contains(request_city) {
        return if willing { scale } else { scale / 2.0 };
    }

    if willing_long {
        scale / 2.0
    } else if willing {
        policy.near_flat.min(scale)
    } else {
        0.0
    }
}
