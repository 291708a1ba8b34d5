//! Query-parameter composition for hall search
//!
//! The three sort modes are mutually exclusive but the backend wants them as
//! three independent boolean flags, always present. `radius` rides along only
//! with proximity sort, `userId` only with recommendation sort.

use hallbook_core::{FilterCriteria, SortMode};

/// Build the flat parameter list for the hall search endpoint.
///
/// Coordinates for proximity sort are appended later by the caller, after the
/// location provider has resolved them.
pub(crate) fn hall_search_params(
    page: u32,
    size: u32,
    filter: &FilterCriteria,
    search: &str,
    user_id: Option<i64>,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("page".into(), page.to_string()),
        ("size".into(), size.to_string()),
        ("search".into(), search.to_string()),
        ("minPrice".into(), filter.price_range.0.to_string()),
        ("maxPrice".into(), filter.price_range.1.to_string()),
        ("minCapacity".into(), filter.capacity_range.0.to_string()),
        ("maxCapacity".into(), filter.capacity_range.1.to_string()),
    ];

    if let Some(location) = &filter.location {
        params.push(("location".into(), location.clone()));
    }
    if let Some(category) = &filter.category {
        params.push(("category".into(), category.clone()));
    }

    let sort = filter.sort;
    params.push((
        "sortByRecommendation".into(),
        (sort == Some(SortMode::Recommendation)).to_string(),
    ));
    params.push((
        "filterByProximity".into(),
        (sort == Some(SortMode::Proximity)).to_string(),
    ));
    params.push((
        "sortByPrice".into(),
        (sort == Some(SortMode::Price)).to_string(),
    ));

    if sort == Some(SortMode::Proximity) {
        params.push(("radius".into(), filter.radius_km.to_string()));
    }
    if sort == Some(SortMode::Recommendation) {
        if let Some(user_id) = user_id {
            params.push(("userId".into(), user_id.to_string()));
        }
    }

    params
}
