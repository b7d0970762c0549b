use crate::data::Earthquake;

/// Upper bound on the earthquake subset shown for a city.
pub const MAX_EARTHQUAKES: usize = 30;

/// Case-insensitive substring test. An empty needle never matches.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() { return false }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Earthquakes with `magnitude >= threshold`, in file order.
pub fn filter_earthquakes_by_magnitude(earthquakes: &[Earthquake], threshold: f64) -> Vec<&Earthquake> {
    earthquakes.iter()
        .filter(|eq| eq.magnitude >= threshold)
        .collect()
}

/// Earthquakes whose location mentions `city` (case-insensitive) with
/// `magnitude >= min_magnitude`, newest first, at most `max_count` entries.
/// Ties on datetime keep file order.
pub fn filter_earthquakes_by_city_and_magnitude<'a>(
    earthquakes: &'a [Earthquake],
    city: &str,
    min_magnitude: f64,
    max_count: usize,
) -> Vec<&'a Earthquake> {
    if city.is_empty() { return Vec::new() }

    let needle = city.to_lowercase();
    let mut matches: Vec<&Earthquake> = earthquakes.iter()
        .filter(|eq| eq.magnitude >= min_magnitude)
        .filter(|eq| eq.location.to_lowercase().contains(&needle))
        .collect();

    matches.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    matches.truncate(max_count);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(datetime: i64, magnitude: f64, location: &str) -> Earthquake {
        Earthquake {
            datetime,
            depth: 10.0,
            magnitude,
            location: location.to_string(),
            latitude: 14.6,
            longitude: 121.0,
        }
    }

    #[test]
    fn magnitude_filter_is_a_threshold() {
        let quakes = vec![quake(1, 2.9, "A"), quake(2, 3.0, "B"), quake(3, 4.5, "C")];
        let out = filter_earthquakes_by_magnitude(&quakes, 3.0);
        assert_eq!(out.iter().map(|eq| eq.datetime).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn city_filter_matches_reference_example() {
        let quakes = vec![quake(100, 4.0, "Manila"), quake(200, 3.0, "Manila")];
        let out = filter_earthquakes_by_city_and_magnitude(&quakes, "Manila", 3.5, MAX_EARTHQUAKES);
        assert_eq!(out, vec![&quakes[0]]);
    }

    #[test]
    fn city_filter_is_case_insensitive_substring() {
        let quakes = vec![
            quake(1, 4.0, "012 km N 45° W of MANILA CITY (Metro Manila)"),
            quake(2, 4.0, "Quezon City"),
            quake(3, 4.0, "near manila bay"),
        ];
        let out = filter_earthquakes_by_city_and_magnitude(&quakes, "Manila", 0.0, MAX_EARTHQUAKES);
        assert_eq!(out.iter().map(|eq| eq.datetime).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn city_filter_sorts_newest_first_and_caps() {
        let quakes: Vec<Earthquake> = (0..50)
            .map(|i| quake((i * 7919) % 101, 5.0, "Davao City"))
            .collect();
        let out = filter_earthquakes_by_city_and_magnitude(&quakes, "davao", 1.0, MAX_EARTHQUAKES);

        assert_eq!(out.len(), MAX_EARTHQUAKES);
        for pair in out.windows(2) { assert!(pair[0].datetime >= pair[1].datetime) }

        // The kept entries are the newest ones overall.
        let mut all: Vec<i64> = quakes.iter().map(|eq| eq.datetime).collect();
        all.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(out.iter().map(|eq| eq.datetime).collect::<Vec<_>>(), all[..MAX_EARTHQUAKES].to_vec());
    }

    #[test]
    fn city_filter_respects_magnitude_and_count() {
        let quakes = vec![quake(1, 1.0, "Cebu"), quake(2, 6.0, "Cebu"), quake(3, 5.0, "Cebu")];
        let out = filter_earthquakes_by_city_and_magnitude(&quakes, "cebu", 5.0, 1);
        assert_eq!(out, vec![&quakes[2]]);

        for eq in filter_earthquakes_by_city_and_magnitude(&quakes, "cebu", 5.0, 10) {
            assert!(eq.magnitude >= 5.0);
        }
    }

    #[test]
    fn empty_city_matches_nothing() {
        let quakes = vec![quake(1, 5.0, "Cebu")];
        assert!(filter_earthquakes_by_city_and_magnitude(&quakes, "", 0.0, 10).is_empty());
        assert!(!contains_ignore_case("Cebu", ""));
    }
}
