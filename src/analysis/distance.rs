//! Expert-to-group fuzzy distances.

use crate::data::{DistanceColumn, DistanceTable, FuzzyColumn, FuzzyTable, ItemValues};

/// Computes the distance of every expert from each item's group mean.
///
/// For expert `e` and item `i` with group mean `(a1, a2, a3)`:
///
/// ```text
/// d(e, i) = sqrt(((a1 - m1)^2 + (a2 - m2)^2 + (a3 - m3)^2) / 3)
/// ```
///
/// Missing cells stay missing; nothing is imputed.
///
/// # Examples
///
/// ```
/// use u_delphi::analysis::calculate_distance;
/// use u_delphi::data::RatingMatrix;
/// use u_delphi::scale::{map_to_fuzzy, LikertScale};
///
/// let ratings = RatingMatrix::from_columns([("Q1", vec![Some(4), Some(4), Some(4)])]).unwrap();
/// let distances = calculate_distance(&map_to_fuzzy(&ratings, LikertScale::Five));
/// assert!(distances.columns()[0].distances.iter().all(|d| *d == Some(0.0)));
/// ```
pub fn calculate_distance(fuzzy: &FuzzyTable) -> DistanceTable {
    let columns = fuzzy.columns().iter().map(column_distances).collect();
    DistanceTable::new(columns, fuzzy.experts())
}

/// Distances for a single item column.
pub fn column_distances(column: &FuzzyColumn) -> DistanceColumn {
    let mean = column.group_mean();
    let distances = column
        .cells
        .iter()
        .map(|cell| match (cell, &mean) {
            (Some(tfn), Some(mean)) => Some(tfn.distance(mean)),
            _ => None,
        })
        .collect();
    DistanceColumn {
        item: column.item.clone(),
        distances,
    }
}

/// Mean distance per item (the item d-values), ignoring missing cells.
pub fn item_d_values(distances: &DistanceTable) -> ItemValues<Option<f64>> {
    distances
        .columns()
        .iter()
        .map(|c| (c.item.clone(), c.mean()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RatingMatrix;
    use crate::scale::{map_to_fuzzy, LikertScale};

    fn distances_for(columns: Vec<(&str, Vec<Option<i32>>)>) -> DistanceTable {
        let ratings = RatingMatrix::from_columns(columns).unwrap();
        calculate_distance(&map_to_fuzzy(&ratings, LikertScale::Five))
    }

    #[test]
    fn test_identical_ratings_zero_distance() {
        for r in 1..=5 {
            let d = distances_for(vec![("Q", vec![Some(r); 7])]);
            for v in &d.columns()[0].distances {
                assert_eq!(*v, Some(0.0), "rating {r}");
            }
        }
    }

    #[test]
    fn test_known_distances() {
        // Ratings 5,4,5,3 give group mean (0.45, 0.65, 0.85).
        let d = distances_for(vec![("Q", vec![Some(5), Some(4), Some(5), Some(3)])]);
        let expected = [0.15, 0.05, 0.15, 0.25];
        for (got, want) in d.columns()[0].distances.iter().zip(expected) {
            assert!((got.unwrap() - want).abs() < 1e-10);
        }

        let dv = item_d_values(&d);
        assert!((dv.get("Q").unwrap().unwrap() - 0.15).abs() < 1e-10);
    }

    #[test]
    fn test_missing_propagates() {
        let d = distances_for(vec![
            ("Q1", vec![Some(5), None, Some(3)]),
            ("Q2", vec![None, None, None]),
        ]);

        let q1 = &d.column("Q1").unwrap().distances;
        assert!(q1[0].is_some());
        assert!(q1[1].is_none());
        // Mean of 5 and 3 is rating 4's triple, so each is 0.2 away.
        assert!((q1[0].unwrap() - 0.2).abs() < 1e-10);
        assert!((q1[2].unwrap() - 0.2).abs() < 1e-10);

        assert!(d.column("Q2").unwrap().distances.iter().all(Option::is_none));

        let dv = item_d_values(&d);
        assert!(dv.get("Q2").unwrap().is_none());
    }

    #[test]
    fn test_shape_preserved() {
        let d = distances_for(vec![
            ("Q1", vec![Some(1), Some(2)]),
            ("Q2", vec![Some(3), Some(4)]),
            ("Q3", vec![Some(5), Some(5)]),
        ]);
        assert_eq!(d.experts(), 2);
        assert_eq!(
            d.columns().iter().map(|c| c.item.as_str()).collect::<Vec<_>>(),
            vec!["Q1", "Q2", "Q3"]
        );
    }
}
