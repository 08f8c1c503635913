use super::polygon::Polygon;
use super::tooth::{ToothClass, ALL_TEETH};

/// Mapping from tooth class to at most one polygon
///
/// Total over all four classes: an absent class yields `None`, which
/// downstream measurement code interprets as "no measurement possible"
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSet {
    polygons: [Option<Polygon>; 4],
}

impl LabelSet {
    /// Creates an empty label set (all four classes absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Polygon for a tooth class, if any
    pub fn get(&self, tooth: ToothClass) -> Option<&Polygon> {
        self.polygons[tooth.index()].as_ref()
    }

    /// Inserts a candidate polygon for a tooth class
    ///
    /// Retention policy when the class already holds a polygon: the
    /// candidate with the greater point count wins (point count is a
    /// proxy for annotation detail); ties keep the earlier one. Returns
    /// whether the candidate was retained.
    pub fn insert(&mut self, tooth: ToothClass, candidate: Polygon) -> bool {
        let slot = &mut self.polygons[tooth.index()];
        match slot {
            Some(existing) if existing.len() >= candidate.len() => false,
            _ => {
                *slot = Some(candidate);
                true
            }
        }
    }

    /// Returns whether no class holds a polygon
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(|p| p.is_none())
    }

    /// Number of classes that hold a polygon
    pub fn annotated_count(&self) -> usize {
        self.polygons.iter().filter(|p| p.is_some()).count()
    }

    /// Iterates over (class, polygon) for annotated classes
    pub fn iter(&self) -> impl Iterator<Item = (ToothClass, &Polygon)> {
        ALL_TEETH
            .iter()
            .filter_map(move |&t| self.get(t).map(|p| (t, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(n_points: usize) -> Polygon {
        let flat: Vec<f64> = (0..n_points * 2).map(|i| i as f64 * 0.01).collect();
        Polygon::from_flat(&flat).unwrap()
    }

    #[test]
    fn test_empty_set() {
        let set = LabelSet::new();
        assert!(set.is_empty());
        assert_eq!(set.annotated_count(), 0);
        assert!(set.get(ToothClass::UpperRight).is_none());
    }

    #[test]
    fn test_longer_candidate_replaces_shorter() {
        let mut set = LabelSet::new();
        assert!(set.insert(ToothClass::UpperRight, poly(3)));
        assert!(set.insert(ToothClass::UpperRight, poly(4)));
        assert_eq!(set.get(ToothClass::UpperRight).unwrap().len(), 4);
    }

    #[test]
    fn test_shorter_candidate_never_replaces() {
        let mut set = LabelSet::new();
        set.insert(ToothClass::UpperRight, poly(4));
        assert!(!set.insert(ToothClass::UpperRight, poly(3)));
        assert_eq!(set.get(ToothClass::UpperRight).unwrap().len(), 4);
    }

    #[test]
    fn test_tie_keeps_first() {
        let mut set = LabelSet::new();
        let first = poly(4);
        let second = Polygon::from_bbox(0.5, 0.5, 0.1, 0.1);
        set.insert(ToothClass::LowerLeft, first.clone());
        assert!(!set.insert(ToothClass::LowerLeft, second));
        assert_eq!(set.get(ToothClass::LowerLeft), Some(&first));
    }

    #[test]
    fn test_iter_yields_annotated_only() {
        let mut set = LabelSet::new();
        set.insert(ToothClass::UpperLeft, poly(5));
        set.insert(ToothClass::LowerRight, poly(3));
        let classes: Vec<ToothClass> = set.iter().map(|(t, _)| t).collect();
        assert_eq!(classes, vec![ToothClass::UpperLeft, ToothClass::LowerRight]);
    }
}
