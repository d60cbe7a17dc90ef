use fxhash::FxHashMap;

use crate::{error::DistanceTableError, kilometers::Kilometers};

/// Symmetric road distances between named locations.
///
/// Every pair is stored in both directions so that a lookup never needs to
/// allocate or normalize its key. A missing pair means there is no direct hop
/// between the two locations.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    neighbours: FxHashMap<String, FxHashMap<String, Kilometers>>,
    num_entries: usize,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self, DistanceTableError>
    where
        I: IntoIterator<Item = (S, S, u32)>,
        S: Into<String>,
    {
        let mut table = DistanceTable::new();
        for (from, to, km) in entries {
            table.insert(from, to, Kilometers::new(km))?;
        }
        Ok(table)
    }

    /// Registers the distance between `from` and `to` in both directions.
    ///
    /// Inserting the same pair twice with the same distance is a no-op, with a
    /// different distance it is an error. A location paired with itself only
    /// registers the location and must be 0 km.
    pub fn insert(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: Kilometers,
    ) -> Result<(), DistanceTableError> {
        let from = from.into();
        let to = to.into();

        if from.is_empty() || to.is_empty() {
            return Err(DistanceTableError::EmptyLocation);
        }

        if from == to {
            if !distance.is_zero() {
                return Err(DistanceTableError::SelfDistance(from, distance));
            }
            self.neighbours.entry(from).or_default();
            return Ok(());
        }

        if let Some(existing) = self.direct_distance(&from, &to) {
            if existing != distance {
                return Err(DistanceTableError::ConflictingDistance {
                    from,
                    to,
                    first: existing,
                    second: distance,
                });
            }
            return Ok(());
        }

        self.neighbours
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), distance);
        self.neighbours.entry(to).or_default().insert(from, distance);
        self.num_entries += 1;

        Ok(())
    }

    fn direct_distance(&self, from: &str, to: &str) -> Option<Kilometers> {
        self.neighbours
            .get(from)
            .and_then(|neighbours| neighbours.get(to))
            .copied()
    }

    /// Distance of the hop between two locations, in either direction.
    ///
    /// A known location is 0 km away from itself.
    pub fn distance(&self, from: &str, to: &str) -> Option<Kilometers> {
        if from == to {
            return self.contains_location(from).then_some(Kilometers::ZERO);
        }

        self.direct_distance(from, to)
    }

    pub fn contains_location(&self, location: &str) -> bool {
        self.neighbours.contains_key(location)
    }

    /// Location names in lexicographic order.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self.neighbours.keys().map(String::as_str).collect();
        locations.sort_unstable();
        locations
    }

    /// Each stored pair exactly once, ordered by `(from, to)` with `from < to`.
    pub fn entries(&self) -> Vec<(&str, &str, Kilometers)> {
        let mut entries: Vec<(&str, &str, Kilometers)> = self
            .neighbours
            .iter()
            .flat_map(|(from, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |(to, _)| from < *to)
                    .map(move |(to, &km)| (from.as_str(), to.as_str(), km))
            })
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn num_locations(&self) -> usize {
        self.neighbours.len()
    }

    pub fn len(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DistanceTable {
        DistanceTable::from_entries([("Bogotá", "Cali", 460), ("Cali", "Medellín", 420)]).unwrap()
    }

    #[test]
    fn test_distance_is_symmetric() {
        let table = table();

        assert_eq!(table.distance("Bogotá", "Cali"), Some(Kilometers::new(460)));
        assert_eq!(table.distance("Cali", "Bogotá"), Some(Kilometers::new(460)));
    }

    #[test]
    fn test_missing_hop() {
        let table = table();

        assert_eq!(table.distance("Bogotá", "Medellín"), None);
        assert_eq!(table.distance("Bogotá", "Pasto"), None);
    }

    #[test]
    fn test_self_distance() {
        let table = table();

        assert_eq!(table.distance("Cali", "Cali"), Some(Kilometers::ZERO));
        assert_eq!(table.distance("Pasto", "Pasto"), None);
    }

    #[test]
    fn test_duplicate_entry_is_idempotent() {
        let mut table = table();
        table
            .insert("Cali", "Bogotá", Kilometers::new(460))
            .unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_conflicting_entry() {
        let mut table = table();
        let result = table.insert("Cali", "Bogotá", Kilometers::new(470));

        assert!(matches!(
            result,
            Err(DistanceTableError::ConflictingDistance { first, second, .. })
                if first == Kilometers::new(460) && second == Kilometers::new(470)
        ));
        assert_eq!(table.distance("Bogotá", "Cali"), Some(Kilometers::new(460)));
    }

    #[test]
    fn test_self_entry_registers_location() {
        let mut table = DistanceTable::new();
        table.insert("Leticia", "Leticia", Kilometers::ZERO).unwrap();

        assert!(table.contains_location("Leticia"));
        assert!(table.is_empty());
        assert!(matches!(
            table.insert("Leticia", "Leticia", Kilometers::new(3)),
            Err(DistanceTableError::SelfDistance(..))
        ));
    }

    #[test]
    fn test_empty_location_rejected() {
        let mut table = DistanceTable::new();

        assert!(matches!(
            table.insert("", "Cali", Kilometers::new(1)),
            Err(DistanceTableError::EmptyLocation)
        ));
    }

    #[test]
    fn test_entries_and_locations_are_sorted() {
        let table = table();

        assert_eq!(table.locations(), vec!["Bogotá", "Cali", "Medellín"]);
        assert_eq!(
            table.entries(),
            vec![
                ("Bogotá", "Cali", Kilometers::new(460)),
                ("Cali", "Medellín", Kilometers::new(420)),
            ]
        );
    }
}
