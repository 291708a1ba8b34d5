//! Booked-hall id tracking

/// Small set of hall ids the customer currently has reservations for.
#[derive(Debug, Default)]
pub struct BookedIds {
    ids: Vec<i64>,
}

impl BookedIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: i64) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.ids.retain(|&i| i != id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_contains() {
        let mut booked = BookedIds::new();
        booked.add(5);
        booked.add(5);
        booked.add(9);
        assert!(booked.contains(5));
        assert_eq!(booked.ids(), &[5, 9]);

        booked.remove(5);
        assert!(!booked.contains(5));
        assert!(booked.contains(9));
    }
}
