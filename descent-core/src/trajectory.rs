use glam::DVec2;

/// Ordered series of points visited by a descent.
///
/// Points are only ever appended while a run is in progress; [`Trajectory::clear`]
/// exists for restarting a run from scratch.
#[derive(Debug, Default, Clone)]
pub struct Trajectory {
    points: Vec<DVec2>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points as `[x, y]` pairs, the layout plotting backends take.
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_order() {
        let mut t = Trajectory::new();
        assert!(t.is_empty());
        assert_eq!(t.last(), None);

        t.push(DVec2::new(-3.88, 30.0));
        t.push(DVec2::new(-3.76, 28.0));

        assert_eq!(t.len(), 2);
        assert_eq!(t.points()[0], DVec2::new(-3.88, 30.0));
        assert_eq!(t.last(), Some(DVec2::new(-3.76, 28.0)));
        assert_eq!(t.to_pairs(), vec![[-3.88, 30.0], [-3.76, 28.0]]);
    }

    #[test]
    fn clear_empties_the_series() {
        let mut t = Trajectory::new();
        t.push(DVec2::ONE);
        t.clear();
        assert!(t.is_empty());
    }
}
