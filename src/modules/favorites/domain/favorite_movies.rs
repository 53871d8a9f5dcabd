use serde::{Deserialize, Serialize};

/// Ordered collection of favorited movie titles.
///
/// Insertion order is kept and duplicates are allowed; removal is by value and
/// drops every matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteMovieSet {
    titles: Vec<String>,
}

impl FavoriteMovieSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn add(&mut self, title: impl Into<String>) {
        self.titles.push(title.into());
    }

    /// Returns how many entries were dropped.
    pub fn remove(&mut self, title: &str) -> usize {
        let before = self.titles.len();
        self.titles.retain(|t| t != title);
        before - self.titles.len()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Op {
        Add(&'static str),
        Remove(&'static str),
    }

    fn simulate(ops: &[Op]) -> Vec<String> {
        let mut expected: Vec<String> = Vec::new();
        for op in ops {
            match op {
                Op::Add(t) => expected.push(t.to_string()),
                Op::Remove(t) => expected = expected.into_iter().filter(|x| x != t).collect(),
            }
        }
        expected
    }

    fn apply(ops: &[Op]) -> FavoriteMovieSet {
        let mut set = FavoriteMovieSet::new();
        for op in ops {
            match op {
                Op::Add(t) => set.add(*t),
                Op::Remove(t) => {
                    set.remove(t);
                }
            }
        }
        set
    }

    #[test]
    fn matches_append_filter_simulation() {
        let scripts: Vec<Vec<Op>> = vec![
            vec![Op::Add("A"), Op::Add("B"), Op::Remove("A")],
            vec![Op::Add("A"), Op::Add("A"), Op::Remove("A")],
            vec![Op::Remove("Z")],
            vec![
                Op::Add("Heat"),
                Op::Add("Alien"),
                Op::Add("Heat"),
                Op::Remove("Alien"),
                Op::Add("Alien"),
                Op::Remove("Nope"),
                Op::Add("Up"),
            ],
        ];

        for ops in &scripts {
            assert_eq!(apply(ops).titles(), simulate(ops).as_slice());
        }
    }

    #[test]
    fn remove_drops_every_match() {
        let mut set = FavoriteMovieSet::new();
        set.add("A");
        set.add("A");
        assert_eq!(set.remove("A"), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set = FavoriteMovieSet::new();
        set.add("A");
        assert_eq!(set.remove("Z"), 0);
        assert_eq!(set.titles(), ["A".to_string()]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let mut set = FavoriteMovieSet::new();
        set.add("A");
        set.add("B");
        set.add("A");
        assert_eq!(set.titles(), ["A", "B", "A"].map(String::from));
        assert!(set.contains("B"));
        assert_eq!(set.len(), 3);
    }
}
