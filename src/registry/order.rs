//! registry/order — позиционные операции (1-based).
//!
//! move_to: целевая позиция ограничивается [1, size] и считается по списку
//! после извлечения элемента, поэтому элемент оказывается ровно на ней.

use crate::error::RegistryError;
use crate::normalize::normalize_key;

use super::core::Registry;

/// Result of a move, both positions 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    pub from: usize,
    pub to: usize,
}

impl Moved {
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

#[inline]
fn clamp_position(pos: i64, size: usize) -> usize {
    pos.clamp(1, size.max(1) as i64) as usize
}

impl Registry {
    /// Key at a 1-based position; None when out of `[1, size]`.
    pub fn name_at_position(&self, position: i64) -> Option<&str> {
        if position < 1 {
            return None;
        }
        self.entries
            .get_index(position as usize - 1)
            .map(|(k, _)| k.as_str())
    }

    /// Move a snippet so it ends up at `target` (clamped).
    pub fn move_to(&mut self, raw: &str, target: i64) -> Result<Moved, RegistryError> {
        let key = normalize_key(raw);
        let Some(from) = self.entries.get_index_of(&key) else {
            return Err(RegistryError::NotFound(key));
        };
        let to = clamp_position(target, self.entries.len()) - 1;
        if from != to {
            self.entries.move_index(from, to);
        }
        Ok(Moved {
            from: from + 1,
            to: to + 1,
        })
    }

    /// Resolve `from` to a key, clamp `to`, then `move_to`.
    pub fn move_by_index(&mut self, from: i64, to: i64) -> Result<Moved, RegistryError> {
        let Some(key) = self.name_at_position(from).map(str::to_string) else {
            return Err(RegistryError::InvalidIndex(from));
        };
        let to = clamp_position(to, self.entries.len()) as i64;
        self.move_to(&key, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(n: usize) -> Registry {
        let mut r = Registry::new();
        for i in 0..n {
            r.add(&format!("k{i}"), "").unwrap();
        }
        r
    }

    fn keys(r: &Registry) -> Vec<String> {
        r.keys().map(str::to_string).collect()
    }

    #[test]
    fn name_at_position_bounds() {
        let r = reg(3);
        assert_eq!(r.name_at_position(0), None);
        assert_eq!(r.name_at_position(-4), None);
        assert_eq!(r.name_at_position(1), Some("k0"));
        assert_eq!(r.name_at_position(3), Some("k2"));
        assert_eq!(r.name_at_position(4), None);
    }

    #[test]
    fn first_to_last() {
        let mut r = reg(5);
        let m = r.move_to("k0", 5).unwrap();
        assert_eq!(m, Moved { from: 1, to: 5 });
        assert_eq!(keys(&r), vec!["k1", "k2", "k3", "k4", "k0"]);
    }

    #[test]
    fn target_is_clamped() {
        let mut r = reg(4);
        assert_eq!(r.move_to("k1", 99).unwrap().to, 4);
        assert_eq!(keys(&r), vec!["k0", "k2", "k3", "k1"]);
        assert_eq!(r.move_to("k3", -7).unwrap().to, 1);
        assert_eq!(keys(&r), vec!["k3", "k0", "k2", "k1"]);
    }

    #[test]
    fn middle_moves_both_directions() {
        let mut r = reg(5);
        r.move_to("k1", 4).unwrap();
        assert_eq!(keys(&r), vec!["k0", "k2", "k3", "k1", "k4"]);
        r.move_to("k4", 2).unwrap();
        assert_eq!(keys(&r), vec!["k0", "k4", "k2", "k3", "k1"]);
    }

    #[test]
    fn self_move_is_noop() {
        let mut r = reg(3);
        let m = r.move_to("k1", 2).unwrap();
        assert!(m.is_noop());
        assert_eq!(keys(&r), vec!["k0", "k1", "k2"]);
    }

    #[test]
    fn move_by_index_from_list_numbers() {
        let mut r = Registry::new();
        for n in ["a", "b", "c"] {
            r.add(n, "").unwrap();
        }
        r.move_by_index(3, 1).unwrap();
        assert_eq!(keys(&r), vec!["c", "a", "b"]);
        r.move_by_index(1, 0).unwrap();
        assert_eq!(keys(&r), vec!["c", "a", "b"]);
        assert_eq!(r.move_by_index(4, 1), Err(RegistryError::InvalidIndex(4)));
        assert_eq!(r.move_by_index(0, 1), Err(RegistryError::InvalidIndex(0)));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut r = reg(2);
        assert_eq!(r.move_to("nope", 1), Err(RegistryError::NotFound("nope".into())));
    }
}
