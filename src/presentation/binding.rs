//! Host-owned visibility flag and descriptor provider

use std::cell::Cell;
use std::rc::Rc;

use crate::alert::AlertDescriptor;

/// Produces the descriptor to show; read once on activation and again on
/// every sync while visible.
pub type AlertProvider = Box<dyn Fn() -> AlertDescriptor>;

/// Shared "is presenting" flag
///
/// Both the host and the controller write to it. Clones refer to the same
/// flag. Every false to true transition bumps a show counter, so a controller
/// that only syncs occasionally can tell a hide-and-show pulse from a flag
/// that stayed set.
#[derive(Debug, Clone, Default)]
pub struct Presenting {
    flag: Rc<Cell<bool>>,
    shows: Rc<Cell<u64>>,
}

impl Presenting {
    pub fn new(initial: bool) -> Self {
        Self {
            flag: Rc::new(Cell::new(initial)),
            shows: Rc::new(Cell::new(u64::from(initial))),
        }
    }

    pub fn get(&self) -> bool {
        self.flag.get()
    }

    pub fn set(&self, value: bool) {
        if value && !self.flag.get() {
            self.shows.set(self.shows.get().wrapping_add(1));
        }
        self.flag.set(value);
    }

    pub fn toggle(&self) {
        self.set(!self.get());
    }

    /// Number of times the flag went from false to true
    pub fn generation(&self) -> u64 {
        self.shows.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let host = Presenting::new(false);
        let controller_side = host.clone();

        host.set(true);
        assert!(controller_side.get());

        controller_side.toggle();
        assert!(!host.get());
    }

    #[test]
    fn test_generation_counts_shows_only() {
        let flag = Presenting::new(false);
        assert_eq!(flag.generation(), 0);

        flag.set(true);
        flag.set(true);
        assert_eq!(flag.generation(), 1);

        flag.set(false);
        assert_eq!(flag.generation(), 1);

        flag.toggle();
        assert_eq!(flag.generation(), 2);
        assert_eq!(Presenting::new(true).generation(), 1);
    }

    #[test]
    fn test_default_is_hidden() {
        assert!(!Presenting::default().get());
    }
}
