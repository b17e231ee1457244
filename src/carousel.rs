use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },
}

/// Cyclic cursor over a fixed, ordered set of items.
///
/// The active index always stays in `0..len`; both navigation directions
/// wrap around via modular arithmetic instead of clamping at the ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    active: usize,
}

impl<T: Clone> Carousel<T> {
    /// Fails with [`CarouselError::Empty`] rather than deferring the
    /// zero-length problem to the first navigation call.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { items, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Single borrow of the active record; callers read every displayed
    /// field through this one snapshot.
    pub fn current(&self) -> &T {
        &self.items[self.active]
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        // The + len offset keeps the dividend non-negative.
        self.active = (self.active + self.items.len() - 1) % self.items.len();
    }

    /// Direct jump to `index`. Out-of-range input leaves the state untouched.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        name: &'static str,
        role: &'static str,
        content: &'static str,
        avatar_url: &'static str,
    }

    fn card(name: &'static str) -> Card {
        Card {
            name,
            role: "role",
            content: "content",
            avatar_url: "avatar",
        }
    }

    fn three() -> Carousel<&'static str> {
        Carousel::new(vec!["A", "B", "C"]).unwrap()
    }

    #[test]
    fn starts_at_zero() {
        let c = three();
        assert_eq!(c.active(), 0);
        assert_eq!(*c.current(), "A");
    }

    #[test]
    fn empty_items_rejected_at_construction() {
        let c = Carousel::<&str>::new(vec![]);
        assert_eq!(c.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn three_item_cycle() {
        let mut c = three();
        c.next();
        assert_eq!((c.active(), *c.current()), (1, "B"));
        c.next();
        assert_eq!((c.active(), *c.current()), (2, "C"));
        c.next();
        assert_eq!((c.active(), *c.current()), (0, "A"));
        c.previous();
        assert_eq!((c.active(), *c.current()), (2, "C"));
    }

    #[test]
    fn wraps_forward_from_last() {
        let mut c = three();
        c.select(2).unwrap();
        c.next();
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn wraps_backward_from_first() {
        let mut c = three();
        c.previous();
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn single_item_always_stays_put() {
        let mut c = Carousel::new(vec!["only"]).unwrap();
        c.next();
        assert_eq!(c.active(), 0);
        c.previous();
        assert_eq!(c.active(), 0);
        c.select(0).unwrap();
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn net_displacement_mod_len() {
        // After any mix of next/previous calls the index equals the net
        // displacement reduced mod len.
        let mut c = Carousel::new((0..5).collect()).unwrap();
        let moves = [1, 1, -1, 1, 1, 1, -1, -1, 1, 1, 1, 1, -1];
        let mut net: i32 = 0;
        for m in moves {
            if m > 0 {
                c.next();
            } else {
                c.previous();
            }
            net += m;
        }
        let expected = net.rem_euclid(5) as usize;
        assert_eq!(c.active(), expected);
    }

    #[test]
    fn select_jumps_directly() {
        let mut c = three();
        c.next();
        c.select(2).unwrap();
        assert_eq!(c.active(), 2);
        c.select(0).unwrap();
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn select_out_of_range_fails_and_preserves_state() {
        let mut c = three();
        c.next();
        let err = c.select(5).unwrap_err();
        assert_eq!(err, CarouselError::InvalidIndex { index: 5, len: 3 });
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn select_rejects_len_itself() {
        let mut c = three();
        assert!(c.select(3).is_err());
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn current_is_idempotent() {
        let mut c = three();
        c.next();
        let first = *c.current();
        let second = *c.current();
        assert_eq!(first, second);
    }

    #[test]
    fn current_yields_all_fields_from_one_record() {
        let mut c =
            Carousel::new(vec![card("Sarah"), card("Marcus"), card("Elena")]).unwrap();
        c.next();
        let snapshot = c.current().clone();
        assert_eq!(snapshot, card("Marcus"));
        c.previous();
        // The earlier snapshot is unaffected by later transitions.
        assert_eq!(snapshot.name, "Marcus");
        assert_eq!(c.current().name, "Sarah");
    }
}
