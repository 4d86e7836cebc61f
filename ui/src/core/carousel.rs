//! Index cycling for image carousels.
//!
//! `next`/`previous` are refused while a transition is in flight. Every accepted
//! step hands out a [`TransitionTicket`]; the view redeems it when the image's
//! animation ends, and a fallback timer redeems it as well in case that event
//! never fires. Only the ticket of the current transition releases the guard.

/// Proof of one in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    generation: u64,
    in_flight: Option<TransitionTicket>,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Ticket of the transition currently holding the guard.
    pub fn pending(&self) -> Option<TransitionTicket> {
        self.in_flight
    }

    /// Prev/next buttons and indicator dots only make sense with two or more images.
    pub fn shows_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> Option<TransitionTicket> {
        self.step(|index, len| (index + 1) % len)
    }

    pub fn previous(&mut self) -> Option<TransitionTicket> {
        self.step(|index, len| (index + len - 1) % len)
    }

    fn step(&mut self, advance: impl FnOnce(usize, usize) -> usize) -> Option<TransitionTicket> {
        if self.in_flight.is_some() || self.len == 0 {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let ticket = TransitionTicket(self.generation);
        self.in_flight = Some(ticket);
        self.index = advance(self.index, self.len);
        Some(ticket)
    }

    /// Direct selection from an indicator dot. Not guarded and not wrapped;
    /// an index outside the sequence is refused.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range carousel jump");
            return false;
        }
        self.index = index;
        true
    }

    /// Release the guard if `ticket` belongs to the transition in flight.
    pub fn finish(&mut self, ticket: TransitionTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// The image list changed: keep the position when it still exists.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// `(index, is_current)` for each indicator dot.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance_and_settle(state: &mut CarouselState) {
        let ticket = state.next().expect("not guarded");
        assert!(state.finish(ticket));
    }

    #[test]
    fn next_cycles_modulo_len() {
        for len in 1..=5 {
            let mut state = CarouselState::new(len);
            for k in 1..=(len * 3) {
                advance_and_settle(&mut state);
                assert_eq!(state.index(), k % len, "len {len}, step {k}");
            }
        }
    }

    #[test]
    fn previous_wraps_from_zero() {
        let mut state = CarouselState::new(4);
        let ticket = state.previous().unwrap();
        assert_eq!(state.index(), 3);
        state.finish(ticket);
        state.previous();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn guard_blocks_until_finished() {
        let mut state = CarouselState::new(3);
        let ticket = state.next().unwrap();
        assert!(state.is_transitioning());

        assert_eq!(state.next(), None);
        assert_eq!(state.previous(), None);
        assert_eq!(state.index(), 1);

        assert!(state.finish(ticket));
        assert!(!state.is_transitioning());
        assert!(state.next().is_some());
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn stale_ticket_does_not_release_newer_transition() {
        let mut state = CarouselState::new(3);
        let first = state.next().unwrap();
        assert!(state.finish(first));
        let second = state.next().unwrap();

        // The fallback timer of the first transition fires late.
        assert!(!state.finish(first));
        assert!(state.is_transitioning());
        assert_eq!(state.pending(), Some(second));
    }

    #[test]
    fn jump_rejects_out_of_range() {
        let mut state = CarouselState::new(3);
        assert!(state.jump_to(2));
        assert_eq!(state.index(), 2);
        assert!(!state.jump_to(3));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn jump_is_allowed_mid_transition() {
        let mut state = CarouselState::new(3);
        state.next();
        assert!(state.jump_to(0));
        assert_eq!(state.index(), 0);
        assert!(state.is_transitioning());
    }

    #[test]
    fn single_image_hides_controls() {
        assert!(!CarouselState::new(1).shows_controls());
        assert!(!CarouselState::new(0).shows_controls());
        assert!(CarouselState::new(2).shows_controls());
    }

    #[test]
    fn empty_sequence_never_moves() {
        let mut state = CarouselState::new(0);
        assert_eq!(state.next(), None);
        assert_eq!(state.previous(), None);
        assert!(!state.jump_to(0));
        assert_eq!(state.indicators().count(), 0);
    }

    #[test]
    fn resize_keeps_valid_index() {
        let mut state = CarouselState::new(5);
        state.jump_to(4);
        state.resize(6);
        assert_eq!(state.index(), 4);
        state.resize(2);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn indicators_mark_current() {
        let mut state = CarouselState::new(3);
        state.jump_to(1);
        let marks: Vec<bool> = state.indicators().map(|(_, current)| current).collect();
        assert_eq!(marks, vec![false, true, false]);
    }
}
