use std::collections::VecDeque;

use crate::round::{Round, WordError};

/// A run of rounds played against a FIFO queue of words, with a cumulative
/// win/loss score.
///
/// At most one round is live at a time. The driver contract is strictly
/// turn-based: submit guesses until the active round reports a terminal
/// state, display the outcome, then call [`Session::record_outcome`] exactly
/// once to bank the score and advance to the next word.
#[derive(Clone, Debug)]
pub struct Session {
    pending_words: VecDeque<String>,
    active_round: Option<Round>,
    total_wins: usize,
    total_losses: usize,
    incorrect_moves_allowed: usize,
}

impl Session {
    /// Build a session over `words`, played in the given order. An empty list
    /// is a degenerate session that is over before the first guess.
    pub fn new<I, S>(words: I, incorrect_moves_allowed: usize) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut session = Self {
            pending_words: words.into_iter().map(Into::into).collect(),
            active_round: None,
            total_wins: 0,
            total_losses: 0,
            incorrect_moves_allowed,
        };
        session.start_next_round()?;

        Ok(session)
    }

    pub fn active_round(&self) -> Option<&Round> {
        self.active_round.as_ref()
    }

    pub fn total_wins(&self) -> usize {
        self.total_wins
    }

    pub fn total_losses(&self) -> usize {
        self.total_losses
    }

    /// Words still waiting in the queue, not counting the active round.
    pub fn rounds_remaining(&self) -> usize {
        self.pending_words.len()
    }

    pub fn is_over(&self) -> bool {
        self.active_round.is_none()
    }

    /// Forward one guess to the active round. A no-op once the queue is
    /// exhausted.
    pub fn guess(&mut self, letter: char) {
        if let Some(round) = self.active_round.as_mut() {
            round.guess(letter);
        }
    }

    /// Bank the outcome of the active round and advance to the next word.
    ///
    /// # Panics
    ///
    /// Panics when no round is active, which includes calling it twice for
    /// the same round: silently swallowing that would corrupt the score, so
    /// the broken driver fails loudly instead.
    pub fn record_outcome(&mut self, won: bool) -> Result<(), WordError> {
        assert!(
            self.active_round.take().is_some(),
            "record_outcome called with no active round"
        );

        if won {
            self.total_wins += 1;
        } else {
            self.total_losses += 1;
        }

        self.start_next_round()
    }

    fn start_next_round(&mut self) -> Result<(), WordError> {
        if let Some(word) = self.pending_words.pop_front() {
            self.active_round = Some(Round::new(&word, self.incorrect_moves_allowed)?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundState;
    use assert_matches::assert_matches;

    #[test]
    fn test_empty_word_list_is_over_immediately() {
        let session = Session::new(Vec::<String>::new(), 7).unwrap();

        assert!(session.is_over());
        assert!(session.active_round().is_none());
        assert_eq!(session.total_wins(), 0);
        assert_eq!(session.total_losses(), 0);
    }

    #[test]
    fn test_first_round_starts_immediately_in_queue_order() {
        let session = Session::new(["pear", "plum"], 7).unwrap();

        assert_eq!(session.active_round().unwrap().word(), "pear");
        assert_eq!(session.rounds_remaining(), 1);
        assert!(!session.is_over());
    }

    #[test]
    fn test_win_then_loss_walkthrough() {
        let mut session = Session::new(["a", "ab"], 1).unwrap();

        assert_eq!(session.active_round().unwrap().word(), "a");
        session.guess('a');
        assert_matches!(session.active_round().unwrap().state(), RoundState::Won);

        session.record_outcome(true).unwrap();
        assert_eq!(session.total_wins(), 1);
        assert_eq!(session.total_losses(), 0);
        assert_eq!(session.active_round().unwrap().word(), "ab");

        // budget 1: a single wrong guess loses the round
        session.guess('x');
        assert_matches!(session.active_round().unwrap().state(), RoundState::Lost);

        session.record_outcome(false).unwrap();
        assert_eq!(session.total_wins(), 1);
        assert_eq!(session.total_losses(), 1);
        assert!(session.is_over());
    }

    #[test]
    fn test_outcomes_never_exceed_word_count() {
        let mut session = Session::new(["a", "b", "c"], 0).unwrap();
        let mut recorded = 0;

        while let Some(round) = session.active_round() {
            let won = round.is_won();
            session.record_outcome(won).unwrap();
            recorded += 1;
        }

        assert_eq!(recorded, 3);
        assert_eq!(session.total_wins() + session.total_losses(), 3);
    }

    #[test]
    fn test_guess_after_exhaustion_is_a_no_op() {
        let mut session = Session::new(Vec::<String>::new(), 7).unwrap();

        session.guess('a');
        assert!(session.is_over());
    }

    #[test]
    #[should_panic(expected = "no active round")]
    fn test_record_outcome_without_active_round_panics() {
        let mut session = Session::new(Vec::<String>::new(), 7).unwrap();
        let _ = session.record_outcome(true);
    }

    #[test]
    #[should_panic(expected = "no active round")]
    fn test_double_record_outcome_panics() {
        let mut session = Session::new(["a"], 7).unwrap();

        session.guess('a');
        session.record_outcome(true).unwrap();
        // the queue is empty, so the first call already retired the round
        let _ = session.record_outcome(true);
    }

    #[test]
    fn test_empty_word_in_queue_surfaces_on_advance() {
        let mut session = Session::new(["a", ""], 7).unwrap();

        session.guess('a');
        assert!(session.record_outcome(true).is_err());
    }
}
