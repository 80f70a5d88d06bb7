use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues strictly increasing tickets; only the latest one is current.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    last_issued: u64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> SearchTicket {
        self.last_issued += 1;
        SearchTicket(self.last_issued)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.last_issued != 0 && ticket.0 == self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_tickets_increase() {
        let mut sequencer = SearchSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(second > first);
        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut sequencer = SearchSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_fresh_sequencer_has_no_current_ticket() {
        let sequencer = SearchSequencer::new();
        assert!(!sequencer.is_current(SearchTicket(0)));
    }
}
