//! Chain of Responsibility.
//!
//! Two variants. Payment accounts forward a request down the chain until
//! one has enough balance; exhaustion yields [`ChainError::NoHandler`].
//! Help handlers use a sentinel "no topic" meaning forward
//! unconditionally.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error("None of the accounts have enough balance.")]
    NoHandler,
}

/// One payment system in the chain. Ownership of the successor lives in
/// the chain itself; the driver builds it back-to-front.
pub struct Account {
    name: String,
    balance: f64,
    successor: Option<Box<Account>>,
}

impl Account {
    pub fn new(name: &str, balance: f64) -> Self {
        Account {
            name: name.to_string(),
            balance,
            successor: None,
        }
    }

    /// Appends `next` as the tail handler after this one.
    pub fn chain(mut self, next: Account) -> Self {
        self.successor = Some(Box::new(match self.successor.take() {
            Some(successor) => successor.chain(next),
            None => next,
        }));
        self
    }

    fn can_pay(&self, amount: f64) -> bool {
        self.balance >= amount
    }

    /// Handlers are tried in chain order; the first able handler wins.
    pub fn pay(&self, amount: f64) -> Result<Vec<String>, ChainError> {
        let mut lines = Vec::new();
        let mut current = self;
        loop {
            if current.can_pay(amount) {
                lines.push(format!("Paid {amount} using {}", current.name));
                return Ok(lines);
            }
            lines.push(format!("Cannot pay using {}. Proceeding...", current.name));
            match current.successor.as_deref() {
                Some(next) => current = next,
                None => return Err(ChainError::NoHandler),
            }
        }
    }
}

pub type Topic = u32;

/// A help-chain node. `topic == None` is the sentinel: forward the
/// request unconditionally.
pub struct HelpHandler {
    name: String,
    topic: Option<Topic>,
    successor: Option<Box<HelpHandler>>,
}

impl HelpHandler {
    pub fn new(name: &str, topic: Option<Topic>) -> Self {
        HelpHandler {
            name: name.to_string(),
            topic,
            successor: None,
        }
    }

    pub fn with_successor(mut self, successor: HelpHandler) -> Self {
        self.successor = Some(Box::new(successor));
        self
    }

    pub fn has_help(&self) -> bool {
        self.topic.is_some()
    }

    /// The first node carrying a topic services the request.
    pub fn handle_help(&self) -> String {
        match self.topic {
            Some(topic) => format!("{} shows help for topic {topic}", self.name),
            None => match self.successor.as_deref() {
                Some(next) => next.handle_help(),
                None => format!("{}: no help available", self.name),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Account {
        Account::new("Bank", 100.0)
            .chain(Account::new("PayPal", 200.0))
            .chain(Account::new("Bitcoin", 300.0))
    }

    #[test]
    fn first_able_handler_wins() {
        let chain = accounts();
        let lines = chain.pay(250.0).unwrap();
        assert_eq!(
            lines,
            vec![
                "Cannot pay using Bank. Proceeding...",
                "Cannot pay using PayPal. Proceeding...",
                "Paid 250 using Bitcoin",
            ]
        );
    }

    #[test]
    fn head_handles_when_able() {
        let chain = accounts();
        let lines = chain.pay(50.0).unwrap();
        assert_eq!(lines, vec!["Paid 50 using Bank"]);
    }

    #[test]
    fn exhausted_chain_reports_no_handler() {
        let chain = accounts();
        assert_eq!(chain.pay(1000.0).err(), Some(ChainError::NoHandler));
    }

    #[test]
    fn sentinel_topic_forwards_unconditionally() {
        let application = HelpHandler::new("Application", Some(3));
        let dialog = HelpHandler::new("PrintDialog", Some(1)).with_successor(application);
        let with_topic = HelpHandler::new("OrientationButton", Some(2))
            .with_successor(HelpHandler::new("PrintDialog", Some(1)));
        let without_topic = HelpHandler::new("OkButton", None).with_successor(dialog);

        assert_eq!(with_topic.handle_help(), "OrientationButton shows help for topic 2");
        assert_eq!(without_topic.handle_help(), "PrintDialog shows help for topic 1");
    }

    #[test]
    fn tail_without_topic_reports_nothing_available() {
        let lone = HelpHandler::new("OkButton", None);
        assert!(!lone.has_help());
        assert_eq!(lone.handle_help(), "OkButton: no help available");
    }
}
