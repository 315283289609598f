//! Strategy.
//!
//! Two renditions. Payment strategies are swapped at runtime behind a
//! boxed trait object; list formatting shows the same idea both with a
//! generic (static) processor and with dynamic dispatch.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("no payment strategy selected")]
    NoStrategy,
}

pub trait PaymentStrategy {
    fn pay(&self, amount: f64) -> String;
}

pub struct CreditCard {
    number: String,
    holder: String,
}

impl CreditCard {
    pub fn new(number: &str, holder: &str) -> Self {
        CreditCard {
            number: number.to_string(),
            holder: holder.to_string(),
        }
    }

    // only the last four digits ever appear in output
    fn masked(&self) -> String {
        let digits: String = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let last4 = &digits[digits.len().saturating_sub(4)..];
        format!("****-****-****-{last4}")
    }
}

impl PaymentStrategy for CreditCard {
    fn pay(&self, amount: f64) -> String {
        format!(
            "Paid {amount} using credit card {} held by {}",
            self.masked(),
            self.holder
        )
    }
}

pub struct PayPal {
    account: String,
}

impl PayPal {
    pub fn new(account: &str) -> Self {
        PayPal {
            account: account.to_string(),
        }
    }
}

impl PaymentStrategy for PayPal {
    fn pay(&self, amount: f64) -> String {
        format!("Paid {amount} using PayPal account {}", self.account)
    }
}

pub struct Crypto {
    wallet: String,
}

impl Crypto {
    pub fn new(wallet: &str) -> Self {
        Crypto {
            wallet: wallet.to_string(),
        }
    }
}

impl PaymentStrategy for Crypto {
    fn pay(&self, amount: f64) -> String {
        let short: String = self.wallet.chars().take(8).collect();
        format!("Paid {amount} using crypto wallet {short}...")
    }
}

#[derive(Default)]
pub struct Checkout {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl Checkout {
    pub fn new() -> Self {
        Checkout::default()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn pay(&self, amount: f64) -> Result<String, CheckoutError> {
        let strategy = self.strategy.as_deref().ok_or(CheckoutError::NoStrategy)?;
        Ok(strategy.pay(amount))
    }
}

/// List-formatting strategy: start marker, one line per item, end marker.
pub trait ListStrategy {
    fn start(&self) -> Option<String>;
    fn add_item(&self, item: &str) -> String;
    fn end(&self) -> Option<String>;
}

pub struct MarkdownList;

impl ListStrategy for MarkdownList {
    fn start(&self) -> Option<String> {
        None
    }

    fn add_item(&self, item: &str) -> String {
        format!(" - {item}")
    }

    fn end(&self) -> Option<String> {
        None
    }
}

pub struct HtmlList;

impl ListStrategy for HtmlList {
    fn start(&self) -> Option<String> {
        Some("<ul>".to_string())
    }

    fn add_item(&self, item: &str) -> String {
        format!("\t<li>{item}</li>")
    }

    fn end(&self) -> Option<String> {
        Some("</ul>".to_string())
    }
}

/// Strategy bound at compile time; monomorphized per format.
pub struct TextProcessor<S: ListStrategy> {
    strategy: S,
}

impl<S: ListStrategy> TextProcessor<S> {
    pub fn new(strategy: S) -> Self {
        TextProcessor { strategy }
    }

    pub fn format_list(&self, items: &[&str]) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(start) = self.strategy.start() {
            lines.push(start);
        }
        for item in items {
            lines.push(self.strategy.add_item(item));
        }
        if let Some(end) = self.strategy.end() {
            lines.push(end);
        }
        lines
    }
}

/// Strategy swapped at runtime.
pub struct DynTextProcessor {
    strategy: Box<dyn ListStrategy>,
}

impl DynTextProcessor {
    pub fn new(strategy: Box<dyn ListStrategy>) -> Self {
        DynTextProcessor { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ListStrategy>) {
        self.strategy = strategy;
    }

    pub fn format_list(&self, items: &[&str]) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(start) = self.strategy.start() {
            lines.push(start);
        }
        for item in items {
            lines.push(self.strategy.add_item(item));
        }
        if let Some(end) = self.strategy.end() {
            lines.push(end);
        }
        lines
    }
}
