//! Null Object.
//!
//! Lookups never return an option; an unknown name yields a guest
//! customer whose operations are safe no-ops, so call sites need no
//! null checks.

pub trait Customer {
    fn name(&self) -> &str;
    fn is_registered(&self) -> bool;
    fn greet(&self) -> String;
    fn purchase(&self, item: &str) -> String;
    fn discount_percent(&self) -> u32;
}

pub struct RealCustomer {
    name: String,
}

impl RealCustomer {
    pub fn new(name: &str) -> Self {
        RealCustomer {
            name: name.to_string(),
        }
    }
}

impl Customer for RealCustomer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_registered(&self) -> bool {
        true
    }

    fn greet(&self) -> String {
        format!("Welcome back, {}!", self.name)
    }

    fn purchase(&self, item: &str) -> String {
        format!("{} purchased {item}", self.name)
    }

    fn discount_percent(&self) -> u32 {
        10
    }
}

/// Stands in for "not found". Every operation is well-defined.
pub struct NullCustomer;

impl Customer for NullCustomer {
    fn name(&self) -> &str {
        "Guest"
    }

    fn is_registered(&self) -> bool {
        false
    }

    fn greet(&self) -> String {
        "Welcome, guest!".to_string()
    }

    fn purchase(&self, item: &str) -> String {
        format!("Please register to purchase {item}")
    }

    fn discount_percent(&self) -> u32 {
        0
    }
}

pub struct CustomerDirectory {
    names: Vec<String>,
}

impl CustomerDirectory {
    pub fn new(names: &[&str]) -> Self {
        CustomerDirectory {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Total lookup. Unknown names come back as a guest.
    pub fn find(&self, name: &str) -> Box<dyn Customer> {
        if self.names.iter().any(|n| n == name) {
            Box::new(RealCustomer::new(name))
        } else {
            Box::new(NullCustomer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> CustomerDirectory {
        CustomerDirectory::new(&["Rob", "Joe", "Julie"])
    }

    #[test]
    fn known_names_resolve_to_real_customers() {
        let customer = directory().find("Rob");
        assert!(customer.is_registered());
        assert_eq!(customer.greet(), "Welcome back, Rob!");
        assert_eq!(customer.purchase("book"), "Rob purchased book");
        assert_eq!(customer.discount_percent(), 10);
    }

    #[test]
    fn unknown_names_resolve_to_a_guest() {
        let customer = directory().find("Laura");
        assert!(!customer.is_registered());
        assert_eq!(customer.name(), "Guest");
        assert_eq!(customer.greet(), "Welcome, guest!");
        assert_eq!(customer.purchase("book"), "Please register to purchase book");
        assert_eq!(customer.discount_percent(), 0);
    }

    #[test]
    fn call_sites_need_no_null_checks() {
        let dir = directory();
        // same code path for hits and misses
        let total: u32 = ["Joe", "Nobody", "Julie"]
            .iter()
            .map(|name| dir.find(name).discount_percent())
            .sum();
        assert_eq!(total, 20);
    }
}
