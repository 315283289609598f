//! Proxy.
//!
//! `ImageProxy` guards a [`RealImage`]: role-based access control, a log
//! line on every attempt, lazy construction of the real subject on the
//! first permitted call, and a cache marker on later calls. A denied call
//! never instantiates the real image.

pub trait ImageView {
    /// Returns the transcript lines of one display request.
    fn display(&mut self) -> Vec<String>;
}

/// The expensive real subject: loads from disk exactly once.
pub struct RealImage {
    filename: String,
    loaded: bool,
}

impl RealImage {
    pub fn new(filename: &str) -> Self {
        RealImage {
            filename: filename.to_string(),
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl ImageView for RealImage {
    fn display(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.loaded {
            lines.push(format!("Loading image from disk: {}", self.filename));
            self.loaded = true;
        }
        lines.push(format!("Displaying image: {}", self.filename));
        lines
    }
}

pub struct ImageProxy {
    filename: String,
    role: String,
    real: Option<RealImage>,
}

impl ImageProxy {
    pub fn new(filename: &str, role: &str) -> Self {
        ImageProxy {
            filename: filename.to_string(),
            role: role.to_string(),
            real: None,
        }
    }

    fn access_permitted(&self) -> bool {
        matches!(self.role.as_str(), "admin" | "user")
    }

    /// Whether the real subject has been constructed yet.
    pub fn is_materialized(&self) -> bool {
        self.real.is_some()
    }
}

impl ImageView for ImageProxy {
    fn display(&mut self) -> Vec<String> {
        if !self.access_permitted() {
            return vec![format!("Access denied: Invalid user role '{}'", self.role)];
        }

        let mut lines = vec![format!(
            "Proxy: Logging access attempt by {} for {}",
            self.role, self.filename
        )];

        let real = match self.real.as_mut() {
            Some(real) => {
                if real.is_loaded() {
                    lines.push("Proxy: Image already cached, serving from cache".to_string());
                }
                real
            }
            None => {
                lines.push("Proxy: Creating real image object".to_string());
                self.real.insert(RealImage::new(&self.filename))
            }
        };

        lines.extend(real.display());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_disk_exactly_once() {
        let mut proxy = ImageProxy::new("vacation.jpg", "admin");
        let first = proxy.display();
        let second = proxy.display();
        let third = proxy.display();

        let all: Vec<String> = first.iter().chain(&second).chain(&third).cloned().collect();
        let loads = all
            .iter()
            .filter(|l| l.starts_with("Loading image from disk"))
            .count();
        assert_eq!(loads, 1);
        assert!(second.contains(&"Proxy: Image already cached, serving from cache".to_string()));
        assert_eq!(
            all.iter().filter(|l| l.starts_with("Displaying image")).count(),
            3
        );
    }

    #[test]
    fn denied_role_never_materializes_the_subject() {
        let mut proxy = ImageProxy::new("secret.jpg", "guest");
        let lines = proxy.display();
        assert_eq!(lines, vec!["Access denied: Invalid user role 'guest'"]);
        assert!(!proxy.is_materialized());
    }

    #[test]
    fn every_permitted_call_is_logged() {
        let mut proxy = ImageProxy::new("document.pdf", "user");
        for _ in 0..3 {
            let lines = proxy.display();
            assert_eq!(lines[0], "Proxy: Logging access attempt by user for document.pdf");
        }
    }
}
