//! Abstract Factory.
//!
//! One factory per widget family; every widget produced by a factory
//! reports the same family identifier.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FamilyError {
    #[error("unknown widget family '{0}'")]
    UnknownFamily(String),
}

pub trait Button {
    fn paint(&self) -> String;
    fn family(&self) -> &'static str;
}

pub trait Checkbox {
    fn paint(&self) -> String;
    fn family(&self) -> &'static str;
}

pub trait WidgetFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
    fn family(&self) -> &'static str;
}

macro_rules! widget_family {
    ($factory:ident, $button:ident, $checkbox:ident, $name:literal) => {
        pub struct $button;

        impl Button for $button {
            fn paint(&self) -> String {
                format!("Rendering {} Button", $name)
            }
            fn family(&self) -> &'static str {
                $name
            }
        }

        pub struct $checkbox;

        impl Checkbox for $checkbox {
            fn paint(&self) -> String {
                format!("Rendering {} Checkbox", $name)
            }
            fn family(&self) -> &'static str {
                $name
            }
        }

        pub struct $factory;

        impl WidgetFactory for $factory {
            fn create_button(&self) -> Box<dyn Button> {
                Box::new($button)
            }
            fn create_checkbox(&self) -> Box<dyn Checkbox> {
                Box::new($checkbox)
            }
            fn family(&self) -> &'static str {
                $name
            }
        }
    };
}

widget_family!(WindowsFactory, WindowsButton, WindowsCheckbox, "Windows");
widget_family!(MacFactory, MacButton, MacCheckbox, "Mac");
widget_family!(LinuxFactory, LinuxButton, LinuxCheckbox, "Linux");

/// Family selector: picks the factory for an OS name.
pub fn factory_for(os: &str) -> Result<Box<dyn WidgetFactory>, FamilyError> {
    match os {
        "windows" => Ok(Box::new(WindowsFactory)),
        "mac" => Ok(Box::new(MacFactory)),
        "linux" => Ok(Box::new(LinuxFactory)),
        other => Err(FamilyError::UnknownFamily(other.to_string())),
    }
}

/// An application wired against one family only.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn WidgetFactory) -> Self {
        Application {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn render_ui(&self) -> Vec<String> {
        vec![self.button.paint(), self.checkbox.paint()]
    }

    /// True when every widget belongs to the same family.
    pub fn is_consistent(&self) -> bool {
        self.button.family() == self.checkbox.family()
    }
}
