//! Model-View-Controller.
//!
//! The store owns the records, views only render, and the controller is
//! the single path through which callers mutate or read. Validation
//! failures are surfaced through the active view rather than panicking.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("user name must not be empty")]
    EmptyName,
    #[error("user email must not be empty")]
    EmptyEmail,
    #[error("user id {0} already exists")]
    DuplicateId(u32),
    #[error("no user with id {0}")]
    UnknownId(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// The model. Ids are unique; insertion order is preserved.
#[derive(Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        UserStore::default()
    }

    pub fn add(&mut self, user: User) -> Result<(), UserError> {
        if user.name.trim().is_empty() {
            return Err(UserError::EmptyName);
        }
        if user.email.trim().is_empty() {
            return Err(UserError::EmptyEmail);
        }
        if self.users.iter().any(|u| u.id == user.id) {
            return Err(UserError::DuplicateId(user.id));
        }
        self.users.push(user);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Result<&User, UserError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(UserError::UnknownId(id))
    }

    /// Deletes by id, handing the removed record back to the caller.
    pub fn remove(&mut self, id: u32) -> Result<User, UserError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::UnknownId(id))?;
        Ok(self.users.remove(index))
    }

    pub fn update_email(&mut self, id: u32, email: &str) -> Result<(), UserError> {
        if email.trim().is_empty() {
            return Err(UserError::EmptyEmail);
        }
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserError::UnknownId(id))?;
        user.email = email.to_string();
        Ok(())
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }
}

pub trait UserView {
    fn render(&self, user: &User) -> Vec<String>;

    fn render_all(&self, users: &[User]) -> Vec<String> {
        users.iter().flat_map(|user| self.render(user)).collect()
    }

    fn render_error(&self, error: &UserError) -> Vec<String> {
        vec![format!("Error: {error}")]
    }
}

pub struct PlainView;

impl UserView for PlainView {
    fn render(&self, user: &User) -> Vec<String> {
        vec![format!("{} <{}> (id {})", user.name, user.email, user.id)]
    }
}

pub struct FramedView;

impl UserView for FramedView {
    fn render(&self, user: &User) -> Vec<String> {
        vec![
            "+----------------------+".to_string(),
            format!("| Id:    {:<13} |", user.id),
            format!("| Name:  {:<13} |", user.name),
            format!("| Email: {:<13} |", user.email),
            "+----------------------+".to_string(),
        ]
    }
}

pub struct JsonView;

impl UserView for JsonView {
    fn render(&self, user: &User) -> Vec<String> {
        // serialization of a plain struct of strings and ints cannot fail
        match serde_json::to_string(user) {
            Ok(json) => vec![json],
            Err(e) => vec![format!("Error: {e}")],
        }
    }

    // one JSON array instead of a record per line
    fn render_all(&self, users: &[User]) -> Vec<String> {
        match serde_json::to_string(users) {
            Ok(json) => vec![json],
            Err(e) => vec![format!("Error: {e}")],
        }
    }
}

/// The controller owns the model and the active view.
pub struct UserController {
    store: UserStore,
    view: Box<dyn UserView>,
}

impl UserController {
    pub fn new(view: Box<dyn UserView>) -> Self {
        UserController {
            store: UserStore::new(),
            view,
        }
    }

    pub fn set_view(&mut self, view: Box<dyn UserView>) {
        self.view = view;
    }

    pub fn add_user(&mut self, id: u32, name: &str, email: &str) -> Vec<String> {
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        };
        match self.store.add(user) {
            Ok(()) => match self.store.get(id) {
                Ok(user) => self.view.render(user),
                Err(e) => self.view.render_error(&e),
            },
            Err(e) => self.view.render_error(&e),
        }
    }

    pub fn show_user(&self, id: u32) -> Vec<String> {
        match self.store.get(id) {
            Ok(user) => self.view.render(user),
            Err(e) => self.view.render_error(&e),
        }
    }

    pub fn remove_user(&mut self, id: u32) -> Vec<String> {
        match self.store.remove(id) {
            Ok(user) => {
                let mut lines = vec![format!("Removed user {id}")];
                lines.extend(self.view.render(&user));
                lines
            }
            Err(e) => self.view.render_error(&e),
        }
    }

    pub fn show_all(&self) -> Vec<String> {
        self.view.render_all(self.store.all())
    }

    pub fn change_email(&mut self, id: u32, email: &str) -> Vec<String> {
        match self.store.update_email(id, email) {
            Ok(()) => self.show_user(id),
            Err(e) => self.view.render_error(&e),
        }
    }

    pub fn user_count(&self) -> usize {
        self.store.all().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_view_renders_one_line() {
        let mut controller = UserController::new(Box::new(PlainView));
        let lines = controller.add_user(1, "Ada", "ada@example.com");
        assert_eq!(lines, vec!["Ada <ada@example.com> (id 1)"]);
    }

    #[test]
    fn json_view_serializes_the_record() {
        let mut controller = UserController::new(Box::new(JsonView));
        let lines = controller.add_user(7, "Grace", "grace@example.com");
        assert_eq!(
            lines,
            vec![r#"{"id":7,"name":"Grace","email":"grace@example.com"}"#]
        );
    }

    #[test]
    fn duplicate_id_is_rejected_through_the_view() {
        let mut controller = UserController::new(Box::new(PlainView));
        controller.add_user(1, "Ada", "ada@example.com");
        let lines = controller.add_user(1, "Eve", "eve@example.com");
        assert_eq!(lines, vec!["Error: user id 1 already exists"]);
        assert_eq!(controller.user_count(), 1);
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut controller = UserController::new(Box::new(PlainView));
        assert_eq!(
            controller.add_user(1, "  ", "ada@example.com"),
            vec!["Error: user name must not be empty"]
        );
        assert_eq!(
            controller.add_user(1, "Ada", ""),
            vec!["Error: user email must not be empty"]
        );
        assert_eq!(controller.user_count(), 0);
    }

    #[test]
    fn unknown_id_is_surfaced_not_panicked() {
        let controller = UserController::new(Box::new(PlainView));
        assert_eq!(controller.show_user(42), vec!["Error: no user with id 42"]);
    }

    #[test]
    fn remove_deletes_by_id_and_returns_the_record() {
        let mut controller = UserController::new(Box::new(PlainView));
        controller.add_user(1, "Ada", "ada@example.com");
        controller.add_user(2, "Grace", "grace@example.com");

        let lines = controller.remove_user(1);
        assert_eq!(
            lines,
            vec!["Removed user 1", "Ada <ada@example.com> (id 1)"]
        );
        assert_eq!(controller.user_count(), 1);
        assert_eq!(controller.show_user(1), vec!["Error: no user with id 1"]);
    }

    #[test]
    fn removing_an_unknown_id_is_surfaced_through_the_view() {
        let mut controller = UserController::new(Box::new(PlainView));
        assert_eq!(controller.remove_user(42), vec!["Error: no user with id 42"]);
    }

    #[test]
    fn show_all_renders_every_record() {
        let mut controller = UserController::new(Box::new(PlainView));
        controller.add_user(1, "Ada", "ada@example.com");
        controller.add_user(2, "Grace", "grace@example.com");
        assert_eq!(
            controller.show_all(),
            vec![
                "Ada <ada@example.com> (id 1)",
                "Grace <grace@example.com> (id 2)",
            ]
        );

        controller.set_view(Box::new(JsonView));
        assert_eq!(
            controller.show_all(),
            vec![concat!(
                r#"[{"id":1,"name":"Ada","email":"ada@example.com"},"#,
                r#"{"id":2,"name":"Grace","email":"grace@example.com"}]"#
            )]
        );
    }

    #[test]
    fn view_can_be_swapped_at_runtime() {
        let mut controller = UserController::new(Box::new(PlainView));
        controller.add_user(1, "Ada", "ada@example.com");
        controller.set_view(Box::new(FramedView));
        let lines = controller.show_user(1);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "| Name:  Ada           |");
    }

    #[test]
    fn email_update_goes_through_validation() {
        let mut controller = UserController::new(Box::new(PlainView));
        controller.add_user(1, "Ada", "ada@example.com");
        assert_eq!(
            controller.change_email(1, "ada@lovelace.io"),
            vec!["Ada <ada@lovelace.io> (id 1)"]
        );
        assert_eq!(
            controller.change_email(1, ""),
            vec!["Error: user email must not be empty"]
        );
    }
}
