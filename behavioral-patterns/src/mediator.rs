//! Mediator.
//!
//! A chat room routes every message to all registered users except the
//! sender. Users hold a weak back-reference to the room so the cycle
//! does not leak.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct ChatRoom {
    users: RefCell<Vec<Rc<User>>>,
}

impl ChatRoom {
    pub fn new() -> Rc<Self> {
        Rc::new(ChatRoom {
            users: RefCell::new(Vec::new()),
        })
    }

    pub fn register(room: &Rc<Self>, name: &str) -> Rc<User> {
        let user = Rc::new(User {
            name: name.to_string(),
            room: Rc::downgrade(room),
            inbox: RefCell::new(Vec::new()),
        });
        room.users.borrow_mut().push(Rc::clone(&user));
        user
    }

    /// Every non-sender receives the message exactly once, in
    /// registration order.
    fn broadcast(&self, sender: &User, message: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for user in self.users.borrow().iter() {
            // identity, not name, so two users sharing a name stay distinct
            if std::ptr::eq(Rc::as_ptr(user), sender) {
                continue;
            }
            lines.push(user.receive(&sender.name, message));
        }
        lines
    }
}

pub struct User {
    name: String,
    room: Weak<ChatRoom>,
    inbox: RefCell<Vec<String>>,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns delivery lines, one per recipient. An empty result means
    /// the room is gone or the sender is alone.
    pub fn send(&self, message: &str) -> Vec<String> {
        match self.room.upgrade() {
            Some(room) => room.broadcast(self, message),
            None => Vec::new(),
        }
    }

    fn receive(&self, from: &str, message: &str) -> String {
        let line = format!("{} receives from {from}: {message}", self.name);
        self.inbox.borrow_mut().push(format!("{from}: {message}"));
        line
    }

    pub fn inbox(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_reaches_everyone_but_the_sender() {
        let room = ChatRoom::new();
        let alice = ChatRoom::register(&room, "Alice");
        let _bob = ChatRoom::register(&room, "Bob");
        let _carol = ChatRoom::register(&room, "Carol");

        let lines = alice.send("hello");
        assert_eq!(
            lines,
            vec![
                "Bob receives from Alice: hello",
                "Carol receives from Alice: hello",
            ]
        );
        assert!(alice.inbox().is_empty());
    }

    #[test]
    fn each_recipient_gets_the_message_exactly_once() {
        let room = ChatRoom::new();
        let alice = ChatRoom::register(&room, "Alice");
        let bob = ChatRoom::register(&room, "Bob");

        alice.send("one");
        alice.send("two");
        assert_eq!(bob.inbox(), vec!["Alice: one", "Alice: two"]);
    }

    #[test]
    fn sending_after_room_dropped_is_a_quiet_no_op() {
        let room = ChatRoom::new();
        let alice = ChatRoom::register(&room, "Alice");
        // detach alice from the room's roster before dropping the room,
        // otherwise the room keeps her alive but she keeps nothing
        room.users.borrow_mut().clear();
        drop(room);
        assert!(alice.send("anyone there?").is_empty());
    }
}
