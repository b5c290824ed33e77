// src/core/models/session.rs
use std::cell::RefCell;
use std::rc::Rc;

/// Admin session flag. Never persisted: a page reload always starts
/// logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }
}

/// The session flag is the one piece of state shared across every manager.
pub type SharedSession = Rc<RefCell<Session>>;

pub fn new_shared_session() -> SharedSession {
    Rc::new(RefCell::new(Session::default()))
}
