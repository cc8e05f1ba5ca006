//! Pattern 4: Observer
//!
//! A [`Subject`] keeps `Weak` handles to its observers, so it never keeps
//! one alive on its own. Observers that have been dropped are pruned the
//! next time the subject notifies.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

pub const DEFAULT_FAVORITES: &str = "Dummy Update Notice";

pub trait Observer {
    /// Called with the subject that changed; read whatever state is needed from it.
    fn update(&self, subject: &Subject);
}

pub struct Subject {
    favorites: String,
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl Subject {
    pub fn new() -> Self {
        Subject {
            favorites: DEFAULT_FAVORITES.to_string(),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn with_observer(observer: &Rc<dyn Observer>) -> Self {
        let subject = Subject::new();
        subject.attach(observer);
        subject
    }

    pub fn attach(&self, observer: &Rc<dyn Observer>) {
        self.observers.borrow_mut().push(Rc::downgrade(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn favorites(&self) -> &str {
        &self.favorites
    }

    pub fn update_favorites(&mut self, notice: impl Into<String>) {
        self.favorites = notice.into();
        self.notify();
    }

    pub fn notify(&self) {
        // Upgrade first so observers may attach others while being notified.
        let live: Vec<Rc<dyn Observer>> = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|weak| weak.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        debug!(observers = live.len(), "notifying observers");
        for observer in live {
            observer.update(self);
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that records every notice it receives.
#[derive(Debug, Default)]
pub struct GossipFan {
    name: String,
    heard: RefCell<Vec<String>>,
}

impl GossipFan {
    pub fn new(name: impl Into<String>) -> Self {
        GossipFan {
            name: name.into(),
            heard: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heard(&self) -> Vec<String> {
        self.heard.borrow().clone()
    }
}

impl Observer for GossipFan {
    fn update(&self, subject: &Subject) {
        trace!(fan = %self.name, notice = subject.favorites(), "received update");
        self.heard.borrow_mut().push(subject.favorites().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(name: &str) -> (Rc<GossipFan>, Rc<dyn Observer>) {
        let fan = Rc::new(GossipFan::new(name));
        let handle: Rc<dyn Observer> = fan.clone();
        (fan, handle)
    }

    #[test]
    fn notify_sends_current_favorites() {
        let (fan, handle) = fan("alice");
        let subject = Subject::with_observer(&handle);

        subject.notify();
        subject.notify();

        assert_eq!(fan.heard(), vec![DEFAULT_FAVORITES, DEFAULT_FAVORITES]);
    }

    #[test]
    fn update_favorites_notifies_in_order() {
        let (fan, handle) = fan("bob");
        let mut subject = Subject::new();
        subject.attach(&handle);

        subject.update_favorites("first");
        subject.update_favorites("second");

        assert_eq!(fan.heard(), vec!["first", "second"]);
        assert_eq!(subject.favorites(), "second");
    }

    #[test]
    fn every_observer_is_told() {
        let (a, a_handle) = fan("a");
        let (b, b_handle) = fan("b");
        let mut subject = Subject::new();
        subject.attach(&a_handle);
        subject.attach(&b_handle);

        subject.update_favorites("news");

        assert_eq!(a.heard(), vec!["news"]);
        assert_eq!(b.heard(), vec!["news"]);
        assert_eq!(subject.observer_count(), 2);
    }

    #[test]
    fn dropped_observers_are_pruned() {
        let (keep, keep_handle) = fan("keep");
        let mut subject = Subject::new();
        subject.attach(&keep_handle);
        {
            let (_gone, gone_handle) = fan("gone");
            subject.attach(&gone_handle);
            assert_eq!(subject.observer_count(), 2);
        }

        assert_eq!(subject.observer_count(), 1);
        subject.update_favorites("still here");
        assert_eq!(keep.heard(), vec!["still here"]);
        assert_eq!(subject.observers.borrow().len(), 1);
    }

    #[test]
    fn subject_without_observers_is_quiet() {
        let mut subject = Subject::default();
        subject.update_favorites("nobody listens");
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn observer_can_attach_during_notify() {
        struct Recruiter {
            recruit: Rc<dyn Observer>,
        }

        impl Observer for Recruiter {
            fn update(&self, subject: &Subject) {
                subject.attach(&self.recruit);
            }
        }

        let (recruit, recruit_handle) = fan("recruit");
        let recruiter: Rc<dyn Observer> = Rc::new(Recruiter {
            recruit: recruit_handle,
        });
        let subject = Subject::with_observer(&recruiter);

        subject.notify();
        assert!(recruit.heard().is_empty());

        subject.notify();
        assert_eq!(recruit.heard().len(), 1);
        assert_eq!(recruit.name(), "recruit");
    }
}
