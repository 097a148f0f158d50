use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::model::value::SettingValue;

use super::sink::LogSink;
use super::{SettingsObserver, panic_message};

/// Ordered list of observers with failure-isolated fan-out.
///
/// Observers are compared by identity (the `Rc` allocation), so the same
/// instance is only ever registered once. Notification order is
/// registration order.
pub struct SettingsObservable {
    observers: Vec<Rc<dyn SettingsObserver>>,
    sink: Rc<dyn LogSink>,
}

impl SettingsObservable {
    pub fn new(sink: Rc<dyn LogSink>) -> Self {
        Self {
            observers: Vec::new(),
            sink,
        }
    }

    /// Appends `observer` unless it is already registered.
    ///
    /// Returns `true` if the observer was added.
    pub fn add_observer(&mut self, observer: Rc<dyn SettingsObserver>) -> bool {
        if self.contains(&observer) {
            return false;
        }

        self.sink.log(&format!("Added observer: {}", observer.name()));
        self.observers.push(observer);
        true
    }

    /// Removes `observer` if registered; does nothing otherwise.
    pub fn remove_observer(&mut self, observer: &Rc<dyn SettingsObserver>) -> bool {
        let Some(index) = self
            .observers
            .iter()
            .position(|registered| same_observer(registered, observer))
        else {
            return false;
        };

        let removed = self.observers.remove(index);
        self.sink.log(&format!("Removed observer: {}", removed.name()));
        true
    }

    pub fn contains(&self, observer: &Rc<dyn SettingsObserver>) -> bool {
        self.observers
            .iter()
            .any(|registered| same_observer(registered, observer))
    }

    /// Delivers one change to every observer in registration order.
    ///
    /// Never fails: observer errors and panics are logged and skipped.
    /// Returns the number of observers notified.
    pub fn notify_observers(
        &self,
        setting: &str,
        new_value: &SettingValue,
        old_value: Option<&SettingValue>,
    ) -> usize {
        self.sink.log(&format!(
            "Notifying {} observers of setting change: {setting} = {new_value}",
            self.observers.len()
        ));

        for observer in &self.observers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                observer.update(setting, new_value, old_value)
            }));

            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    self.sink.error(&format!("Error in observer {}: {err:#}", observer.name()));
                }
                Err(payload) => {
                    self.sink.error(&format!(
                        "Observer {} panicked: {}",
                        observer.name(),
                        panic_message(payload.as_ref())
                    ));
                }
            }
        }

        self.observers.len()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

fn same_observer(a: &Rc<dyn SettingsObserver>, b: &Rc<dyn SettingsObserver>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::bail;

    use super::*;
    use crate::observer::sink::MemorySink;

    type Triple = (String, SettingValue, Option<SettingValue>);

    /// Records every update it receives.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Triple>>,
    }

    impl SettingsObserver for Recorder {
        fn update(
            &self,
            setting: &str,
            new_value: &SettingValue,
            old_value: Option<&SettingValue>,
        ) -> anyhow::Result<()> {
            self.calls.borrow_mut().push((
                setting.to_string(),
                new_value.clone(),
                old_value.cloned(),
            ));
            Ok(())
        }
    }

    struct Failing;

    impl SettingsObserver for Failing {
        fn update(
            &self,
            _: &str,
            _: &SettingValue,
            _: Option<&SettingValue>,
        ) -> anyhow::Result<()> {
            bail!("observer exploded")
        }
    }

    struct Panicking;

    impl SettingsObserver for Panicking {
        fn update(
            &self,
            _: &str,
            _: &SettingValue,
            _: Option<&SettingValue>,
        ) -> anyhow::Result<()> {
            panic!("observer panicked")
        }
    }

    fn registry() -> (Rc<MemorySink>, SettingsObservable) {
        let sink = Rc::new(MemorySink::default());
        let observable = SettingsObservable::new(sink.clone());
        (sink, observable)
    }

    #[test]
    fn every_observer_receives_the_same_triple() {
        let (_, mut observable) = registry();
        let recorders: Vec<Rc<Recorder>> = (0..4).map(|_| Rc::new(Recorder::default())).collect();
        for recorder in &recorders {
            observable.add_observer(recorder.clone());
        }

        let notified = observable.notify_observers(
            "count",
            &SettingValue::Int(6),
            Some(&SettingValue::Int(5)),
        );

        assert_eq!(notified, 4);
        for recorder in &recorders {
            assert_eq!(
                *recorder.calls.borrow(),
                vec![(
                    "count".to_string(),
                    SettingValue::Int(6),
                    Some(SettingValue::Int(5))
                )]
            );
        }
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let (sink, mut observable) = registry();
        let recorder = Rc::new(Recorder::default());

        assert!(observable.add_observer(recorder.clone()));
        assert!(!observable.add_observer(recorder.clone()));
        assert_eq!(observable.len(), 1);
        assert_eq!(sink.logs(), vec!["Added observer: Recorder"]);

        observable.notify_observers("count", &SettingValue::Int(1), None);
        assert_eq!(recorder.calls.borrow().len(), 1);

        let handle: Rc<dyn SettingsObserver> = recorder.clone();
        assert!(observable.remove_observer(&handle));
        assert!(observable.is_empty());
        assert!(sink.has_log("Removed observer: Recorder"));

        observable.notify_observers("count", &SettingValue::Int(2), None);
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    fn removing_an_unknown_observer_is_a_no_op() {
        let (sink, mut observable) = registry();
        let registered = Rc::new(Recorder::default());
        observable.add_observer(registered);
        sink.clear();

        let stranger: Rc<dyn SettingsObserver> = Rc::new(Recorder::default());
        assert!(!observable.remove_observer(&stranger));
        assert_eq!(observable.len(), 1);
        assert!(sink.logs().is_empty());
    }

    #[test]
    fn failing_observer_does_not_block_later_ones() {
        let (sink, mut observable) = registry();
        let before = Rc::new(Recorder::default());
        let after = Rc::new(Recorder::default());
        observable.add_observer(before.clone());
        observable.add_observer(Rc::new(Failing));
        observable.add_observer(after.clone());

        let notified = observable.notify_observers("count", &SettingValue::Int(6), None);

        assert_eq!(notified, 3);
        assert_eq!(before.calls.borrow().len(), 1);
        assert_eq!(after.calls.borrow().len(), 1);
        assert_eq!(
            sink.errors(),
            vec!["Error in observer Failing: observer exploded"]
        );
    }

    #[test]
    fn observers_run_in_registration_order_past_failures() {
        let (sink, mut observable) = registry();
        let order = Rc::new(RefCell::new(Vec::new()));
        for index in 0..3 {
            let seen = order.clone();
            let observer: Rc<dyn SettingsObserver> = Rc::new(
                move |_: &str, _: &SettingValue, _: Option<&SettingValue>| -> anyhow::Result<()> {
                    seen.borrow_mut().push(index);
                    if index == 1 {
                        bail!("second observer failed");
                    }
                    Ok(())
                },
            );
            observable.add_observer(observer);
        }

        observable.notify_observers("count", &SettingValue::Int(6), None);

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(
            sink.errors(),
            vec!["Error in observer closure: second observer failed"]
        );
    }

    #[test]
    fn panicking_observer_is_contained() {
        let (sink, mut observable) = registry();
        let after = Rc::new(Recorder::default());
        observable.add_observer(Rc::new(Panicking));
        observable.add_observer(after.clone());

        observable.notify_observers("count", &SettingValue::Int(6), None);

        assert_eq!(after.calls.borrow().len(), 1);
        assert_eq!(
            sink.errors(),
            vec!["Observer Panicking panicked: observer panicked"]
        );
    }

    #[test]
    fn notification_summary_is_logged_once() {
        let (sink, mut observable) = registry();
        observable.add_observer(Rc::new(Recorder::default()));
        observable.add_observer(Rc::new(Recorder::default()));
        sink.clear();

        observable.notify_observers("stringTextInput", &SettingValue::from("hi"), None);

        assert_eq!(
            sink.logs(),
            vec!["Notifying 2 observers of setting change: stringTextInput = hi"]
        );
    }
}
