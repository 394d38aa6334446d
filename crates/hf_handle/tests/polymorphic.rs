//! End-to-end behavior of owning handles over a polymorphic hierarchy.

use std::cell::RefCell;
use std::rc::Rc;

use hf_handle::{MaybeOwn, Own, convert, impl_object_duplicate};

type EventLog = Rc<RefCell<Vec<String>>>;

trait Creature {
    fn describe(&self) -> String;
    fn rename(&mut self, name: &str);
    fn boxed(&self) -> Box<dyn Creature>;
}

impl_object_duplicate!(Creature, boxed);

#[derive(Clone)]
struct Animal {
    id: i32,
    log: EventLog,
}

impl Creature for Animal {
    fn describe(&self) -> String {
        format!("animal #{}", self.id)
    }
    fn rename(&mut self, _name: &str) {}
    fn boxed(&self) -> Box<dyn Creature> {
        Box::new(self.clone())
    }
}

impl Drop for Animal {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop animal #{}", self.id));
    }
}

#[derive(Clone)]
struct Pet {
    id: i32,
    name: String,
    log: EventLog,
}

impl Creature for Pet {
    fn describe(&self) -> String {
        format!("pet {} #{}", self.name, self.id)
    }
    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }
    fn boxed(&self) -> Box<dyn Creature> {
        Box::new(self.clone())
    }
}

impl Drop for Pet {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop pet {}", self.name));
    }
}

#[test]
fn base_view_copy_preserves_dynamic_type() {
    let log = EventLog::default();

    let held: Own<dyn Creature> = Own::from_box(Box::new(Pet {
        id: 1,
        name: "Rex".to_string(),
        log: log.clone(),
    }));

    // Copying through the base view must reach Pet's duplication, not
    // flatten to some base representation.
    let copy = held.clone();
    assert_eq!(copy.get().describe(), "pet Rex #1");
}

#[test]
fn copies_mutate_and_drop_independently() {
    let log = EventLog::default();
    {
        let original: Own<dyn Creature> = Own::from_box(Box::new(Pet {
            id: 2,
            name: "Ada".to_string(),
            log: log.clone(),
        }));
        let mut copy = original.clone();
        copy.get_mut().rename("Eve");

        assert_eq!(original.get().describe(), "pet Ada #2");
        assert_eq!(copy.get().describe(), "pet Eve #2");
    }
    // Most recently constructed handle is destroyed first.
    assert_eq!(
        *log.borrow(),
        ["drop pet Eve", "drop pet Ada"],
        "drop order must be reverse of construction",
    );
}

#[test]
fn covariant_move_transfers_the_allocation() {
    let log = EventLog::default();
    let pet = Own::new(Pet {
        id: 3,
        name: "Jo".to_string(),
        log: log.clone(),
    });

    let base: Own<dyn Creature> = Own::from_box(pet.into_box());
    assert_eq!(base.get().describe(), "pet Jo #3");
    // Nothing was duplicated, so nothing has dropped yet.
    assert!(log.borrow().is_empty());

    drop(base);
    assert_eq!(*log.borrow(), ["drop pet Jo"]);
}

#[test]
fn optional_base_views_propagate_and_copy() {
    let log = EventLog::default();
    let slot: MaybeOwn<dyn Creature> = MaybeOwn::adopt(Some(Box::new(Animal {
        id: 4,
        log: log.clone(),
    })));

    let copy = convert::copied_optional(&slot);
    assert_eq!(copy.get().map(|c| c.describe()).as_deref(), Some("animal #4"));

    let empty: MaybeOwn<dyn Creature> = MaybeOwn::empty();
    assert!(convert::copied_optional(&empty).is_empty());
}
