//! Shared ownership helpers
//!
//! Everything in a light rig lives on the frame thread. Lights, the material
//! and the texture manager are reachable both from the scene and from the
//! control bindings that edit them, so they are held behind `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded shared, mutable ownership
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value for shared ownership
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
