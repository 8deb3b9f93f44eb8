//! Display regions and the id input, injected into the controller.

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    AllItems,
    SingleItem,
    ErrorMessage,
    CreatedItem,
}

/// What the controller reads from and writes to.
pub trait Surface {
    fn set_text(&self, region: Region, text: &str);

    fn text(&self, region: Region) -> String;

    /// Current value of the id input.
    fn input_value(&self) -> String;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn set_text(&self, region: Region, text: &str) {
        (**self).set_text(region, text)
    }

    fn text(&self, region: Region) -> String {
        (**self).text(region)
    }

    fn input_value(&self) -> String {
        (**self).input_value()
    }
}

/// `Surface` kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    regions: RefCell<HashMap<Region, String>>,
    input: RefCell<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&self, value: &str) {
        *self.input.borrow_mut() = value.to_string();
    }
}

impl Surface for MemorySurface {
    fn set_text(&self, region: Region, text: &str) {
        self.regions.borrow_mut().insert(region, text.to_string());
    }

    fn text(&self, region: Region) -> String {
        self.regions.borrow().get(&region).cloned().unwrap_or_default()
    }

    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }
}
