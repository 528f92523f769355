//! Step navigation for the Wizard.

use log::debug;

use super::Wizard;
use crate::provision::Provisioner;

impl<P: Provisioner> Wizard<P> {
    /// Moves to the next step. Does nothing on the last step.
    pub fn advance(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                debug!("Advancing from step {} to {}", self.step.number(), next.number());
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Moves to the previous step. Does nothing on the first step.
    pub fn retreat(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        match self.step.prev() {
            Some(prev) => {
                debug!("Going back from step {} to {}", self.step.number(), prev.number());
                self.step = prev;
                true
            }
            None => false,
        }
    }
}
