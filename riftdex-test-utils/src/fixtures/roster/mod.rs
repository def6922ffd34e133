use crate::TestSetup;

pub mod factory;

impl TestSetup {
    pub fn roster(&mut self) -> RosterFixtures<'_> {
        RosterFixtures { setup: self }
    }
}

pub struct RosterFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
