/// Marks the most recently clicked link of a navigation bar as active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<T> {
    active: Option<T>,
}

impl<T> Default for Navigation<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: PartialEq> Navigation<T> {
    pub fn activate(&mut self, link: T) {
        self.active = Some(link);
    }

    #[must_use]
    pub fn is_active(&self, link: &T) -> bool {
        self.active.as_ref() == Some(link)
    }

    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }
}
