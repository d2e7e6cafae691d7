/// Page events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A control's value or checked state changed through user interaction.
    Change { target: String },
    /// Pointer activation of an element.
    Click { target: String },
    /// A form is about to be submitted.
    Submit { form: String },
}

impl Event {
    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn submit(form: impl Into<String>) -> Self {
        Self::Submit { form: form.into() }
    }
}
