#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    Hidden,
    Radio,
    Checkbox,
    #[default]
    Text,
    Submit,
}

impl InputType {
    /// The value of the HTML `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Text => "text",
            Self::Submit => "submit",
        }
    }

    /// Whether the control only submits while checked.
    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    Form,
    #[default]
    Div,
    Fieldset,
    Label,
    Span,
    Input(InputType),
}

impl Tag {
    /// The HTML tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Div => "div",
            Self::Fieldset => "fieldset",
            Self::Label => "label",
            Self::Span => "span",
            Self::Input(_) => "input",
        }
    }

    pub fn input_type(self) -> Option<InputType> {
        match self {
            Self::Input(kind) => Some(kind),
            _ => None,
        }
    }

    /// Void elements never carry children.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Input(_))
    }
}
