/// A single page of the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The key this step's answer is stored under in `Answers`.
    key: String,

    /// The prompt text shown to the user.
    title: String,

    /// Optional clarification shown next to the title.
    description: Option<String>,

    /// The kind of step (determines the widget and the answer type).
    kind: StepKind,
}

impl Step {
    /// Create a new step.
    pub fn new(key: impl Into<String>, title: impl Into<String>, kind: StepKind) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            kind,
        }
    }

    /// Create a free text step.
    pub fn input(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, StepKind::Input(InputStep::default()))
    }

    /// Create a single-choice step.
    pub fn select<I, S>(key: impl Into<String>, title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(key, title, StepKind::Select(SelectStep::new(options)))
    }

    /// Create a yes/no step.
    pub fn confirm(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, StepKind::Confirm(ConfirmStep))
    }

    /// Create a multiple-choice step.
    pub fn multi_select<I, S>(key: impl Into<String>, title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(key, title, StepKind::MultiSelect(MultiSelectStep::new(options)))
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the placeholder. Only meaningful for input steps; ignored otherwise.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let StepKind::Input(input) = &mut self.kind {
            input.placeholder = Some(placeholder.into());
        }
        self
    }

    /// Set the default answer. Only meaningful for input steps; ignored otherwise.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        if let StepKind::Input(input) = &mut self.kind {
            input.default = Some(default.into());
        }
        self
    }

    /// Get the answer key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the step kind.
    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// The options of a select or multi-select step.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            StepKind::Select(select) => Some(&select.options),
            StepKind::MultiSelect(multi) => Some(&multi.options),
            StepKind::Input(_) | StepKind::Confirm(_) => None,
        }
    }
}

/// The kind of step, determining the widget and answer type.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Single-line text input. Answer: `AnswerValue::Text`.
    Input(InputStep),

    /// Pick exactly one option. Answer: `AnswerValue::Text`.
    Select(SelectStep),

    /// Yes/no confirmation. Answer: `AnswerValue::Flag`.
    Confirm(ConfirmStep),

    /// Pick any number of options. Answer: `AnswerValue::TextList`.
    MultiSelect(MultiSelectStep),
}

impl StepKind {
    /// Short lowercase name, matching the serialized `type` field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Select(_) => "select",
            Self::Confirm(_) => "confirm",
            Self::MultiSelect(_) => "multiselect",
        }
    }
}

/// Configuration for a text input step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputStep {
    /// Hint text shown while the buffer is empty.
    pub placeholder: Option<String>,

    /// Value committed when the buffer is empty, and the initial buffer.
    pub default: Option<String>,
}

/// Configuration for a single-choice step.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStep {
    /// The choices, in display order.
    pub options: Vec<String>,
}

impl SelectStep {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a yes/no step. Always starts at "No".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmStep;

/// Configuration for a multiple-choice step.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectStep {
    /// The choices, in display order. Committed answers keep this order.
    pub options: Vec<String>,
}

impl MultiSelectStep {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}
