use crate::error::ConfigurationError;
use crate::forms;
use crate::validation::StepSchema;

/// Where a step goes after its input validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    /// Advance to `index + 1`.
    Next,
    /// Jump forward to an explicit step, skipping the ones in between.
    JumpTo(usize),
    /// Terminal step: a valid submission completes the flow.
    Complete,
}

/// One screen of the registration form.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub index: usize,
    pub title: String,
    pub schema: StepSchema,
    pub transition: StepTransition,
}

impl StepDefinition {
    pub fn new(
        index: usize,
        title: impl Into<String>,
        schema: StepSchema,
        transition: StepTransition,
    ) -> Self {
        Self {
            index,
            title: title.into(),
            schema,
            transition,
        }
    }

    pub fn is_final(&self) -> bool {
        self.transition == StepTransition::Complete
    }
}

/// Ordered, validated set of registration steps numbered `1..=N`.
#[derive(Debug, Clone)]
pub struct StepCatalog {
    steps: Vec<StepDefinition>,
}

impl StepCatalog {
    /// Build a catalog and check its transition table.
    ///
    /// Steps must be numbered `1..=N` in order, every jump must land on an
    /// existing later step, and exactly the last step completes the flow.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, ConfigurationError> {
        if steps.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }
        let total = steps.len();
        for (pos, step) in steps.iter().enumerate() {
            let expected = pos + 1;
            if step.index != expected {
                return Err(ConfigurationError::StepOutOfOrder {
                    expected,
                    found: step.index,
                });
            }
            match step.transition {
                StepTransition::Next if step.index == total => {
                    return Err(ConfigurationError::MissingCompletion(step.index));
                }
                StepTransition::Next => {}
                StepTransition::JumpTo(target) => {
                    if target == 0 || target > total {
                        return Err(ConfigurationError::UnknownTransitionTarget {
                            step: step.index,
                            target,
                        });
                    }
                    if target <= step.index {
                        return Err(ConfigurationError::BackwardJump {
                            step: step.index,
                            target,
                        });
                    }
                }
                StepTransition::Complete if step.index != total => {
                    return Err(ConfigurationError::PrematureCompletion(step.index));
                }
                StepTransition::Complete => {}
            }
        }
        Ok(Self { steps })
    }

    /// The four-step sign-up flow used by the site.
    ///
    /// Step 3 names its successor explicitly (`JumpTo(4)`) instead of
    /// relying on `Next`.
    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::new(vec![
            StepDefinition::new(1, "Get Started", forms::mobile_step()?, StepTransition::Next),
            StepDefinition::new(2, "Set Your PIN", forms::parent_pin_step()?, StepTransition::Next),
            StepDefinition::new(
                3,
                "Parent Details",
                forms::parent_details_step()?,
                StepTransition::JumpTo(4),
            ),
            StepDefinition::new(
                4,
                "Child Details",
                forms::child_details_step()?,
                StepTransition::Complete,
            ),
        ])
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }
}
