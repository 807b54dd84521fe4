use thiserror::Error;

/// Static configuration defects.
///
/// These are programming-time mistakes in a step catalog, a form schema or a
/// carousel breakpoint table. They are reported when the configuration is
/// built so that a broken table never reaches a running widget.
///
/// 静态配置错误：在构建配置时立即报告。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("field `{field}` must equal unknown field `{other}`")]
    UnknownEqualityTarget { field: String, other: String },

    #[error("step catalog is empty")]
    EmptyCatalog,

    #[error("step {found} is out of order (expected step {expected})")]
    StepOutOfOrder { expected: usize, found: usize },

    #[error("step {step} transitions to missing step {target}")]
    UnknownTransitionTarget { step: usize, target: usize },

    #[error("step {step} jumps backwards to step {target}")]
    BackwardJump { step: usize, target: usize },

    #[error("only the last step may complete the flow (step {0} does)")]
    PrematureCompletion(usize),

    #[error("last step {0} must complete the flow")]
    MissingCompletion(usize),

    #[error("breakpoint table is empty")]
    EmptyBreakpoints,

    #[error("breakpoint table has no entry for viewport width {0}")]
    UncoveredViewport(u32),

    #[error("breakpoint at {0}px is declared more than once")]
    DuplicateBreakpoint(u32),

    #[error("breakpoint at {0}px shows zero items")]
    ZeroItemsPerView(u32),

    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
}
