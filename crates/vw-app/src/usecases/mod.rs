//! Use cases
//! 每个 use case 持有一个纯状态机，并负责执行它产生的 action。
//!
//! RegistrationFlow  → 多步注册 (step 1..N → SubmitDraft)
//! SubmitForm        → 登录 / 联系表单 (validate → SubmitDraft)
//! CarouselController + run loop → 自动轮播 (UI events / timer expiries)

pub mod carousel;
pub mod forms;
pub mod registration;
