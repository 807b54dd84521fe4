//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifies one mounted carousel widget instance.
///
/// Timers are keyed by this id so two carousels on the same page never
/// cancel each other's autoplay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarouselId(String);

/// Identifies one registration flow instance (one browser tab session).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowId(String);

impl_id!(CarouselId, FlowId);
