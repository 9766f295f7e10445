#![allow(unused_imports)]
//! Shared imports for core and features.

pub use crate::app::{App, Navigation, View};
pub use crate::core::effects::CoreEffects;
pub use crate::core::infra::{GuideRefreshTimer, RequestKey, Requests};
pub use crate::gateway::actor::{GatewayCommand, GatewayEvent, GatewayOp};
pub use crate::messages::app::{AppCommand, AppEvent};
