//! Private onboarding channels: one per subject, removed shortly after the
//! subject is verified.

mod service;
mod traits;

pub use service::OnboardingService;
pub use traits::ChannelServiceTrait;
