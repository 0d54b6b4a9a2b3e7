mod list;
mod onboarding;

pub use list::CustomerList;
pub use onboarding::CustomerOnboarding;
