mod assessment;
mod documents;
mod home;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use documents::DocumentsView;
pub use home::HomeView;
pub use state::ViewError;
