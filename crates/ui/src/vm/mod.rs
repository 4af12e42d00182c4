mod assessment_vm;
mod dashboard_vm;
mod document_vm;
mod time_fmt;

pub use assessment_vm::{
    AssessmentIntent, AssessmentScreen, AssessmentVm, CatalogueVm, ChoiceVm, OutcomeRowVm,
    QuestionVm, RecentResultVm, ResultsVm, TemplateCardVm,
};
pub use dashboard_vm::{DashboardVm, StatVm, map_dashboard};
pub use document_vm::{DocumentListVm, DocumentRowVm, SubjectOptionVm, map_document_list};
