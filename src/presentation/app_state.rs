// Application state for HTTP handlers
use crate::application::case_study_service::CaseStudyService;

#[derive(Clone)]
pub struct AppState {
    pub case_study_service: CaseStudyService,
}
