mod survey;
mod survey_response;

pub use survey::Survey;
pub use survey_response::SurveyResponse;
